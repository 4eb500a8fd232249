//! Authenticated HTTP client for the SIMPADU backend.
//!
//! Every call goes to `base_url + path`. The bearer token is read from the
//! session store right before each request, so a login or logout performed
//! elsewhere is picked up by the next call. The client never writes to the
//! store, never retries and takes no action on 401: failures are returned to
//! the caller as [`RequestError`]. An unreadable store counts as no token.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Config, normalize_origin};
use crate::error::{RequestError, StorageError};
use crate::models::UploadResponse;
use crate::storage::{SessionStore, TOKEN_KEY};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &Config, store: Arc<dyn SessionStore>) -> Result<Self, RequestError> {
        Self::with_base_url(&config.base_url, config.timeout, store)
    }

    pub fn with_base_url(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, RequestError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(RequestError::Transport)?;

        Ok(Self {
            http,
            base_url: normalize_origin(base_url),
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Public location of an uploaded photo.
    pub fn photo_url(&self, file_name: &str) -> String {
        format!(
            "{}/uploads/{}",
            self.base_url.trim_end_matches("/api"),
            file_name
        )
    }

    /// Issues `method path` with an optional JSON body and returns the parsed
    /// response body of any 2xx reply. An empty body parses as `null`.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, RequestError>
    where
        B: Serialize + ?Sized,
    {
        self.request_as(method, path, body).await
    }

    /// Same as [`ApiClient::request`] but decodes the body into `T`.
    pub async fn request_as<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = self.send(builder, &method, &url).await?;
        decode(response, &method, &url).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request_as(Method::GET, path, None::<&()>).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let builder = self.http.get(&url).query(query);
        let response = self.send(builder, &Method::GET, &url).await?;
        decode(response, &Method::GET, &url).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_as(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_as(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request_as(Method::DELETE, path, None::<&()>).await
    }

    /// Uploads a JPEG as the `foto` part of a multipart form to `/uploads`.
    /// Returns the file name the server stored it under.
    pub async fn upload_photo(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<String, RequestError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .map_err(RequestError::Transport)?;
        let form = Form::new().part("foto", part);

        let url = self.url("/uploads");
        let builder = self.http.post(&url).multipart(form);
        let response = self.send(builder, &Method::POST, &url).await?;
        let uploaded: UploadResponse = decode(response, &Method::POST, &url).await?;
        uploaded
            .filename
            .filter(|name| !name.is_empty())
            .ok_or_else(|| RequestError::Decode("upload response has no filename".into()))
    }

    async fn send(
        &self,
        mut builder: RequestBuilder,
        method: &Method,
        url: &str,
    ) -> Result<Response, RequestError> {
        let token = match self.store.get_item(TOKEN_KEY) {
            Ok(token) => token,
            Err(StorageError::Corrupt(reason)) => {
                warn!(%reason, "Session store unreadable, sending without token");
                None
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token);
            debug!(%method, url, "Request with token");
        } else {
            debug!(%method, url, "Request without token");
        }

        builder.send().await.map_err(|e| {
            warn!(error = %e, %method, url, timeout = e.is_timeout(), "Request failed to complete");
            RequestError::Transport(e)
        })
    }
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    method: &Method,
    url: &str,
) -> Result<T, RequestError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(RequestError::Transport)?;

    if !status.is_success() {
        let message = serde_json::from_slice::<Value>(&bytes)
            .ok()
            .and_then(|body| error_message(&body));
        warn!(status = status.as_u16(), %method, url, message = ?message, "Request rejected");
        return Err(RequestError::Status { status, message });
    }

    let result = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(&bytes)
    };
    result.map_err(|e| {
        warn!(error = %e, %method, url, "Response body did not match the expected shape");
        RequestError::Decode(e.to_string())
    })
}

/// Picks the human-readable message out of an error body.
fn error_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|v| match v {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn client(base: &str) -> ApiClient {
        ApiClient::with_base_url(base, Duration::from_secs(1), Arc::new(MemoryStore::new()))
            .unwrap()
    }

    #[test]
    fn joins_paths_with_and_without_slash() {
        let c = client("https://example.test/ ");
        assert_eq!(c.url("/api/pegawai"), "https://example.test/api/pegawai");
        assert_eq!(c.url("api/auth/login"), "https://example.test/api/auth/login");
    }

    #[test]
    fn photo_url_drops_api_suffix() {
        assert_eq!(
            client("https://example.test/api").photo_url("a.jpg"),
            "https://example.test/uploads/a.jpg"
        );
        assert_eq!(
            client("https://example.test").photo_url("a.jpg"),
            "https://example.test/uploads/a.jpg"
        );
    }

    #[test]
    fn error_message_reads_message_then_error() {
        assert_eq!(
            error_message(&json!({"message": "Password salah"})).as_deref(),
            Some("Password salah")
        );
        assert_eq!(
            error_message(&json!({"error": "Missing token"})).as_deref(),
            Some("Missing token")
        );
        assert_eq!(error_message(&json!({"detail": "x"})), None);
    }
}
