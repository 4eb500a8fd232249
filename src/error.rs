//! Error types shared across the client, the local store and the screens.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown environment `{0}` (expected dev or prod)")]
    UnknownEnvironment(String),

    #[error("{key} must be a positive integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(String),
}

/// Failure of a single call through [`crate::client::ApiClient`].
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection refused, DNS, TLS, timeout and the like.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request failed with status code {}{}", status.as_u16(), message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RequestError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Transport(e) if e.is_timeout())
    }

    /// Message supplied by the server in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text a screen can show: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored user data is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("not logged in")]
    NotLoggedIn,
}

/// Local form checks that stop a submission before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Nama Pegawai dan NIP harus diisi!")]
    MissingPegawaiIdentity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = RequestError::Status {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: Some("NIP sudah terdaftar".into()),
        };
        assert_eq!(err.user_message("Gagal"), "NIP sudah terdaftar");
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn user_message_falls_back_on_blank_or_missing_text() {
        let blank = RequestError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("Gagal presensi"), "Gagal presensi");

        let decode = RequestError::Decode("eof".into());
        assert_eq!(decode.user_message("Gagal presensi"), "Gagal presensi");
        assert_eq!(decode.status(), None);
    }

    #[test]
    fn unauthorized_is_detected() {
        let err = RequestError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: None,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Request failed with status code 401");
    }
}
