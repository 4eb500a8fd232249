use serde_json::Value;
use tracing::{debug, error};

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::model::employee::{Pegawai, PegawaiEditData};

/// `GET /api/pegawai`. The body must be a JSON array.
pub async fn list(client: &ApiClient) -> Result<Vec<Pegawai>, RequestError> {
    let body: Value = client.get("/api/pegawai").await?;
    match body {
        Value::Null => Err(RequestError::Decode("No data received from server".into())),
        Value::Array(_) => {
            let rows: Vec<Pegawai> = serde_json::from_value(body).map_err(|e| {
                error!(error = %e, "Employee rows did not match the expected shape");
                RequestError::Decode(e.to_string())
            })?;
            debug!(count = rows.len(), "Fetched employees");
            Ok(rows)
        }
        other => {
            error!(body = %other, "Invalid employee list response");
            Err(RequestError::Decode(
                "Invalid response format from server".into(),
            ))
        }
    }
}

/// `POST /api/pegawai`
pub async fn create(client: &ApiClient, data: &PegawaiEditData) -> Result<Value, RequestError> {
    client.post("/api/pegawai", data).await
}

/// `PUT /api/pegawai/{id}`
pub async fn update(
    client: &ApiClient,
    id_pegawai: u64,
    data: &PegawaiEditData,
) -> Result<Value, RequestError> {
    client.put(&format!("/api/pegawai/{id_pegawai}"), data).await
}

/// `DELETE /api/pegawai/{id}`
pub async fn delete(client: &ApiClient, id_pegawai: u64) -> Result<Value, RequestError> {
    client.delete(&format!("/api/pegawai/{id_pegawai}")).await
}

/// `GET /api/pegawai/profile/me`, the logged-in user's own record.
pub async fn profile_me(client: &ApiClient) -> Result<PegawaiEditData, RequestError> {
    client.get("/api/pegawai/profile/me").await
}

/// `PUT /api/pegawai`, saving the logged-in user's own record.
pub async fn update_profile(
    client: &ApiClient,
    data: &PegawaiEditData,
) -> Result<Value, RequestError> {
    client.put("/api/pegawai", data).await
}
