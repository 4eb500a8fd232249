use serde_json::Value;

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::model::schedule::ClassSchedule;
use crate::models::StartClassReq;

/// `GET /api/pegawai/proxy-jadwal/{id}`. A `null` body means no classes.
pub async fn teaching_schedule(
    client: &ApiClient,
    id_pegawai: u64,
) -> Result<Vec<ClassSchedule>, RequestError> {
    let classes: Option<Vec<ClassSchedule>> = client
        .get(&format!("/api/pegawai/proxy-jadwal/{id_pegawai}"))
        .await?;
    Ok(classes.unwrap_or_default())
}

/// `POST /api/pegawai/proxy-buka`, opening a class session.
pub async fn start_class(
    client: &ApiClient,
    id_pegawai: u64,
    id_kelas_mk: u64,
) -> Result<Value, RequestError> {
    client
        .post(
            "/api/pegawai/proxy-buka",
            &StartClassReq {
                id_pegawai,
                id_kelas_mk,
            },
        )
        .await
}
