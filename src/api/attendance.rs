use serde_json::Value;
use tracing::info;

use crate::client::ApiClient;
use crate::error::RequestError;
use crate::model::attendance::{AttendanceEntry, AttendanceList, NewAttendance};
use crate::models::AttendanceQuery;

/// `POST /api/presensi`. Entries are append-only; there is no update or delete.
pub async fn record(client: &ApiClient, entry: &NewAttendance) -> Result<Value, RequestError> {
    let result = client.post("/api/presensi", entry).await?;
    info!(
        id_pegawai = entry.id_pegawai,
        status = %entry.status,
        tanggal = %entry.tanggal,
        "Attendance recorded"
    );
    Ok(result)
}

/// `GET /api/presensi?id_pegawai=…`
pub async fn list_for(
    client: &ApiClient,
    id_pegawai: u64,
) -> Result<Vec<AttendanceEntry>, RequestError> {
    let list: Option<AttendanceList> = client
        .get_query("/api/presensi", &AttendanceQuery { id_pegawai })
        .await?;
    Ok(list.map(|l| l.presensi).unwrap_or_default())
}
