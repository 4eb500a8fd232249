use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

#[derive(Debug, Serialize)]
pub struct LoginReqDto {
    pub username: String,
    pub password: String,
}

/// Body of a successful `POST /api/auth/login`.
///
/// `user` is kept as the exact JSON text the server sent so it can be stored
/// without being re-shaped.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Box<RawValue>,
}

#[derive(Debug, Serialize)]
pub struct StartClassReq {
    pub id_pegawai: u64,
    pub id_kelas_mk: u64,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AttendanceQuery {
    pub id_pegawai: u64,
}
