use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::lenient;
use super::employee::PegawaiDetail;
use super::role::Role;

/// Typed view of the `user` object returned by login and kept in the session.
/// A field of the wrong type reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserLoginData {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub id_user: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub nip: Option<String>,
    pub role: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub nama: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub id_kelas_mk: Option<Vec<u64>>,
    #[serde(deserialize_with = "lenient")]
    pub pegawai: Option<PegawaiDetail>,
}

impl UserLoginData {
    pub fn role(&self) -> Option<Role> {
        self.role.as_ref().and_then(Role::from_value)
    }

    pub fn nip(&self) -> Option<&str> {
        self.pegawai
            .as_ref()
            .and_then(|p| p.nip.as_deref())
            .or(self.nip.as_deref())
    }

    pub fn foto(&self) -> Option<&str> {
        self.pegawai.as_ref().and_then(|p| p.foto.as_deref())
    }
}

/// Employee id of a stored user, looked up in order:
/// `pegawai.id_pegawai`, `pegawai.id`, `id_pegawai`, `id`.
///
/// Numeric strings are accepted.
pub fn employee_id_of(user: &Value) -> Option<u64> {
    let pegawai = user.get("pegawai");
    [
        pegawai.and_then(|p| p.get("id_pegawai")),
        pegawai.and_then(|p| p.get("id")),
        user.get("id_pegawai"),
        user.get("id"),
    ]
    .into_iter()
    .flatten()
    .find_map(as_id)
}

fn as_id(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64().filter(|id| *id > 0),
        Value::String(s) => s.trim().parse().ok().filter(|id| *id > 0),
        _ => None,
    }
}
