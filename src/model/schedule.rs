use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One class on the teaching schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSchedule {
    pub id_kelas_mk: u64,
    #[serde(default)]
    pub nama_mk: Option<String>,
    #[serde(default)]
    pub nama_kelas: Option<String>,
    /// Remaining columns (day, hours, room) as sent by the proxy.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
