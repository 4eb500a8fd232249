use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::de::null_as_default;

/// What an attendance action records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum AttendanceStatus {
    /// Present, check-in.
    Hadir,
    /// Departed, check-out.
    Pulang,
    /// Excused.
    Izin,
}

impl AttendanceStatus {
    /// Check-in table holds present and excused entries; check-out table the rest.
    pub fn is_check_in(self) -> bool {
        matches!(self, AttendanceStatus::Hadir | AttendanceStatus::Izin)
    }
}

/// Row of `GET /api/presensi`. Null columns read as empty so a single bad
/// row still shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_presensi: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tanggal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub jam_masuk: Option<String>,
    #[serde(default)]
    pub jam_keluar: Option<String>,
    #[serde(default)]
    pub keterangan_izin: Option<String>,
}

impl AttendanceEntry {
    pub fn status(&self) -> Option<AttendanceStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceList {
    #[serde(default)]
    pub presensi: Vec<AttendanceEntry>,
}

/// Body of `POST /api/presensi`. Unused timestamps are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAttendance {
    pub id_pegawai: u64,
    pub status: AttendanceStatus,
    pub tanggal: String,
    pub jam_masuk: Option<String>,
    pub jam_keluar: Option<String>,
    pub keterangan_izin: Option<String>,
}

impl NewAttendance {
    pub const DEFAULT_EXCUSE: &'static str = "Izin";

    pub fn new(
        id_pegawai: u64,
        status: AttendanceStatus,
        now: DateTime<Utc>,
        note: Option<String>,
    ) -> Self {
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let (jam_masuk, jam_keluar, keterangan_izin) = match status {
            AttendanceStatus::Hadir => (Some(stamp), None, None),
            AttendanceStatus::Pulang => (None, Some(stamp), None),
            AttendanceStatus::Izin => (
                Some(stamp.clone()),
                Some(stamp),
                Some(
                    note.filter(|n| !n.trim().is_empty())
                        .unwrap_or_else(|| Self::DEFAULT_EXCUSE.to_string()),
                ),
            ),
        };

        Self {
            id_pegawai,
            status,
            tanggal: now.format("%Y-%m-%d").to_string(),
            jam_masuk,
            jam_keluar,
            keterangan_izin,
        }
    }
}
