use chrono::{Local, TimeZone};
use std::fmt;
use tracing::error;

use crate::api;
use crate::app::AppContext;
use crate::model::attendance::AttendanceEntry;
use crate::utils::format;

use super::state::LoadState;

pub const LOAD_ERROR: &str = "Gagal memuat data presensi";

/// One formatted line of the attendance tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub id: u64,
    pub tanggal: String,
    pub status: String,
    pub jam_masuk: String,
    pub jam_pulang: String,
    pub keterangan_izin: Option<String>,
}

impl AttendanceRow {
    pub fn from_entry<Tz: TimeZone>(entry: &AttendanceEntry, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            id: entry.id_presensi,
            tanggal: format::tanggal(&entry.tanggal, tz),
            status: entry.status.clone(),
            jam_masuk: format::jam(entry.jam_masuk.as_deref(), tz),
            jam_pulang: format::jam(entry.jam_keluar.as_deref(), tz),
            keterangan_izin: entry.keterangan_izin.clone(),
        }
    }
}

/// Check-in log (present and excused) and check-out log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceLog {
    pub masuk: Vec<AttendanceRow>,
    pub pulang: Vec<AttendanceRow>,
}

impl AttendanceLog {
    pub fn from_entries<Tz: TimeZone>(entries: &[AttendanceEntry], tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let mut log = Self::default();
        for entry in entries {
            let row = AttendanceRow::from_entry(entry, tz);
            match entry.status() {
                Some(status) if status.is_check_in() => log.masuk.push(row),
                Some(_) => log.pulang.push(row),
                // unknown statuses belong to neither table
                None => {}
            }
        }
        log
    }
}

#[derive(Debug, Default)]
pub struct AttendanceLogScreen {
    pub state: LoadState<AttendanceLog>,
}

impl AttendanceLogScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the logged-in employee's entries, shown in local time.
    pub async fn load(&mut self, ctx: &AppContext) {
        self.load_in(ctx, &Local).await
    }

    pub async fn load_in<Tz: TimeZone>(&mut self, ctx: &AppContext, tz: &Tz)
    where
        Tz::Offset: fmt::Display,
    {
        self.state = LoadState::Loading;

        let Some(session) = ctx.session.current() else {
            error!("User belum login");
            self.state = LoadState::Failed(LOAD_ERROR.to_string());
            return;
        };
        let Some(id_pegawai) = session.employee_id() else {
            error!("ID Pegawai tidak ditemukan");
            self.state = LoadState::Failed(LOAD_ERROR.to_string());
            return;
        };

        self.state = match api::attendance::list_for(&ctx.client, id_pegawai).await {
            Ok(entries) => LoadState::Loaded(AttendanceLog::from_entries(&entries, tz)),
            Err(e) => {
                error!(error = %e, id_pegawai, "Failed to load attendance log");
                LoadState::Failed(LOAD_ERROR.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn splits_entries_into_tables() {
        let entries: Vec<AttendanceEntry> = serde_json::from_value(json!([
            {"id_presensi": 1, "tanggal": "2025-06-26", "status": "Hadir",
             "jam_masuk": "2025-06-26T00:30:00.000Z", "jam_keluar": null},
            {"id_presensi": 2, "tanggal": "2025-06-26", "status": "Pulang",
             "jam_masuk": null, "jam_keluar": "2025-06-26T09:15:00.000Z"},
            {"id_presensi": 3, "tanggal": "2025-06-27", "status": "Izin",
             "jam_masuk": "08:00:00", "jam_keluar": "08:00:00", "keterangan_izin": "Sakit"},
            {"id_presensi": 4, "tanggal": "2025-06-27", "status": "Lainnya"}
        ]))
        .unwrap();

        let log = AttendanceLog::from_entries(&entries, &Utc);
        assert_eq!(log.masuk.len(), 2);
        assert_eq!(log.pulang.len(), 1);

        assert_eq!(log.masuk[0].tanggal, "26-06-2025");
        assert_eq!(log.masuk[0].jam_masuk, "00:30");
        assert_eq!(log.masuk[0].jam_pulang, "-");
        assert_eq!(log.masuk[1].keterangan_izin.as_deref(), Some("Sakit"));
        assert_eq!(log.masuk[1].jam_masuk, "08:00");
        assert_eq!(log.pulang[0].jam_pulang, "09:15");
    }
}
