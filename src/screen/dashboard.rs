//! Home tab: user card, teaching schedule, class start and attendance actions.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;
use tracing::{error, info, warn};

use crate::api;
use crate::app::AppContext;
use crate::model::attendance::{AttendanceStatus, NewAttendance};
use crate::model::schedule::ClassSchedule;
use crate::model::user::UserLoginData;

use super::state::{LoadState, Notice};

pub const UNKNOWN_JABATAN: &str = "Jabatan Tidak Diketahui";
pub const DEFAULT_NAME: &str = "Pengguna";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassButton {
    Start,
    Starting,
    Started,
}

impl ClassButton {
    pub fn label(self) -> &'static str {
        match self {
            ClassButton::Start => "Mulai Perkuliahan",
            ClassButton::Starting => "Memulai...",
            ClassButton::Started => "Mata kuliah sudah dimulai!",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == ClassButton::Start
    }
}

#[derive(Debug, Default)]
pub struct DashboardScreen {
    user: Option<UserLoginData>,
    employee_id: Option<u64>,
    pub schedule: LoadState<Vec<ClassSchedule>>,
    starting: HashSet<u64>,
    started: HashSet<u64>,
    marking_attendance: bool,
}

impl DashboardScreen {
    pub fn new(ctx: &AppContext) -> Self {
        let session = ctx.session.current();
        Self {
            user: session.as_ref().map(|s| s.profile()),
            employee_id: session.as_ref().and_then(|s| s.employee_id()),
            ..Self::default()
        }
    }

    pub fn user(&self) -> Option<&UserLoginData> {
        self.user.as_ref()
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.nama.as_deref().or(u.username.as_deref()))
            .unwrap_or(DEFAULT_NAME)
    }

    pub fn jabatan(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.pegawai.as_ref())
            .and_then(|p| p.jabatan())
            .unwrap_or(UNKNOWN_JABATAN)
    }

    pub fn attendance_options() -> impl Iterator<Item = AttendanceStatus> {
        AttendanceStatus::iter()
    }

    pub fn is_marking_attendance(&self) -> bool {
        self.marking_attendance
    }

    /// Loads the schedule. Any failure or a missing employee id shows an
    /// empty schedule rather than an error.
    pub async fn load_schedule(&mut self, ctx: &AppContext) {
        let Some(id_pegawai) = self.employee_id else {
            self.schedule = LoadState::Loaded(Vec::new());
            return;
        };

        self.schedule = LoadState::Loading;
        let classes = api::schedule::teaching_schedule(&ctx.client, id_pegawai)
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, id_pegawai, "Failed to load teaching schedule");
                Vec::new()
            });
        self.schedule = LoadState::Loaded(classes);
    }

    /// Label shown when the schedule is empty or still loading.
    pub fn schedule_placeholder(&self) -> Option<&'static str> {
        match &self.schedule {
            LoadState::Idle | LoadState::Loading => Some("Memuat jadwal..."),
            LoadState::Loaded(classes) if classes.is_empty() => {
                Some("Tidak ada jadwal ditemukan.")
            }
            _ => None,
        }
    }

    pub fn class_button(&self, id_kelas_mk: u64) -> ClassButton {
        if self.starting.contains(&id_kelas_mk) {
            ClassButton::Starting
        } else if self.started.contains(&id_kelas_mk) {
            ClassButton::Started
        } else {
            ClassButton::Start
        }
    }

    pub async fn start_class(&mut self, ctx: &AppContext, id_kelas_mk: u64) -> Notice {
        if !self.class_button(id_kelas_mk).is_enabled() {
            return Notice::info(self.class_button(id_kelas_mk).label());
        }
        let Some(id_pegawai) = self.employee_id else {
            return Notice::failed("Data pegawai tidak ditemukan.");
        };

        self.starting.insert(id_kelas_mk);
        let result = api::schedule::start_class(&ctx.client, id_pegawai, id_kelas_mk).await;
        self.starting.remove(&id_kelas_mk);

        match result {
            Ok(_) => {
                info!(id_pegawai, id_kelas_mk, "Class started");
                self.started.insert(id_kelas_mk);
                Notice::success("Perkuliahan dimulai!")
            }
            Err(e) => {
                error!(error = %e, id_pegawai, id_kelas_mk, "Failed to start class");
                Notice::error(e.user_message("Gagal memulai perkuliahan!"))
            }
        }
    }

    /// Records one attendance action stamped with `now`.
    pub async fn mark_attendance(
        &mut self,
        ctx: &AppContext,
        status: AttendanceStatus,
        note: Option<String>,
        now: DateTime<Utc>,
    ) -> Notice {
        let Some(id_pegawai) = self.employee_id else {
            return Notice::failed("Data pegawai tidak ditemukan.");
        };

        self.marking_attendance = true;
        let entry = NewAttendance::new(id_pegawai, status, now, note);
        let result = api::attendance::record(&ctx.client, &entry).await;
        self.marking_attendance = false;

        match result {
            Ok(_) => Notice::success(format!("Presensi {status} berhasil!")),
            Err(e) => {
                error!(error = %e, id_pegawai, %status, "Failed to record attendance");
                Notice::failed(e.user_message("Gagal presensi"))
            }
        }
    }

    pub fn logout(&mut self, ctx: &AppContext) -> Result<(), Notice> {
        ctx.session.logout().map_err(|e| {
            error!(error = %e, "Logout error");
            Notice::error("Failed to log out. Please try again.")
        })?;
        *self = Self::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_button_states() {
        let mut screen = DashboardScreen::default();
        assert_eq!(screen.class_button(7), ClassButton::Start);
        screen.starting.insert(7);
        assert_eq!(screen.class_button(7).label(), "Memulai...");
        screen.starting.remove(&7);
        screen.started.insert(7);
        assert!(!screen.class_button(7).is_enabled());
    }

    #[test]
    fn placeholders_follow_schedule_state() {
        let mut screen = DashboardScreen::default();
        assert_eq!(screen.schedule_placeholder(), Some("Memuat jadwal..."));
        screen.schedule = LoadState::Loaded(Vec::new());
        assert_eq!(
            screen.schedule_placeholder(),
            Some("Tidak ada jadwal ditemukan.")
        );
        assert_eq!(screen.display_name(), DEFAULT_NAME);
        assert_eq!(screen.jabatan(), UNKNOWN_JABATAN);
    }

    #[test]
    fn offers_all_attendance_actions() {
        let options: Vec<_> = DashboardScreen::attendance_options().collect();
        assert_eq!(
            options,
            vec![
                AttendanceStatus::Hadir,
                AttendanceStatus::Pulang,
                AttendanceStatus::Izin
            ]
        );
    }
}
