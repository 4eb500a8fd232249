use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum DayGroup {
    Today,
    Yesterday,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub day: DayGroup,
    pub title: String,
    pub body: String,
    pub time: String,
}

impl Notification {
    fn reminder(day: DayGroup, body: &str, time: &str) -> Self {
        Self {
            day,
            title: "You have 1 message!".to_string(),
            body: body.to_string(),
            time: time.to_string(),
        }
    }

    /// Reminder feed shown on the notification tab. There is no backend
    /// endpoint for it yet.
    pub fn feed() -> Vec<Self> {
        const INPUT_PEGAWAI: &str = "Kamu belum melakukan input pegawai, harap input secepatnya agar pegawai baru dapat melakukan validasi";
        const PRESENSI: &str = "Kamu belum melakukan melakukan presensi harian, harap segera presensi agar tidak mendapat surat peringatan";
        const AKSES: &str = "Ada pegawai yang meminta izin mendapat profil pribadi, Cek akses untuk memfasilitasi";

        vec![
            Self::reminder(DayGroup::Today, INPUT_PEGAWAI, "10:00"),
            Self::reminder(DayGroup::Today, PRESENSI, "08:05"),
            Self::reminder(DayGroup::Yesterday, INPUT_PEGAWAI, "12:00"),
            Self::reminder(DayGroup::Yesterday, PRESENSI, "08:05"),
            Self::reminder(DayGroup::Yesterday, AKSES, "04:44"),
        ]
    }
}
