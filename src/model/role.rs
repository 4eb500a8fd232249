use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    /// Lecturer.
    Dosen,
    /// Staff administrator.
    #[strum(to_string = "adminpegawai")]
    AdminPegawai,
}

impl Role {
    /// Roles arrive either as a name or as a numeric code. Numeric codes have
    /// no agreed meaning yet, so only names resolve.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        value.as_str().and_then(|s| s.trim().parse().ok())
    }

    pub fn can_manage_employees(self) -> bool {
        self == Role::AdminPegawai
    }
}
