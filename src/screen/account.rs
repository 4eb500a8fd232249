use crate::app::AppContext;
use crate::model::user::UserLoginData;

pub const UNKNOWN_ROLE: &str = "Role Tidak Diketahui";

/// Read-only account tab built from the stored user.
#[derive(Debug, Default)]
pub struct AccountScreen {
    user: Option<UserLoginData>,
    photo_url: Option<String>,
}

impl AccountScreen {
    pub fn new(ctx: &AppContext) -> Self {
        let user = ctx.session.current().map(|s| s.profile());
        let photo_url = user
            .as_ref()
            .and_then(|u| u.foto())
            .filter(|f| !f.is_empty())
            .map(|f| {
                if f.starts_with("http://") || f.starts_with("https://") {
                    f.to_string()
                } else {
                    ctx.client.photo_url(f)
                }
            });
        Self { user, photo_url }
    }

    pub fn name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.nama.as_deref())
    }

    pub fn nip(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.nip())
    }

    /// Structural or functional position of the stored employee.
    pub fn jabatan(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.pegawai.as_ref())
            .and_then(|p| p.jabatan())
            .unwrap_or(UNKNOWN_ROLE)
    }

    /// `None` means the default avatar.
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }
}
