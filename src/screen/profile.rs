use serde_json::Value;
use tracing::error;

use crate::api;
use crate::app::AppContext;
use crate::model::employee::PegawaiEditData;

use super::state::{LoadState, Notice};

/// The logged-in user's own employee record.
#[derive(Debug, Default)]
pub struct ProfileScreen {
    pub state: LoadState<()>,
    pub draft: PegawaiEditData,
    editing: bool,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub async fn load(&mut self, ctx: &AppContext) -> Option<Notice> {
        self.state = LoadState::Loading;
        match api::employee::profile_me(&ctx.client).await {
            Ok(profile) => {
                self.draft = profile;
                self.state = LoadState::Loaded(());
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to load profile");
                let message = "Gagal memuat data profil.";
                self.state = LoadState::Failed(message.to_string());
                Some(Notice::error(message))
            }
        }
    }

    /// Enters edit mode, or saves and leaves it when already editing.
    pub async fn toggle_edit(&mut self, ctx: &AppContext) -> Option<Notice> {
        if self.editing {
            self.save(ctx).await
        } else {
            self.editing = true;
            None
        }
    }

    /// Saves the draft, then merges it into the stored user so other screens
    /// see the new values.
    pub async fn save(&mut self, ctx: &AppContext) -> Option<Notice> {
        if let Err(e) = api::employee::update_profile(&ctx.client, &self.draft).await {
            error!(error = %e, "Error saving profile");
            return Some(Notice::error("Gagal memperbarui profil."));
        }
        self.editing = false;

        if ctx.session.is_logged_in() {
            let patch = match serde_json::to_value(&self.draft) {
                Ok(Value::Object(map)) => map,
                _ => Default::default(),
            };
            if let Err(e) = ctx.session.update_user(&patch) {
                error!(error = %e, "Failed to refresh stored user after profile save");
            }
        }
        Some(Notice::success("Profil berhasil diperbarui!"))
    }
}
