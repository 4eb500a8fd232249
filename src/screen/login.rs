use tracing::{error, warn};

use crate::api;
use crate::app::AppContext;
use crate::error::{RequestError, ValidationError};
use crate::session::Session;

use super::state::Notice;

pub const GENERIC_LOGIN_ERROR: &str = "Something went wrong. Please try again.";
pub const WRONG_CREDENTIALS: &str = "Password atau Nip yang Anda masukkan salah!";

#[derive(Debug, Default)]
pub struct LoginScreen {
    /// Email or NIP.
    pub username: String,
    pub password: String,
    is_loading: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Logs in and stores the session. On success the form is cleared.
    pub async fn submit(&mut self, ctx: &AppContext) -> Result<Session, Notice> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(Notice::error(ValidationError::MissingCredentials.to_string()));
        }

        self.is_loading = true;
        let result = self.try_login(ctx).await;
        self.is_loading = false;

        let session = result?;
        self.username.clear();
        self.password.clear();
        Ok(session)
    }

    async fn try_login(&self, ctx: &AppContext) -> Result<Session, Notice> {
        let response = api::auth::login(&ctx.client, &self.username, &self.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login rejected");
                Notice::error(login_error_message(&e))
            })?;

        ctx.session
            .establish(&response.token, response.user.get())
            .map_err(|e| {
                error!(error = %e, "Failed to store session");
                Notice::error(GENERIC_LOGIN_ERROR)
            })
    }
}

/// Server messages about the password collapse into one credential message.
pub fn login_error_message(err: &RequestError) -> String {
    match err.server_message().filter(|m| !m.is_empty()) {
        Some(message) if message.to_lowercase().contains("password") => {
            WRONG_CREDENTIALS.to_string()
        }
        Some(message) => message.to_string(),
        None => match err {
            RequestError::Status { .. } | RequestError::Transport(_) => err.to_string(),
            RequestError::Decode(_) | RequestError::Storage(_) => GENERIC_LOGIN_ERROR.to_string(),
        },
    }
}
