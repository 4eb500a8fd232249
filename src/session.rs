//! Application-wide login session.
//!
//! Screens get the logged-in user from one [`SessionContext`] instead of
//! reading the device store themselves. The context writes through to the
//! store so a restart can [`restore`](SessionContext::restore) the session.

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::SessionError;
use crate::model::user::{UserLoginData, employee_id_of};
use crate::storage::{SessionStore, TOKEN_KEY, USER_KEY};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
    user_json: String,
    user: Value,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The user object exactly as it was stored.
    pub fn user_json(&self) -> &str {
        &self.user_json
    }

    pub fn user(&self) -> &Value {
        &self.user
    }

    /// Typed view of the user. Fields of the wrong type are left empty; a user
    /// that is not a JSON object gives an empty view.
    pub fn profile(&self) -> UserLoginData {
        serde_json::from_value(self.user.clone()).unwrap_or_else(|e| {
            warn!(error = %e, "Stored user does not match the login shape");
            UserLoginData::default()
        })
    }

    pub fn employee_id(&self) -> Option<u64> {
        employee_id_of(&self.user)
    }
}

pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Persists a fresh login: the token, then the user JSON text verbatim.
    pub fn establish(&self, token: &str, user_json: &str) -> Result<Session, SessionError> {
        let user: Value = serde_json::from_str(user_json).map_err(SessionError::Corrupt)?;
        self.store.set_item(TOKEN_KEY, token)?;
        self.store.set_item(USER_KEY, user_json)?;

        let session = Session {
            token: token.to_string(),
            user_json: user_json.to_string(),
            user,
        };
        info!(employee_id = ?session.employee_id(), "Session established");
        self.set(Some(session.clone()));
        Ok(session)
    }

    /// Loads the session left in the store by an earlier run.
    ///
    /// Returns `Ok(None)` when either key is missing.
    pub fn restore(&self) -> Result<Option<Session>, SessionError> {
        let token = self.store.get_item(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let user_json = self.store.get_item(USER_KEY)?;

        let (Some(token), Some(user_json)) = (token, user_json) else {
            self.set(None);
            return Ok(None);
        };

        let user: Value = serde_json::from_str(&user_json).map_err(|e| {
            warn!(error = %e, "Stored user data is corrupt");
            SessionError::Corrupt(e)
        })?;
        let session = Session {
            token,
            user_json,
            user,
        };
        self.set(Some(session.clone()));
        Ok(Some(session))
    }

    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    /// Merges `patch` into the stored user's `pegawai` object and rewrites
    /// the stored user.
    pub fn update_user(&self, patch: &Map<String, Value>) -> Result<Session, SessionError> {
        let mut session = self.current().ok_or(SessionError::NotLoggedIn)?;

        if let Value::Object(user) = &mut session.user {
            let pegawai = user
                .entry("pegawai")
                .or_insert_with(|| Value::Object(Map::new()));
            if !pegawai.is_object() {
                *pegawai = Value::Object(Map::new());
            }
            if let Value::Object(pegawai) = pegawai {
                for (key, value) in patch {
                    pegawai.insert(key.clone(), value.clone());
                }
            }
        }

        session.user_json = session.user.to_string();
        self.store.set_item(USER_KEY, &session.user_json)?;
        self.set(Some(session.clone()));
        Ok(session)
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.remove_item(TOKEN_KEY)?;
        self.store.remove_item(USER_KEY)?;
        self.set(None);
        info!("Session cleared");
        Ok(())
    }

    fn set(&self, session: Option<Session>) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn context() -> (Arc<MemoryStore>, SessionContext) {
        let store = Arc::new(MemoryStore::new());
        let ctx = SessionContext::new(store.clone());
        (store, ctx)
    }

    #[test]
    fn establish_stores_token_and_user_verbatim() {
        let (store, ctx) = context();
        let raw = r#"{"id":5,  "nama":"Rina","pegawai":{"id":40}}"#;
        let session = ctx.establish("abc", raw).unwrap();

        assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get_item(USER_KEY).unwrap().as_deref(), Some(raw));
        assert_eq!(session.employee_id(), Some(40));
        assert!(ctx.is_logged_in());
    }

    #[test]
    fn restore_reads_back_a_previous_login() {
        let (store, ctx) = context();
        ctx.establish("abc", r#"{"id":5}"#).unwrap();

        let fresh = SessionContext::new(store);
        assert!(!fresh.is_logged_in());
        let restored = fresh.restore().unwrap().unwrap();
        assert_eq!(restored.token(), "abc");
        assert_eq!(fresh.current(), Some(restored));
    }

    #[test]
    fn restore_without_user_blob_is_logged_out() {
        let (store, ctx) = context();
        store.set_item(TOKEN_KEY, "abc").unwrap();
        assert_eq!(ctx.restore().unwrap(), None);
    }

    #[test]
    fn restore_reports_corrupt_blob() {
        let (store, ctx) = context();
        store.set_item(TOKEN_KEY, "abc").unwrap();
        store.set_item(USER_KEY, "{not json").unwrap();
        assert!(matches!(ctx.restore(), Err(SessionError::Corrupt(_))));
    }

    #[test]
    fn update_user_merges_into_pegawai() {
        let (store, ctx) = context();
        ctx.establish("abc", r#"{"id":5,"pegawai":{"id":40,"alamat":"Lama"}}"#)
            .unwrap();

        let patch = json!({"alamat": "Baru", "nip": "1987"});
        let session = ctx.update_user(patch.as_object().unwrap()).unwrap();

        assert_eq!(session.user()["pegawai"]["alamat"], "Baru");
        assert_eq!(session.user()["pegawai"]["id"], 40);
        let stored: Value =
            serde_json::from_str(&store.get_item(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored["pegawai"]["nip"], "1987");
    }

    #[test]
    fn update_user_requires_login() {
        let (_, ctx) = context();
        assert!(matches!(
            ctx.update_user(&Map::new()),
            Err(SessionError::NotLoggedIn)
        ));
    }

    #[test]
    fn logout_clears_store_and_cache() {
        let (store, ctx) = context();
        ctx.establish("abc", "{}").unwrap();
        ctx.logout().unwrap();
        assert_eq!(store.get_item(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get_item(USER_KEY).unwrap(), None);
        assert!(ctx.current().is_none());
    }

    #[test]
    fn profile_keeps_good_fields_next_to_a_bad_one() {
        let (_, ctx) = context();
        let session = ctx
            .establish(
                "abc",
                r#"{"nama":"Dr. Rina","pegawai":{"id":40,"jk":"L",
                "simpeg_jabatan_struktural":{"id_jabatan_struktural":1,"nama_jabatan_struktural":"Kajur"}}}"#,
            )
            .unwrap();

        let profile = session.profile();
        assert_eq!(profile.nama.as_deref(), Some("Dr. Rina"));
        let pegawai = profile.pegawai.unwrap();
        assert_eq!(pegawai.jk, None);
        assert_eq!(pegawai.jabatan(), Some("Kajur"));
        assert_eq!(session.employee_id(), Some(40));
    }
}
