use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::RequestError;
use crate::session::SessionContext;
use crate::storage::{FileStore, SessionStore};

/// Everything a screen needs: the API client and the login session.
/// Both share one session store.
pub struct AppContext {
    pub config: Config,
    pub client: ApiClient,
    pub session: SessionContext,
}

impl AppContext {
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> Result<Self, RequestError> {
        let client = ApiClient::new(&config, store.clone())?;
        Ok(Self {
            config,
            client,
            session: SessionContext::new(store),
        })
    }

    /// Context backed by the session file named in `config`.
    pub fn from_config(config: Config) -> Result<Self, RequestError> {
        let store = Arc::new(FileStore::new(config.session_file.clone()));
        Self::new(config, store)
    }
}
