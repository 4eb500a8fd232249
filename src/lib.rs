//! Client for the SIMPADU attendance and employee-management backend.
//!
//! [`client::ApiClient`] issues the HTTP calls and attaches the stored bearer
//! token. [`session::SessionContext`] owns the login session. The view models
//! in [`screen`] hold per-screen state on top of both, reached through one
//! [`app::AppContext`].

pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod models;
pub mod screen;
pub mod session;
pub mod storage;
pub mod utils;

pub use app::AppContext;
pub use client::ApiClient;
pub use config::{Config, Environment};
pub use error::{ConfigError, RequestError, SessionError, StorageError, ValidationError};
pub use reqwest::{Method, StatusCode};
pub use session::{Session, SessionContext};
