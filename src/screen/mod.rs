//! Headless view models, one per app screen.

pub mod account;
pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod login;
pub mod notification;
pub mod profile;
pub mod state;

pub use state::{LoadState, Notice, NoticeKind};
