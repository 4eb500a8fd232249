pub mod attendance;
pub mod auth;
pub mod employee;
pub mod schedule;
