pub mod attendance;
pub mod de;
pub mod employee;
pub mod notification;
pub mod role;
pub mod schedule;
pub mod user;
