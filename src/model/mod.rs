pub mod activity;
pub mod attendance;
pub mod category;
pub mod employee;
pub mod user;
