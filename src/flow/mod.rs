pub mod activity;
pub mod attendance;
pub mod catalog;
pub mod lookup;
pub mod session;
pub mod users;
