//! Headless client engine for the attendance-capture application: typed
//! REST client, attendance form state and validation, debounced employee
//! lookup, daily-activity catalog, and the administrative flows (activity
//! input, user management, login). Rendering is left to whatever front end
//! drives this crate; notifications come out of a channel.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod model;
pub mod notify;

pub use client::ApiClient;
pub use config::Config;
pub use error::ApiError;
pub use notify::{Notification, NotificationLevel, Notifier};
