//! User App client
//!
//! A typed client for the users REST backend, the view-state controller that
//! keeps the users screen in sync with it, and the presentation contract the
//! terminal front end renders.

pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod state;
pub mod terminal;
pub mod view;

pub use client::{UserApi, UserClient};
pub use config::Config;
pub use controller::Controller;
pub use errors::ApiError;
pub use models::{DraftField, User, UserDraft};
pub use state::{Mode, ViewState};
pub use view::{render, Intent, Screen};
