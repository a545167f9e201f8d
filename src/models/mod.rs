//! Data models for the User App client.
//!
//! These models match the backend's JSON contract exactly for seamless interoperability.

mod user;

pub use user::*;
