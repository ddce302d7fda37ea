//! Data models and schemas for the weather API.
//!
//! Request/response bodies, token claims and audit event types.

pub mod api;
pub mod audit;
pub mod auth;

pub use api::*;
pub use audit::*;
pub use auth::*;
