//! Custom middleware implementations for the API.
//!
//! Request IDs and CORS wrap the whole app; the auth gate wraps individual
//! protected resources.

pub mod auth;
pub mod cors;
pub mod request_id;

pub use auth::*;
pub use cors::*;
pub use request_id::*;
