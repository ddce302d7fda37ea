//! HTTP request handlers for API endpoints.

pub mod auth;
pub mod cities;
pub mod health;
pub mod openapi;
pub mod weather;

pub use auth::*;
pub use cities::*;
pub use health::*;
pub use openapi::*;
pub use weather::*;
