//! Authentication-related data models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Request model for user login
///
/// Absent fields deserialize as empty strings and are rejected as
/// invalid credentials.
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response model for a successful login
#[derive(Serialize, Deserialize, Apiv2Schema)]
pub struct LoginResponse {
    pub token: String,
}

/// Claims carried by a token
///
/// Only `exp` is required to accept a token; `username` is informational.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Expiry as seconds since the Unix epoch
    pub exp: i64,
}
