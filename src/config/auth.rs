//! Token signing and credential configuration.

use jsonwebtoken::Algorithm;
use std::env;

const DEFAULT_SECRET: &str = "supersecretkey";
const DEFAULT_USERNAME: &str = "testuser";
const DEFAULT_PASSWORD: &str = "testpass";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 2 * 60 * 60;

/// The single username/password pair accepted by `/login`
#[derive(Clone, Debug)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Exact string comparison of both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Configuration shared by the token issuer and the auth gate
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub credential: Credential,
    pub token_ttl_seconds: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            credential: Credential {
                username: DEFAULT_USERNAME.to_string(),
                password: DEFAULT_PASSWORD.to_string(),
            },
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());

        let username =
            env::var("AUTH_USERNAME").unwrap_or_else(|_| DEFAULT_USERNAME.to_string());

        let password =
            env::var("AUTH_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|ttl: &i64| *ttl > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);

        Self {
            secret,
            algorithm: Algorithm::HS256,
            credential: Credential { username, password },
            token_ttl_seconds,
        }
    }
}
