//! Configuration structures and loading utilities.
//!
//! Every structure has a `Default` matching the demo constants and a
//! `from_env` constructor that lets environment variables override them.

pub mod auth;
pub mod cors;
pub mod server;

pub use auth::*;
pub use cors::*;
pub use server::*;

/// All configuration needed to build the application
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load every configuration section from the environment
    pub fn from_env() -> Self {
        Self {
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}
