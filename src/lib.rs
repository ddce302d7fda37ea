//! Mock Weather API - a demo weather service behind a toy token login
//!
//! Built with Actix Web and Paperclip:
//! - `POST /login` exchanges the demo credentials for a signed bearer token
//! - `GET /weather` returns random current weather for a city
//! - `GET /history` and `GET /recommendation` require the bearer token
//! - `GET /cities` lists suggested cities
//!
//! All weather data is drawn from a fixed five-entry table on every request;
//! nothing is stored between requests.
//!
//! ## Architecture
//!
//! - `config/` - Configuration structures and environment loading
//! - `models/` - Request/response models, token claims and audit events
//! - `services/` - Token issuance/verification and weather generation
//! - `middleware/` - Auth gate, CORS and request ID middleware
//! - `handlers/` - HTTP request handlers and the app factory
//! - `utils/` - Header extraction helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use mock_weather_api::{AppConfig, WeatherGenerator, create_app};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::from_env();
//!     let addr = config.server.bind_addr();
//!     HttpServer::new(move || create_app(config.clone(), WeatherGenerator::default()))
//!         .bind(addr)?
//!         .run()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{AppConfig, AuthConfig, CorsConfig, Credential, ServerConfig};
pub use error::ApiError;
pub use handlers::{
    cities, create_app, create_base_app, create_openapi_spec, current_weather, health, history,
    login, recommendation,
};
pub use middleware::{AuthGate, RequestId, RequestIdMiddleware, cors_policy};
pub use models::{
    AuthAuditEvent, AuthEventOutcome, AuthEventType, CitiesResponse, CityQuery, DailyWeather,
    ErrorResponse, HealthResponse, HistoryResponse, LoginRequest, LoginResponse,
    RecommendationResponse, TokenClaims, WeatherCondition, WeatherResponse,
};
pub use services::{
    SampleSource, SequenceSource, ThreadRngSource, TokenIssuer, TokenVerifier, WeatherGenerator,
    WeatherSample, recommend,
};
pub use utils::{extract_bearer_token, extract_client_ip, extract_user_agent};
