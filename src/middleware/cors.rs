//! CORS policy for the whole app.

use crate::config::CorsConfig;
use actix_cors::Cors;
use actix_web::http::header;

/// Build the permissive CORS policy.
///
/// Any origin is allowed. With credentials enabled the caller's `Origin` is
/// echoed back, since browsers refuse `*` on credentialed requests.
pub fn cors_policy(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_origin_fn(|_origin, _req_head| true)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allowed_header("x-request-id")
        .expose_headers(vec!["x-request-id"])
        .max_age(config.max_age_seconds);

    if config.allow_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}
