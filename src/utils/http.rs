//! Helpers for reading request headers.

use crate::middleware::RequestId;
use actix_web::{
    HttpMessage, HttpRequest,
    http::header::{AUTHORIZATION, HeaderMap, USER_AGENT},
};

const BEARER_PREFIX: &str = "Bearer ";

/// Client IP, preferring proxy headers over the peer address
pub fn extract_client_ip(req: &HttpRequest) -> String {
    for header_name in ["X-Forwarded-For", "X-Real-IP"] {
        if let Some(value) = req.headers().get(header_name).and_then(|h| h.to_str().ok()) {
            // X-Forwarded-For may list several hops; the first is the client
            let ip = value.split(',').next().unwrap_or(value).trim();
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}

/// Request ID stored in the request extensions by `RequestIdMiddleware`
pub fn extract_request_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// Returns `None` when the header is absent, uses another scheme, or carries
/// an empty token. Anything after the first space following the token is
/// ignored.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .and_then(|rest| rest.split(' ').next())
        .filter(|token| !token.is_empty())
}
