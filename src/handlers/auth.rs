//! Login endpoint handler.

use crate::{
    models::{
        audit::{AuthAuditEvent, AuthEventType},
        auth::{LoginRequest, LoginResponse},
        ErrorResponse,
    },
    services::TokenIssuer,
    utils::http::{extract_client_ip, extract_request_id, extract_user_agent},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// User login endpoint
///
/// Exchanges the configured username/password for a signed bearer token
/// valid for two hours.
#[api_v2_operation(
    summary = "User Login",
    description = "Authenticate with the demo credentials and receive a bearer token",
    tags("Authentication"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    req: HttpRequest,
    issuer: web::Data<TokenIssuer>,
    payload: web::Json<LoginRequest>,
) -> Result<web::Json<LoginResponse>, Error> {
    let result = issuer.login(&payload.username, &payload.password);

    let event_type = if result.is_ok() {
        AuthEventType::LoginSuccess
    } else {
        AuthEventType::LoginFailure
    };

    AuthAuditEvent::new(
        event_type,
        extract_client_ip(&req),
        req.method().to_string(),
        req.uri().path().to_string(),
    )
    .with_username(Some(payload.username.clone()))
    .with_user_agent(extract_user_agent(&req))
    .with_request_id(extract_request_id(&req))
    .log();

    let token = result?;
    Ok(web::Json(LoginResponse { token }))
}
