//! Bearer token gate for protected resources.

use crate::{
    error::ApiError,
    models::audit::{AuthAuditEvent, AuthEventType},
    services::TokenVerifier,
    utils::http::{extract_bearer_token, extract_client_ip, extract_request_id, extract_user_agent},
};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    rc::Rc,
};

/// Auth gate middleware factory
///
/// Requests without a bearer token are answered with `MissingToken`; tokens
/// with a bad signature or past expiry with `InvalidToken`. Rejections are
/// returned as ordinary responses so outer middleware (CORS, request IDs)
/// still decorates them. Decoded claims are not forwarded to the wrapped
/// handler.
#[derive(Clone)]
pub struct AuthGate {
    verifier: Rc<TokenVerifier>,
}

impl AuthGate {
    pub fn new(verifier: TokenVerifier) -> Self {
        Self {
            verifier: Rc::new(verifier),
        }
    }

    /// Check the request headers, writing an audit event for the outcome
    fn check(&self, req: &ServiceRequest) -> Result<(), ApiError> {
        let outcome = match extract_bearer_token(req.headers()) {
            None => Err(ApiError::MissingToken),
            Some(token) => self.verifier.verify(token).map(|claims| claims.username),
        };

        let http_req = req.request();
        let event_type = match &outcome {
            Ok(_) => AuthEventType::TokenAccepted,
            Err(ApiError::MissingToken) => AuthEventType::TokenMissing,
            Err(_) => AuthEventType::TokenRejected,
        };

        AuthAuditEvent::new(
            event_type,
            extract_client_ip(http_req),
            req.method().to_string(),
            req.path().to_string(),
        )
        .with_username(outcome.as_ref().ok().cloned().flatten())
        .with_user_agent(extract_user_agent(http_req))
        .with_request_id(extract_request_id(http_req))
        .with_reason(outcome.as_ref().err().map(|e| e.to_string()))
        .log();

        outcome.map(|_| ())
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service,
            gate: self.clone(),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
    gate: AuthGate,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(err) = self.gate.check(&req) {
            let res = req.error_response(err).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
