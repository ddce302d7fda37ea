//! OpenAPI specification generation and app factory.

use crate::{
    config::AppConfig,
    error::ApiError,
    handlers::{cities, current_weather, health, history, login, recommendation},
    middleware::{AuthGate, RequestIdMiddleware, cors_policy},
    services::{TokenIssuer, TokenVerifier, WeatherGenerator},
};
use actix_web::{
    App,
    body::MessageBody,
    web::{JsonConfig, QueryConfig},
};
use paperclip::actix::{web, OpenApiExt};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Mock Weather API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Demo service returning randomly generated weather data.\n\n\
                ## Authentication\n\
                `POST /login` with the demo credentials returns a bearer token valid for two hours.\n\
                `/history` and `/recommendation` require the header `Authorization: Bearer <token>`.\n\
                \n\
                **Errors** are returned as `{\"error\": \"<message>\"}`:\n\
                - `400` `City is required` when the `city` query parameter is missing\n\
                - `401` `Invalid credentials`, `Token is missing!` or `Token is invalid!`\n\
                \n\
                **Configuration:**\n\
                - `JWT_SECRET`, `AUTH_USERNAME`, `AUTH_PASSWORD`, `TOKEN_TTL_SECONDS`\n\
                - `HOST`, `PORT`\n\
                - `CORS_ALLOW_CREDENTIALS`, `CORS_MAX_AGE`"
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with the given configuration and weather source
///
/// Wires up:
/// - CORS and request ID middleware around every route
/// - `/login`, `/weather`, `/cities`, `/health`
/// - `/history` and `/recommendation` behind the auth gate
/// - JSON error bodies for malformed JSON and query strings
/// - The OpenAPI document at `/api/spec/v2`
pub fn create_app(
    config: AppConfig,
    generator: WeatherGenerator,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let issuer = TokenIssuer::new(&config.auth);
    let verifier = TokenVerifier::new(&config.auth);

    let json_config = JsonConfig::default()
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into());
    let query_config = QueryConfig::default()
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into());

    App::new()
        .wrap(cors_policy(&config.cors))
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(json_config)
        .app_data(query_config)
        .app_data(web::Data::new(issuer))
        .app_data(web::Data::new(generator))
        .service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/weather").route(web::get().to(current_weather)))
        .service(web::resource("/cities").route(web::get().to(cities)))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(
            web::resource("/history")
                .wrap(AuthGate::new(verifier.clone()))
                .route(web::get().to(history)),
        )
        .service(
            web::resource("/recommendation")
                .wrap(AuthGate::new(verifier))
                .route(web::get().to(recommendation)),
        )
        .with_json_spec_at("/api/spec/v2")
        .build()
}

/// Creates the application from environment configuration with random weather
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    create_app(AppConfig::from_env(), WeatherGenerator::default())
}
