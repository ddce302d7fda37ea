//! Cross-cutting behavior of the assembled application.

use actix_web::{http::StatusCode, test};
use mock_weather_api::{AppConfig, WeatherGenerator, create_app};

#[actix_web::test]
async fn test_health_endpoint_integration() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Expected 200 OK status");

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn test_cors_preflight() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/history?city=Paris")
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Access-Control-Request-Method", "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(headers.get("access-control-allow-credentials").unwrap(), "true");
    let allowed = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("authorization"), "allowed headers: {allowed}");
}

#[actix_web::test]
async fn test_cors_headers_on_error_response() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::get()
        .uri("/recommendation?city=Paris")
        .insert_header(("Origin", "http://example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://example.com"
    );
}

#[actix_web::test]
async fn test_cors_headers_on_success_response() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::get()
        .uri("/weather?city=Paris")
        .insert_header(("Origin", "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        resp.headers().get("access-control-allow-credentials").unwrap(),
        "true"
    );
}

#[actix_web::test]
async fn test_rejected_request_keeps_request_id_and_json_body() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::get()
        .uri("/history?city=Paris")
        .insert_header(("Origin", "http://localhost:3000"))
        .insert_header(("Authorization", "Bearer not.a.token"))
        .insert_header(("X-Request-ID", "gate-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "gate-1");
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({ "error": "Token is invalid!" }));
}

#[actix_web::test]
async fn test_request_id_echoed_or_generated() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::get()
        .uri("/weather?city=Paris")
        .insert_header(("X-Request-ID", "req-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-123");

    let req = test::TestRequest::get().uri("/history").to_request();
    let resp = test::call_service(&app, req).await;
    let generated = resp.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[actix_web::test]
async fn test_openapi_spec_lists_routes() {
    let app = test::init_service(create_app(AppConfig::default(), WeatherGenerator::default())).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["info"]["title"], "Mock Weather API");
    let paths = json["paths"].as_object().expect("spec should have paths");
    for route in ["/login", "/weather", "/cities", "/health"] {
        assert!(paths.contains_key(route), "missing {route} in spec");
    }
}
