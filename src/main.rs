use actix_web::HttpServer;
use mock_weather_api::{
    AppConfig, WeatherGenerator, create_app,
    telemetry::{LogFormat, init_tracing},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Run with RUST_LOG=debug for per-request weather and token details
    if let Err(e) = init_tracing(LogFormat::from_env()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = AppConfig::from_env();
    let (host, port) = config.server.bind_addr();

    tracing::info!(host = %host, port, "Weather backend running on http://{host}:{port}");

    HttpServer::new(move || create_app(config.clone(), WeatherGenerator::default()))
        .bind((host.as_str(), port))?
        .run()
        .await
}
