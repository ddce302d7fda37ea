//! Weather endpoint handlers.

use crate::{
    error::ApiError,
    models::{CityQuery, ErrorResponse, HistoryResponse, RecommendationResponse, WeatherResponse},
    services::weather::{WeatherGenerator, recommend},
};
use actix_web::{Error, Result, web};
use chrono::{SecondsFormat, Utc};
use paperclip::actix::api_v2_operation;

/// Pull a non-empty `city` out of the query string
fn require_city(query: CityQuery) -> Result<String, ApiError> {
    query
        .city
        .filter(|city| !city.is_empty())
        .ok_or(ApiError::MissingParameter)
}

/// Current weather endpoint
///
/// Returns a random sample for the requested city. The city name is echoed
/// and has no influence on the result.
#[api_v2_operation(
    summary = "Current Weather",
    description = "Returns mock current weather for a city. Requires ?city=<name>.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = WeatherResponse),
        (status = 400, description = "Missing city parameter", body = ErrorResponse)
    )
)]
pub async fn current_weather(
    generator: web::Data<WeatherGenerator>,
    query: web::Query<CityQuery>,
) -> Result<web::Json<WeatherResponse>, Error> {
    let city = require_city(query.into_inner())?;
    let sample = generator.sample();

    tracing::debug!(city = %city, condition = sample.condition.as_str(), "Generated current weather");

    Ok(web::Json(WeatherResponse {
        city,
        temperature: sample.temperature,
        condition: sample.condition,
        updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    }))
}

/// Weather history endpoint
///
/// Requires a bearer token. Returns the last seven days, oldest first.
#[api_v2_operation(
    summary = "Weather History",
    description = "Returns mock weather for the last seven days (today included), oldest first. Requires a bearer token.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = HistoryResponse),
        (status = 400, description = "Missing city parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    )
)]
pub async fn history(
    generator: web::Data<WeatherGenerator>,
    query: web::Query<CityQuery>,
) -> Result<web::Json<HistoryResponse>, Error> {
    let city = require_city(query.into_inner())?;
    let history = generator.history(Utc::now().date_naive());

    Ok(web::Json(HistoryResponse { city, history }))
}

/// Best-day recommendation endpoint
///
/// Requires a bearer token. Generates a seven day forecast and picks a sunny
/// day if there is one, otherwise the day closest to 22°C.
#[api_v2_operation(
    summary = "Weather Recommendation",
    description = "Recommends the best of the next seven days: sunny first, then closest to 22°C. Requires a bearer token.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = RecommendationResponse),
        (status = 400, description = "Missing city parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    )
)]
pub async fn recommendation(
    generator: web::Data<WeatherGenerator>,
    query: web::Query<CityQuery>,
) -> Result<web::Json<RecommendationResponse>, Error> {
    let city = require_city(query.into_inner())?;
    let forecast = generator.forecast(Utc::now().date_naive());

    let best = recommend(&forecast)
        .cloned()
        .ok_or_else(|| ApiError::Internal("forecast generated no days".to_string()))?;

    Ok(web::Json(RecommendationResponse {
        city,
        recommendation: best,
    }))
}
