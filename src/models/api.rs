//! API response models for the weather endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// The fixed set of mock weather conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Apiv2Schema)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Hot,
    Rainy,
    Windy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Hot => "Hot",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Windy => "Windy",
        }
    }
}

/// Query parameters shared by every city-scoped endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct CityQuery {
    /// City name, echoed back verbatim (e.g. "Paris")
    pub city: Option<String>,
}

/// Response model for `/weather`
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherResponse {
    pub city: String,
    /// Temperature in degrees Celsius
    pub temperature: i32,
    pub condition: WeatherCondition,
    /// RFC 3339 UTC timestamp of generation
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// A weather sample pinned to a calendar day
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct DailyWeather {
    /// Day formatted as `YYYY-MM-DD`
    pub date: String,
    pub temperature: i32,
    pub condition: WeatherCondition,
}

/// Response model for `/history`
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoryResponse {
    pub city: String,
    /// Seven days, oldest first, ending today
    pub history: Vec<DailyWeather>,
}

/// Response model for `/recommendation`
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct RecommendationResponse {
    pub city: String,
    pub recommendation: DailyWeather,
}

/// Response model for `/cities`
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// Body of every error response
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}
