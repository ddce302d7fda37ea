//! City list endpoint handler.

use crate::{models::CitiesResponse, services::weather::CITIES};
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Cities offered to clients as suggestions
#[api_v2_operation(
    summary = "City List",
    description = "Returns the fixed list of suggested cities.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = CitiesResponse)
    )
)]
pub async fn cities() -> Result<web::Json<CitiesResponse>, Error> {
    Ok(web::Json(CitiesResponse {
        cities: CITIES.iter().map(|c| c.to_string()).collect(),
    }))
}
