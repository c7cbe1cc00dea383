use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::WeatherQuery;
use crate::AppState;

/// Proxy one river discharge forecast query
pub async fn query_weather(
    state: web::Data<Arc<AppState>>,
    query: web::Query<WeatherQuery>,
) -> Result<HttpResponse, AppError> {
    let forecast = state
        .weather
        .fetch_forecast(query.latitude, query.longitude)
        .await
        .map_err(|e| AppError::Weather(e.to_string()))?;

    Ok(HttpResponse::Ok().json(forecast.into_report()))
}
