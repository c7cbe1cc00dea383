use actix_web::{HttpResponse, Responder};

use crate::models::WelcomeResponse;

/// Static welcome payload for the root route
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(WelcomeResponse {
        message: "Welcome to the Flood Prediction API!".to_string(),
    })
}
