use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::debug;

use crate::error::AppError;
use crate::models::{PredictionRequest, PredictionResponse};
use crate::AppState;

/// Run the model over one validated input record
pub async fn predict_flood(
    state: web::Data<Arc<AppState>>,
    req: web::Json<PredictionRequest>,
) -> Result<HttpResponse, AppError> {
    let predictor_mutex = state
        .predictor
        .as_ref()
        .ok_or_else(|| AppError::Prediction("model artifact is not loaded".to_string()))?;

    let prediction = {
        let mut predictor = predictor_mutex
            .lock()
            .map_err(|e| AppError::Prediction(e.to_string()))?;
        predictor
            .predict(&req)
            .map_err(|e| AppError::Prediction(e.to_string()))?
    };

    debug!("Predicted flood probability {:.4}", prediction);

    Ok(HttpResponse::Ok().json(PredictionResponse {
        predicted_flood_probability: prediction,
    }))
}
