//! Floodcast - flood probability prediction service
//!
//! This library provides:
//! - Flood probability inference over a pre-trained ONNX artifact
//! - A proxy for the Open-Meteo flood forecast with JSON-safe output
//! - The actix-web handlers composing both into an HTTP service
//!
//! # Example
//!
//! ```
//! use floodcast::sanitize::{sanitize_series, SafeNumber};
//!
//! let cleaned = sanitize_series([Some(3.2), Some(f64::NAN), None]);
//! assert_eq!(cleaned[0], SafeNumber::Finite(3.2));
//! assert_eq!(cleaned[1], SafeNumber::Empty);
//! ```

pub mod error;
pub mod flood;
pub mod handlers;
pub mod models;
pub mod predictor;
pub mod sanitize;

use std::sync::Mutex;

// Re-export commonly used types
pub use error::AppError;
pub use flood::{FloodApiError, FloodClient, FloodClientConfig};
pub use models::{PredictionRequest, PredictionResponse, WeatherQuery, WeatherReport};
pub use predictor::{Predictor, PredictorError};
pub use sanitize::SafeNumber;

/// Application state shared across handlers
///
/// The predictor is loaded once at startup and held for the process
/// lifetime; `None` means the artifact could not be loaded and the
/// prediction route reports a server error.
pub struct AppState {
    pub predictor: Option<Mutex<Predictor>>,
    pub weather: FloodClient,
}
