use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::{PredictionRequest, NUM_FEATURES};

/// Tensor name the exported artifact binds its single input to
const INPUT_NAME: &str = "input";

/// Predictor errors
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("inference failed: {0}")]
    Inference(#[from] ort::Error),

    #[error("model returned no output values")]
    EmptyOutput,
}

/// ONNX-based flood probability predictor
///
/// Wraps the pre-trained artifact as a black box: a single-row tensor goes
/// in, one scalar comes out. The artifact is loaded once at process start
/// and kept for the process lifetime.
#[derive(Debug)]
pub struct Predictor {
    session: Session,
}

impl Predictor {
    /// Load the model artifact from disk
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self, PredictorError> {
        let model_path = model_path.as_ref();
        info!("Loading model artifact: {:?}", model_path);

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path)?;

        Ok(Self { session })
    }

    /// Predict the flood probability for one validated request.
    ///
    /// The input is reshaped to a `[1, 20]` row whose column order follows
    /// [`crate::models::FEATURE_NAMES`]; the first output value is the
    /// prediction.
    pub fn predict(&mut self, request: &PredictionRequest) -> Result<f64, PredictorError> {
        let input_vec: Vec<f32> = request.features().iter().map(|&x| x as f32).collect();
        let input_tensor = Tensor::from_array(([1usize, NUM_FEATURES], input_vec))?;

        let outputs = self.session.run(ort::inputs![INPUT_NAME => input_tensor])?;
        let (_, output_data) = outputs[0].try_extract_tensor::<f32>()?;

        let prediction = output_data.first().ok_or(PredictorError::EmptyOutput)?;
        Ok(f64::from(*prediction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_artifact_fails() {
        let result = Predictor::load("does/not/exist.onnx");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_error_message_carries_cause() {
        let err = Predictor::load("does/not/exist.onnx").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
