use crate::image_file::interface::ImageFile;
use crate::prediction_client::error::PredictError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionScore {
    pub label: String,
    pub score: f64,
}

/// Server response. `actions` arrives sorted by descending score and is kept
/// in the order received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub actions: Vec<ActionScore>,
    pub caption: String,
}

pub trait PredictionClient {
    /// Blocks until the backend answers or the request fails.
    fn predict(&self, file: &ImageFile) -> Result<PredictionResult, PredictError>;
}
