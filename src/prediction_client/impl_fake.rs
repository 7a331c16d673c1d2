use crate::image_file::interface::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::{ActionScore, PredictionClient, PredictionResult};
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;

const ACTIONS: &[&str] = &[
    "running",
    "walking",
    "jumping",
    "sitting",
    "climbing",
    "riding a bike",
    "swimming",
    "reading",
    "cooking",
    "dancing",
];

const TOP_K: usize = 5;

/// Offline stand-in for the prediction service.
pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    latency: Duration,
}

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
            latency: Duration::from_millis(800),
        }
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(&self, file: &ImageFile) -> Result<PredictionResult, PredictError> {
        let _ = self
            .logger
            .info(&format!("Predicting {} with fake backend...", file.name));
        std::thread::sleep(self.latency);

        let mut rng = rand::rng();

        let mut labels: Vec<&str> = ACTIONS.to_vec();
        labels.shuffle(&mut rng);
        labels.truncate(TOP_K);

        let weight_dist =
            Uniform::new(0.05_f64, 1.0_f64).map_err(|e| PredictError::Transport(e.to_string()))?;
        let weights: Vec<f64> = labels.iter().map(|_| weight_dist.sample(&mut rng)).collect();
        let total: f64 = weights.iter().sum();

        let mut actions: Vec<ActionScore> = labels
            .iter()
            .zip(weights)
            .map(|(label, weight)| ActionScore {
                label: label.to_string(),
                score: weight / total,
            })
            .collect();
        actions.sort_by(|a, b| b.score.total_cmp(&a.score));

        let caption = match actions.first() {
            Some(top) => format!("A person is {}.", top.label),
            None => String::new(),
        };

        Ok(PredictionResult { actions, caption })
    }
}
