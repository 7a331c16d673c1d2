use crate::config::{Backend, Config};
use crate::library::logger::interface::Logger;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::impl_fake::PredictionClientFake;
use crate::prediction_client::impl_http::PredictionClientHttp;
use crate::prediction_client::interface::PredictionClient;
use std::sync::Arc;

pub fn new_prediction_client(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn PredictionClient + Send + Sync>, PredictError> {
    match config.backend {
        Backend::Http => Ok(Arc::new(PredictionClientHttp::new(config, logger)?)),
        Backend::Fake => Ok(Arc::new(PredictionClientFake::new(logger))),
    }
}
