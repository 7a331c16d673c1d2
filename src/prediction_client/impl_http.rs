use crate::config::Config;
use crate::image_file::interface::ImageFile;
use crate::library::logger::interface::Logger;
use crate::prediction_client::decode::decode_response;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::{PredictionClient, PredictionResult};
use reqwest::blocking::{multipart, Client};
use std::sync::Arc;

pub struct PredictionClientHttp {
    client: Client,
    predict_url: String,
    image_field_name: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PredictionClientHttp {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Result<Self, PredictError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            predict_url: config.predict_url.clone(),
            image_field_name: config.image_field_name.clone(),
            logger: logger.with_namespace("prediction_client").with_namespace("http"),
        })
    }
}

impl PredictionClient for PredictionClientHttp {
    fn predict(&self, file: &ImageFile) -> Result<PredictionResult, PredictError> {
        let part = multipart::Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = multipart::Form::new().part(self.image_field_name.clone(), part);

        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.predict_url,
            file.name,
            file.bytes.len()
        ));

        let response = self.client.post(&self.predict_url).multipart(form).send()?;
        let status = response.status().as_u16();

        let _ = self.logger.info(&format!("Response status {}", status));

        let body = response.text()?;
        decode_response(status, &body)
    }
}
