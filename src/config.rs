use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Http,
    Fake,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    pub image_field_name: String,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
    pub backend: Backend,
    pub logger_timezone: chrono::FixedOffset,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: "http://localhost:5000/predict".to_string(),
            image_field_name: "image".to_string(),
            request_timeout: None,
            backend: Backend::Http,
            logger_timezone: utc(),
            window_title: "Action Recognition & Captioning".to_string(),
            window_size: [1100.0, 720.0],
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
