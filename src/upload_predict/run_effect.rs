use super::main::{Notify, UploadPredict};
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::PredictionResult;
use crate::upload_predict::core::{Effect, Event, RequestId};
use std::sync::mpsc::Sender;

impl UploadPredict {
    pub(super) fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ReleasePreview(handle) => {
                let id = handle.id();
                if let Err(e) = self.preview_registry.release(handle) {
                    let _ = self
                        .logger
                        .error(&format!("Failed to release preview {}: {}", id, e));
                }
            }
            Effect::Predict { request, file } => {
                let _ = self
                    .logger
                    .info(&format!("Running effect: Predict {:?} {:?}", request, file));

                let prediction_client = self.prediction_client.clone();
                let completion = Completion {
                    request,
                    event_sender: self.event_sender.clone(),
                    notify: self.notify.clone(),
                    sent: false,
                };

                std::thread::spawn(move || {
                    let outcome = prediction_client.predict(&file);
                    completion.finish(outcome);
                });
            }
            Effect::LogInfo(message) => {
                let _ = self.logger.info(&message);
            }
            Effect::LogError(message) => {
                let _ = self.logger.error(&message);
            }
        }
    }
}

/// Delivers exactly one `PredictDone` for a request. If the worker unwinds
/// before finishing, the drop reports a transport failure so the busy flag
/// is still cleared.
struct Completion {
    request: RequestId,
    event_sender: Sender<Event>,
    notify: Notify,
    sent: bool,
}

impl Completion {
    fn finish(mut self, outcome: Result<PredictionResult, PredictError>) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: Result<PredictionResult, PredictError>) {
        self.sent = true;
        let _ = self.event_sender.send(Event::PredictDone {
            request: self.request,
            outcome,
        });
        (self.notify)();
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if !self.sent {
            self.send(Err(PredictError::Transport(String::new())));
        }
    }
}
