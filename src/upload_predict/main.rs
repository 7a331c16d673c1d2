use crate::image_file::interface::{FilePicker, ImageFile};
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::preview::interface::PreviewRegistry;
use crate::upload_predict::core::{init, transition, Effect, Event, Model};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Owns the model on the UI thread. User actions and worker completions both
/// go through `dispatch`, which applies `transition` and runs its effects.
pub struct UploadPredict {
    pub(super) model: Model,
    pub(super) logger: Arc<dyn Logger + Send + Sync>,
    pub(super) prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    pub(super) preview_registry: Arc<dyn PreviewRegistry + Send + Sync>,
    pub(super) file_picker: Arc<dyn FilePicker + Send + Sync>,
    pub(super) event_sender: Sender<Event>,
    pub(super) event_receiver: Receiver<Event>,
    pub(super) notify: Notify,
}

impl UploadPredict {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
        preview_registry: Arc<dyn PreviewRegistry + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        notify: Notify,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let (model, effects) = init();

        let mut upload_predict = Self {
            model,
            logger: logger.with_namespace("upload_predict"),
            prediction_client,
            preview_registry,
            file_picker,
            event_sender,
            event_receiver,
            notify,
        };
        upload_predict.run_effects(effects);
        upload_predict
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Opens the file picker and selects whatever the user chose.
    pub fn pick_file(&mut self) {
        match self.file_picker.pick() {
            Ok(Some(file)) => self.choose_file(file),
            Ok(None) => {}
            Err(e) => self.dispatch(Event::FilePickFailed(e.to_string())),
        }
    }

    pub fn choose_file(&mut self, file: ImageFile) {
        match self.preview_registry.acquire(&file) {
            Ok(preview) => self.dispatch(Event::FileChosen { file, preview }),
            Err(e) => self.dispatch(Event::FilePickFailed(format!(
                "Could not create a preview for {}: {}",
                file.name, e
            ))),
        }
    }

    pub fn clear(&mut self) {
        self.dispatch(Event::Cleared);
    }

    pub fn submit(&mut self) {
        self.dispatch(Event::Submitted);
    }

    pub fn dismiss_alert(&mut self) {
        self.dispatch(Event::AlertDismissed);
    }

    /// Applies every event the workers have sent so far without blocking.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    #[cfg(test)]
    pub fn pump_blocking(&mut self, timeout: std::time::Duration) -> bool {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                self.pump();
                true
            }
            Err(_) => false,
        }
    }

    fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!(
            "\nold model:\n\t{:?}\n\nevent:\n\t{:?}",
            self.model, event,
        ));

        let old_phase = self.model.phase();
        let (new_model, effects) = transition(std::mem::take(&mut self.model), event);

        let _ = self.logger.info(&format!(
            "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}\n\nphase:\n\t{:?} -> {:?}",
            new_model,
            effects,
            old_phase,
            new_model.phase()
        ));

        self.model = new_model;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }
}

impl Drop for UploadPredict {
    fn drop(&mut self) {
        if let Some(selection) = self.model.selection.take() {
            if let Err(e) = self.preview_registry.release(selection.preview) {
                let _ = self
                    .logger
                    .error(&format!("Failed to release preview on shutdown: {}", e));
            }
        }
    }
}
