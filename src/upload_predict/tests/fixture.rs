use crate::image_file::impl_fake::FilePickerFake;
use crate::image_file::interface::{FilePicker, ImageFile};
use crate::library::logger::impl_fake::LoggerFake;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::{ActionScore, PredictionClient, PredictionResult};
use crate::preview::impl_fake::PreviewRegistryFake;
use crate::upload_predict::main::UploadPredict;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const WAIT: Duration = Duration::from_secs(5);

pub enum Step {
    Respond(Result<PredictionResult, PredictError>),
    Panic,
}

/// Answers each call with the next scripted step. When gated, every call
/// blocks until the test sends on the gate.
pub struct PredictionClientScripted {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    gate: Option<Mutex<Receiver<()>>>,
}

impl PredictionClientScripted {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(steps: Vec<Step>) -> (Self, Sender<()>) {
        let (gate_sender, gate_receiver) = channel();
        let client = Self {
            gate: Some(Mutex::new(gate_receiver)),
            ..Self::new(steps)
        };
        (client, gate_sender)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PredictionClient for PredictionClientScripted {
    fn predict(&self, _file: &ImageFile) -> Result<PredictionResult, PredictError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv_timeout(WAIT);
        }

        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Respond(outcome)) => outcome,
            Some(Step::Panic) => panic!("scripted prediction client panic"),
            None => Err(PredictError::Transport("no scripted response".to_string())),
        }
    }
}

pub fn running_result() -> PredictionResult {
    PredictionResult {
        actions: vec![
            ActionScore {
                label: "running".to_string(),
                score: 0.87,
            },
            ActionScore {
                label: "walking".to_string(),
                score: 0.10,
            },
        ],
        caption: "A person is running.".to_string(),
    }
}

pub struct Fixture {
    pub logger: LoggerFake,
    pub prediction_client: Arc<PredictionClientScripted>,
    pub preview_registry: Arc<PreviewRegistryFake>,
    pub repaints: Arc<AtomicUsize>,
    pub upload_predict: UploadPredict,
}

impl Fixture {
    pub fn new(steps: Vec<Step>) -> Self {
        Self::with_parts(PredictionClientScripted::new(steps), FilePickerFake::new(vec![]))
    }

    pub fn gated(steps: Vec<Step>) -> (Self, Sender<()>) {
        let (client, gate) = PredictionClientScripted::gated(steps);
        (Self::with_parts(client, FilePickerFake::new(vec![])), gate)
    }

    pub fn with_picker(picks: Vec<Result<ImageFile, String>>) -> Self {
        Self::with_parts(PredictionClientScripted::new(vec![]), FilePickerFake::new(picks))
    }

    fn with_parts(client: PredictionClientScripted, file_picker: impl FilePicker + Send + Sync + 'static) -> Self {
        let logger = LoggerFake::new();
        let prediction_client = Arc::new(client);
        let preview_registry = Arc::new(PreviewRegistryFake::new());
        let repaints = Arc::new(AtomicUsize::new(0));
        let repaints_clone = repaints.clone();

        let upload_predict = UploadPredict::new(
            Arc::new(logger.clone()),
            prediction_client.clone(),
            preview_registry.clone(),
            Arc::new(file_picker),
            Arc::new(move || {
                repaints_clone.fetch_add(1, Ordering::SeqCst);
            }),
        );

        Self {
            logger,
            prediction_client,
            preview_registry,
            repaints,
            upload_predict,
        }
    }
}
