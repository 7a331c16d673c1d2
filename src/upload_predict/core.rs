use crate::image_file::interface::ImageFile;
use crate::prediction_client::error::PredictError;
use crate::prediction_client::interface::PredictionResult;
use crate::preview::interface::PreviewHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RequestId(pub u64);

/// The picked file and the preview derived from it. Kept together so that one
/// is never present without the other.
#[derive(Debug, PartialEq)]
pub struct Selection {
    pub file: ImageFile,
    pub preview: PreviewHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub request: RequestId,
    /// Set when the selection was cleared or replaced after submitting. The
    /// outcome of a superseded request is logged and dropped.
    pub superseded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

pub const FILE_ALERT_TITLE: &str = "Could not open file";
pub const PREDICT_ALERT_TITLE: &str = "Prediction failed";

#[derive(Debug, Default)]
pub struct Model {
    pub selection: Option<Selection>,
    pub result: Option<PredictionResult>,
    pub in_flight: Option<InFlight>,
    pub alert: Option<Alert>,
    pub last_request: RequestId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Selected,
    Submitting,
    Displayed,
}

impl Model {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_busy()
    }

    pub fn can_clear(&self) -> bool {
        self.selection.is_some()
    }

    pub fn phase(&self) -> Phase {
        match (&self.selection, &self.in_flight, &self.result) {
            (None, _, _) => Phase::Empty,
            (Some(_), Some(in_flight), _) if !in_flight.superseded => Phase::Submitting,
            (Some(_), _, Some(_)) => Phase::Displayed,
            (Some(_), _, None) => Phase::Selected,
        }
    }
}

#[derive(Debug)]
pub enum Event {
    FileChosen {
        file: ImageFile,
        preview: PreviewHandle,
    },
    FilePickFailed(String),
    Cleared,
    Submitted,
    PredictDone {
        request: RequestId,
        outcome: Result<PredictionResult, PredictError>,
    },
    AlertDismissed,
}

#[derive(Debug)]
pub enum Effect {
    ReleasePreview(PreviewHandle),
    Predict { request: RequestId, file: ImageFile },
    LogInfo(String),
    LogError(String),
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::FileChosen { file, preview } => {
            let mut effects = vec![];
            let mut model = supersede_in_flight(model, &mut effects);

            if let Some(previous) = model.selection.take() {
                effects.push(Effect::ReleasePreview(previous.preview));
            }
            model.selection = Some(Selection { file, preview });
            model.result = None;

            (model, effects)
        }

        Event::FilePickFailed(message) => (
            Model {
                alert: Some(Alert {
                    title: FILE_ALERT_TITLE,
                    message: message.clone(),
                }),
                ..model
            },
            vec![Effect::LogError(format!("Could not open file: {}", message))],
        ),

        Event::Cleared => {
            let mut effects = vec![];
            let mut model = supersede_in_flight(model, &mut effects);

            if let Some(previous) = model.selection.take() {
                effects.push(Effect::ReleasePreview(previous.preview));
            }
            model.result = None;

            (model, effects)
        }

        Event::Submitted => {
            if model.is_busy() {
                return (model, vec![]);
            }
            let file = match &model.selection {
                Some(selection) => selection.file.clone(),
                None => return (model, vec![]),
            };

            let request = RequestId(model.last_request.0 + 1);
            (
                Model {
                    result: None,
                    in_flight: Some(InFlight {
                        request,
                        superseded: false,
                    }),
                    last_request: request,
                    ..model
                },
                vec![Effect::Predict { request, file }],
            )
        }

        Event::PredictDone { request, outcome } => {
            let in_flight = match model.in_flight {
                Some(in_flight) if in_flight.request == request => in_flight,
                _ => {
                    return (
                        model,
                        vec![Effect::LogError(format!(
                            "Ignoring completion of unknown request {}",
                            request.0
                        ))],
                    )
                }
            };

            let model = Model {
                in_flight: None,
                ..model
            };

            if in_flight.superseded {
                let message = match &outcome {
                    Ok(_) => format!("Discarding result of superseded request {}", request.0),
                    Err(e) => format!("Discarding error of superseded request {}: {}", request.0, e),
                };
                return (model, vec![Effect::LogInfo(message)]);
            }

            match outcome {
                Ok(result) => (
                    Model {
                        result: Some(result),
                        ..model
                    },
                    vec![],
                ),
                Err(error) => {
                    let diagnostic = match &error {
                        PredictError::SchemaMismatch { .. } => error.to_string(),
                        _ => format!("Error predicting: {}", error),
                    };
                    (
                        Model {
                            alert: Some(Alert {
                                title: PREDICT_ALERT_TITLE,
                                message: error.alert_message(),
                            }),
                            ..model
                        },
                        vec![Effect::LogError(diagnostic)],
                    )
                }
            }
        }

        Event::AlertDismissed => (
            Model {
                alert: None,
                ..model
            },
            vec![],
        ),
    }
}

fn supersede_in_flight(model: Model, effects: &mut Vec<Effect>) -> Model {
    match model.in_flight {
        Some(in_flight) if !in_flight.superseded => {
            effects.push(Effect::LogInfo(format!(
                "Request {} superseded by a new selection state",
                in_flight.request.0
            )));
            Model {
                in_flight: Some(InFlight {
                    superseded: true,
                    ..in_flight
                }),
                ..model
            }
        }
        _ => model,
    }
}
