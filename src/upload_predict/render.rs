use crate::prediction_client::interface::PredictionResult;
use crate::upload_predict::core::{Alert, Model};

pub const ACTIONS_PLACEHOLDER: &str = "Predictions will appear here...";
pub const CAPTION_PLACEHOLDER: &str = "Caption will appear here...";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing...";

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRow {
    pub label: String,
    pub percent: i64,
    /// Fraction of the bar to fill, the raw score clamped to `0.0..=1.0`.
    pub fill: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionsPanel {
    Placeholder(&'static str),
    Ranked {
        top_label: Option<String>,
        rows: Vec<ActionRow>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptionPanel {
    Placeholder(&'static str),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub clear_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub controls: ControlsView,
    pub actions: ActionsPanel,
    pub caption: CaptionPanel,
    pub alert: Option<Alert>,
}

pub fn render(model: &Model) -> View {
    View {
        controls: render_controls(model),
        actions: render_actions(model.result.as_ref()),
        caption: render_caption(model.result.as_ref()),
        alert: model.alert.clone(),
    }
}

pub fn render_controls(model: &Model) -> ControlsView {
    ControlsView {
        clear_enabled: model.can_clear(),
        submit_enabled: model.can_submit(),
        submit_label: if model.is_busy() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        },
    }
}

/// Rows follow the order the server sent; the first one is the top label.
pub fn render_actions(result: Option<&PredictionResult>) -> ActionsPanel {
    let Some(result) = result else {
        return ActionsPanel::Placeholder(ACTIONS_PLACEHOLDER);
    };

    ActionsPanel::Ranked {
        top_label: result.actions.first().map(|action| action.label.clone()),
        rows: result
            .actions
            .iter()
            .map(|action| ActionRow {
                label: action.label.clone(),
                percent: percent(action.score),
                fill: action.score.clamp(0.0, 1.0) as f32,
            })
            .collect(),
    }
}

pub fn render_caption(result: Option<&PredictionResult>) -> CaptionPanel {
    match result {
        Some(result) => CaptionPanel::Text(result.caption.clone()),
        None => CaptionPanel::Placeholder(CAPTION_PLACEHOLDER),
    }
}

pub fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}
