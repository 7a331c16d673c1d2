use crate::preview::impl_texture::PreviewRegistryTexture;
use crate::upload_predict::core::Alert;
use crate::upload_predict::main::UploadPredict;
use crate::upload_predict::render::{render, ActionsPanel, CaptionPanel, View};
use eframe::egui::{self, Color32, RichText, Stroke};
use std::sync::Arc;

const ACCENT: Color32 = Color32::from_rgb(0xe6, 0x51, 0x00);
const PANEL_FILL: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
const PANEL_BORDER: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const MUTED_TEXT: Color32 = Color32::from_rgb(0xa0, 0xa0, 0xa0);
const BUTTON_ROW_HEIGHT: f32 = 50.0;

enum Intent {
    PickFile,
    Clear,
    Submit,
    DismissAlert,
}

/// Preview state for the frame being drawn.
enum PreviewSlot {
    Empty,
    Texture(egui::TextureHandle),
    Undecodable(String),
}

pub struct UploadPredictApp {
    upload_predict: UploadPredict,
    previews: Arc<PreviewRegistryTexture>,
}

impl UploadPredictApp {
    pub fn new(upload_predict: UploadPredict, previews: Arc<PreviewRegistryTexture>) -> Self {
        Self {
            upload_predict,
            previews,
        }
    }

    fn preview_slot(&self) -> PreviewSlot {
        match &self.upload_predict.model().selection {
            None => PreviewSlot::Empty,
            Some(selection) => match self.previews.texture(&selection.preview) {
                Some(texture) => PreviewSlot::Texture(texture),
                None => PreviewSlot::Undecodable(selection.file.name.clone()),
            },
        }
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::PickFile => self.upload_predict.pick_file(),
            Intent::Clear => self.upload_predict.clear(),
            Intent::Submit => self.upload_predict.submit(),
            Intent::DismissAlert => self.upload_predict.dismiss_alert(),
        }
    }
}

impl eframe::App for UploadPredictApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.upload_predict.pump();

        let view = render(self.upload_predict.model());
        let preview = self.preview_slot();
        let busy = self.upload_predict.model().is_busy();
        let mut intents = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("Action Recognition & Captioning");
                ui.label(
                    RichText::new("Upload an image to detect the action and generate a caption.")
                        .color(MUTED_TEXT),
                );
                ui.add_space(8.0);
            });
        });

        egui::SidePanel::left("input")
            .resizable(false)
            .exact_width(ctx.screen_rect().width() / 2.0)
            .show(ctx, |ui| {
                draw_input(ui, &view, &preview, busy, &mut intents);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            draw_results(ui, &view);
        });

        if let Some(alert) = &view.alert {
            draw_alert(ctx, alert, &mut intents);
        }

        for intent in intents {
            self.apply(intent);
        }
    }
}

fn panel_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(PANEL_FILL)
        .rounding(12.0)
        .stroke(Stroke::new(1.0, PANEL_BORDER))
        .inner_margin(12.0)
}

fn draw_input(
    ui: &mut egui::Ui,
    view: &View,
    preview: &PreviewSlot,
    busy: bool,
    intents: &mut Vec<Intent>,
) {
    let preview_height = (ui.available_height() - BUTTON_ROW_HEIGHT - 16.0).max(120.0);
    let width = ui.available_width();

    panel_frame().show(ui, |ui| {
        ui.set_min_size(egui::vec2(width - 24.0, preview_height - 24.0));
        ui.set_max_height(preview_height - 24.0);

        match preview {
            PreviewSlot::Empty => {
                ui.centered_and_justified(|ui| {
                    let upload = egui::Button::new(
                        RichText::new("↑\n\nClick to Upload Image")
                            .size(18.0)
                            .color(MUTED_TEXT),
                    )
                    .frame(false);
                    if ui.add(upload).clicked() {
                        intents.push(Intent::PickFile);
                    }
                });
            }
            PreviewSlot::Texture(texture) => {
                draw_preview_header(ui, intents);
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                            .shrink_to_fit(),
                    );
                });
            }
            PreviewSlot::Undecodable(name) => {
                draw_preview_header(ui, intents);
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!("Preview unavailable for {}", name))
                            .italics()
                            .color(MUTED_TEXT),
                    );
                });
            }
        }
    });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let spacing = ui.spacing().item_spacing.x;
        let clear_width = (ui.available_width() - spacing) / 3.0;
        let submit_width = ui.available_width() - spacing - clear_width;

        let clear = egui::Button::new(RichText::new("CLEAR").strong())
            .min_size(egui::vec2(clear_width, BUTTON_ROW_HEIGHT));
        if ui.add_enabled(view.controls.clear_enabled, clear).clicked() {
            intents.push(Intent::Clear);
        }

        let label = if busy {
            RichText::new(view.controls.submit_label.to_uppercase()).strong()
        } else {
            RichText::new(view.controls.submit_label.to_uppercase())
                .strong()
                .color(Color32::WHITE)
        };
        let submit = egui::Button::new(label)
            .fill(ACCENT)
            .min_size(egui::vec2(submit_width, BUTTON_ROW_HEIGHT));
        if ui.add_enabled(view.controls.submit_enabled, submit).clicked() {
            intents.push(Intent::Submit);
        }
    });
}

fn draw_preview_header(ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        ui.label("image");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add(egui::Button::new("×").frame(false)).clicked() {
                intents.push(Intent::Clear);
            }
        });
    });
}

fn draw_results(ui: &mut egui::Ui, view: &View) {
    let half_height = (ui.available_height() - 12.0) / 2.0;

    draw_section(ui, "Predicted Actions", half_height, |ui| match &view.actions {
        ActionsPanel::Placeholder(text) => draw_placeholder(ui, text),
        ActionsPanel::Ranked { top_label, rows } => {
            if let Some(top_label) = top_label {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(top_label.to_uppercase())
                            .size(34.0)
                            .strong()
                            .color(ACCENT),
                    );
                });
                ui.add_space(16.0);
            }
            for row in rows {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&row.label).color(MUTED_TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{}%", row.percent)).color(MUTED_TEXT));
                    });
                });
                ui.add(
                    egui::ProgressBar::new(row.fill)
                        .fill(ACCENT)
                        .desired_width(ui.available_width()),
                );
                ui.add_space(8.0);
            }
        }
    });

    ui.add_space(12.0);

    draw_section(ui, "Generated Caption", half_height, |ui| match &view.caption {
        CaptionPanel::Placeholder(text) => draw_placeholder(ui, text),
        CaptionPanel::Text(caption) => {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(RichText::new(caption).size(18.0).color(Color32::WHITE));
            });
        }
    });
}

fn draw_section(
    ui: &mut egui::Ui,
    title: &str,
    height: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let width = ui.available_width();
    panel_frame().show(ui, |ui| {
        ui.set_min_size(egui::vec2(width - 24.0, height - 24.0));
        ui.set_max_height(height - 24.0);
        ui.label(RichText::new(title).strong().color(MUTED_TEXT));
        ui.separator();
        egui::ScrollArea::vertical()
            .id_source(title)
            .show(ui, add_contents);
    });
}

fn draw_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(text).italics().color(MUTED_TEXT));
    });
}

fn draw_alert(ctx: &egui::Context, alert: &Alert, intents: &mut Vec<Intent>) {
    egui::Window::new(alert.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(&alert.message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                intents.push(Intent::DismissAlert);
            }
        });
}
