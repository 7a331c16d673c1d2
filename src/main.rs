use config::Config;
use eframe::egui;
use image_file::impl_rfd::FilePickerRfd;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use prediction_client::backend::new_prediction_client;
use preview::impl_texture::PreviewRegistryTexture;
use std::sync::Arc;
use upload_predict::gui::UploadPredictApp;
use upload_predict::main::UploadPredict;

mod config;
mod image_file;
mod library;
mod prediction_client;
mod preview;
mod upload_predict;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let prediction_client = new_prediction_client(&config, logger.clone())?;

    let file_picker = Arc::new(FilePickerRfd::new(logger.clone()));

    let _ = logger.info(&format!(
        "Starting with {:?} backend at {}",
        config.backend, config.predict_url
    ));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());

            let previews = Arc::new(PreviewRegistryTexture::new(
                cc.egui_ctx.clone(),
                logger.clone(),
            ));
            let repaint_ctx = cc.egui_ctx.clone();

            let upload_predict = UploadPredict::new(
                logger,
                prediction_client,
                previews.clone(),
                file_picker,
                Arc::new(move || repaint_ctx.request_repaint()),
            );

            Box::new(UploadPredictApp::new(upload_predict, previews))
        }),
    )?;

    Ok(())
}
