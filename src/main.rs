mod analytics;
mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::PlantHealthApp;
use config::AppConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env_and_args(std::env::args_os().skip(1))
        .context("reading configuration")?;
    log::info!(
        "Starting with data {} and gallery {}",
        config.data_path.display(),
        config.gallery_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Plant Disease Dashboard",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render the gallery jpgs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PlantHealthApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
