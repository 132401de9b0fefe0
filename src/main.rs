mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::FrogViewerApp;
use config::ViewerConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting FROG Viewer v{}", env!("CARGO_PKG_VERSION"));

    let config = ViewerConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "FROG Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(FrogViewerApp::new(config)))),
    )
}
