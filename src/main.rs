mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::NatalityApp;
use data::store::DataStore;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // The only read of the source file for this process.
    let path = config::data_file_path();
    let state = AppState::new(DataStore::open(path));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config::APP_TITLE)
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(NatalityApp::new(state)))),
    )
}
