//! SensorScope - graphic visualization of sensor signals

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use log::error;
use sensorscope_app::{AppConfig, AppState, SensorScopeApp, WINDOW_TITLE};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Bad configuration is fatal before any window exists
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };
    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("Failed to initialize signals: {err}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(SensorScopeApp::new(cc, state)))),
    )
}
