//! SensorScope application library

pub mod app;
pub mod config;
pub mod state;
pub mod ui;

pub use app::{SensorScopeApp, WINDOW_TITLE};
pub use config::AppConfig;
pub use state::AppState;
