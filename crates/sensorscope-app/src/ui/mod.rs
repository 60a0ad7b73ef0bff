//! UI components.

mod controls;
mod plot_settings;
mod plots;

pub use controls::render_controls;
pub use plot_settings::*;
pub use plots::render_plots;
