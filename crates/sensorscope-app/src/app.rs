//! Main application structure.

use eframe::egui;

use crate::state::AppState;
use crate::ui::{render_controls, render_plots};

pub const WINDOW_TITLE: &str = "Graphic Visualization of Sensor Signals";

/// Main application
pub struct SensorScopeApp {
    state: AppState,
}

impl SensorScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Self::configure_style(&cc.egui_ctx);
        Self::with_state(state)
    }

    /// Build without a creation context (tests, embedding)
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn configure_style(ctx: &egui::Context) {
        // Trace colors are picked for a light background
        ctx.set_visuals(egui::Visuals::light());

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(8);
        style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
        ctx.set_style(style);
    }

    /// Draw one frame: controls first, then dispatch, then plots, so the
    /// plots always show the state after this frame's input.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            events = render_controls(ui, self.state.session());

            if let Some(err) = self.state.last_error() {
                ui.colored_label(egui::Color32::RED, err.to_string());
            }
            ui.add_space(4.0);
        });

        if !events.is_empty() {
            self.state.dispatch_all(events);
            // Labels above were drawn from the previous state
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            render_plots(ui, self.state.session().figure(), &self.state.plot_settings);
        });
    }
}

impl eframe::App for SensorScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
