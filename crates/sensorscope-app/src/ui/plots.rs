//! 2x2 plot grid.

use egui::{RichText, Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use sensorscope_core::{Figure, Panel};

use super::plot_settings::{to_color32, PlotSettings};

const TITLE_HEIGHT: f32 = 22.0;
const MIN_CELL_SIZE: f32 = 80.0;

/// Draw all four panels of `figure`, two per row
pub fn render_plots(ui: &mut Ui, figure: &Figure, settings: &PlotSettings) {
    let spacing = ui.spacing().item_spacing;
    let cell = Vec2::new(
        ((ui.available_width() - spacing.x) / 2.0).max(MIN_CELL_SIZE),
        ((ui.available_height() - spacing.y) / 2.0).max(MIN_CELL_SIZE),
    );

    for row in figure.panels.chunks(2) {
        ui.horizontal(|ui| {
            for panel in row {
                ui.allocate_ui(cell, |ui| {
                    ui.vertical(|ui| render_panel(ui, panel, settings, cell));
                });
            }
        });
    }
}

fn render_panel(ui: &mut Ui, panel: &Panel, settings: &PlotSettings, size: Vec2) {
    ui.label(RichText::new(panel.title()).strong());

    let mut plot = Plot::new(panel.title())
        .width(size.x)
        .height((size.y - TITLE_HEIGHT).max(MIN_CELL_SIZE / 2.0))
        .show_axes(true)
        .show_grid(settings.show_grid)
        .x_axis_label(panel.x_label())
        .y_axis_label(panel.y_label());

    if settings.show_legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        let line = Line::new(PlotPoints::new(panel.points.clone()))
            .name(panel.title())
            .color(to_color32(panel.kind.color()))
            .width(settings.line_width);

        plot_ui.line(line);
    });
}
