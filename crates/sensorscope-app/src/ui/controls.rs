//! Control panel: sensor selector, noise sliders and operation buttons.

use egui::{ComboBox, Slider, Ui};

use sensorscope_core::model::{
    AMPLITUDE_POSITION_MAX, AMPLITUDE_POSITION_MIN, FREQUENCY_MAX, FREQUENCY_MIN,
};
use sensorscope_core::{ControlEvent, Operation, Sensor, Session};

/// Buttons in the operations row; reset sits on its own below
const ROW_OPERATIONS: [Operation; 4] = [
    Operation::Add,
    Operation::Multiply,
    Operation::Convolve,
    Operation::Dft,
];

/// Render the controls for `session` and return the events they produced
/// this frame. The session itself is not modified here.
pub fn render_controls(ui: &mut Ui, session: &Session) -> Vec<ControlEvent> {
    let mut events = Vec::new();

    ui.spacing_mut().slider_width = (ui.available_width() - 16.0).max(120.0);

    // Sensor selection
    ui.label("Select Sensor");
    let mut sensor = session.sensor();
    ComboBox::from_id_salt("sensor")
        .selected_text(sensor.as_str())
        .width(240.0)
        .show_ui(ui, |ui| {
            for candidate in Sensor::ALL {
                ui.selectable_value(&mut sensor, candidate, candidate.as_str());
            }
        });
    if sensor != session.sensor() {
        events.push(ControlEvent::SensorSelected(sensor));
    }

    // Noise controls
    ui.label(session.amplitude_label());
    let mut amplitude_position = session.amplitude_position();
    if ui
        .add(
            Slider::new(
                &mut amplitude_position,
                AMPLITUDE_POSITION_MIN..=AMPLITUDE_POSITION_MAX,
            )
            .show_value(false),
        )
        .changed()
    {
        events.push(ControlEvent::AmplitudeSlider(amplitude_position));
    }

    ui.label(session.frequency_label());
    let mut frequency = session.frequency();
    if ui
        .add(Slider::new(&mut frequency, FREQUENCY_MIN..=FREQUENCY_MAX).show_value(false))
        .changed()
    {
        events.push(ControlEvent::FrequencySlider(frequency));
    }

    // Signal operations
    ui.label("Signal Operations");
    ui.horizontal(|ui| {
        for op in ROW_OPERATIONS {
            if ui.button(op.label()).clicked() {
                events.push(ControlEvent::Apply(op));
            }
        }
    });

    if ui.button(Operation::Reset.label()).clicked() {
        events.push(ControlEvent::Apply(Operation::Reset));
    }

    events
}
