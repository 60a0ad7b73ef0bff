//! Unit tests for AppState logic (no UI dependencies)

use approx::assert_abs_diff_eq;
use sensorscope_app::{AppConfig, AppState};
use sensorscope_core::{ControlEvent, Operation, Sensor, SignalConfig, SignalError};

fn state() -> AppState {
    AppState::new(&AppConfig::default()).unwrap()
}

#[test]
fn test_initial_state() {
    let state = state();
    assert!(state.last_error().is_none());
    assert_eq!(state.session().amplitude_position(), 30);
    assert_eq!(state.session().frequency(), 5);
    assert_eq!(state.session().sensor(), Sensor::CapacitiveTouch);
    assert!(state.plot_settings.show_grid);
}

#[test]
fn test_dispatch_slider_events() {
    let mut state = state();
    state.dispatch_all([
        ControlEvent::AmplitudeSlider(1),
        ControlEvent::FrequencySlider(50),
    ]);

    let params = state.session().model().noise_params();
    assert_abs_diff_eq!(params.amplitude(), 0.1);
    assert_eq!(params.frequency(), 50);
    assert_eq!(state.session().amplitude_label(), "Noise Amplitude: 0.1");
}

#[test]
fn test_rejected_event_is_recorded_then_cleared() {
    let mut state = state();
    state.dispatch(ControlEvent::FrequencySlider(0));
    assert_eq!(state.last_error(), Some(&SignalError::FrequencyOutOfRange(0)));
    assert_eq!(state.session().frequency(), 5);

    state.dispatch(ControlEvent::Apply(Operation::Add));
    assert!(state.last_error().is_none());
}

#[test]
fn test_config_applies_to_session() {
    let config = AppConfig {
        signal: SignalConfig {
            amplitude_position: 75,
            frequency: 20,
            ..SignalConfig::default()
        },
        ..AppConfig::default()
    };
    let state = AppState::new(&config).unwrap();
    assert_eq!(state.session().amplitude_label(), "Noise Amplitude: 7.5");
    assert_eq!(state.session().frequency_label(), "Noise Frequency (Hz): 20");
}

#[test]
fn test_invalid_config_rejected() {
    let config = AppConfig {
        signal: SignalConfig {
            amplitude_position: 0,
            ..SignalConfig::default()
        },
        ..AppConfig::default()
    };
    assert!(AppState::new(&config).is_err());
}
