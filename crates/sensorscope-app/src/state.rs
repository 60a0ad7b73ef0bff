//! Application state wrapping the signal session.

use log::warn;
use sensorscope_core::{ControlEvent, Session, SignalError};

use crate::config::AppConfig;
use crate::ui::PlotSettings;

/// Unified application state
pub struct AppState {
    /// Signal model, control positions and current figure
    session: Session,

    /// Plot visualization settings
    pub plot_settings: PlotSettings,

    /// Error from the most recent dispatch, cleared by the next success
    last_error: Option<SignalError>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, SignalError> {
        Ok(Self {
            session: Session::new(&config.signal)?,
            plot_settings: config.plot.clone(),
            last_error: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn last_error(&self) -> Option<&SignalError> {
        self.last_error.as_ref()
    }

    /// Feed one control event through the session
    pub fn dispatch(&mut self, event: ControlEvent) {
        match self.session.handle(event) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                warn!("Rejected {:?}: {}", event, err);
                self.last_error = Some(err);
            }
        }
    }

    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = ControlEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }
}
