//! Toolkit-independent description of the 2x2 plot grid.

use crate::model::SignalModel;
use crate::spectrum::magnitude_spectrum;

pub const TIME_AXIS: &str = "Time [s]";
pub const VOLTAGE_AXIS: &str = "Amplitude [V]";
pub const FREQUENCY_AXIS: &str = "Frequency [Hz]";
pub const MAGNITUDE_AXIS: &str = "Amplitude";

/// Grid slot of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Top left
    Original,
    /// Top right
    Noise,
    /// Bottom left
    Result,
    /// Bottom right
    Spectrum,
}

impl PanelKind {
    /// Row-major grid order
    pub const ALL: [PanelKind; 4] = [
        PanelKind::Original,
        PanelKind::Noise,
        PanelKind::Result,
        PanelKind::Spectrum,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Original => "Original Signal",
            PanelKind::Noise => "Noise Signal",
            PanelKind::Result => "Result of Operation",
            PanelKind::Spectrum => "DFT Result",
        }
    }

    /// Axis labels are fixed per slot. The result panel keeps its time axis
    /// even when it holds DFT magnitudes, and the spectrum panel always
    /// reads as Hz.
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            PanelKind::Original | PanelKind::Noise | PanelKind::Result => (TIME_AXIS, VOLTAGE_AXIS),
            PanelKind::Spectrum => (FREQUENCY_AXIS, MAGNITUDE_AXIS),
        }
    }

    /// RGB trace color
    pub fn color(&self) -> [u8; 3] {
        match self {
            PanelKind::Original => [255, 0, 0],
            PanelKind::Noise => [0, 0, 0],
            PanelKind::Result => [0, 0, 255],
            PanelKind::Spectrum => [255, 255, 0],
        }
    }
}

/// One subplot: a single trace with its labels
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: PanelKind,
    pub points: Vec<[f64; 2]>,
}

impl Panel {
    fn new(kind: PanelKind, x: &[f64], y: &[f64]) -> Self {
        Self {
            kind,
            points: x.iter().zip(y).map(|(&x, &y)| [x, y]).collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn x_label(&self) -> &'static str {
        self.kind.axis_labels().0
    }

    pub fn y_label(&self) -> &'static str {
        self.kind.axis_labels().1
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1])
    }
}

/// All four panels, rebuilt in full on every render
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: [Panel; 4],
}

impl Figure {
    /// Build every panel from the current model state.
    ///
    /// The spectrum panel is a fresh transform of the current result,
    /// independent of whether a DFT operation was applied.
    pub fn render(model: &SignalModel) -> Self {
        let time = model.time();
        let spectrum = magnitude_spectrum(model.result(), model.sample_rate());

        Self {
            panels: [
                Panel::new(PanelKind::Original, time, model.base()),
                Panel::new(PanelKind::Noise, time, model.noise()),
                Panel::new(PanelKind::Result, time, model.result()),
                Panel::new(PanelKind::Spectrum, &spectrum.frequencies, &spectrum.magnitudes),
            ],
        }
    }

    pub fn panel(&self, kind: PanelKind) -> &Panel {
        let idx = match kind {
            PanelKind::Original => 0,
            PanelKind::Noise => 1,
            PanelKind::Result => 2,
            PanelKind::Spectrum => 3,
        };
        &self.panels[idx]
    }
}
