//! Sensor catalogue shown in the selector.

use std::fmt;

/// Sensor the signals nominally come from.
///
/// Selection is display-only: it never feeds into signal generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sensor {
    #[default]
    CapacitiveTouch,
    RgbdCamera,
    MuscleSensor,
    MagnetostrictivePosition,
    UltrasonicPing,
}

impl Sensor {
    pub const ALL: [Sensor; 5] = [
        Sensor::CapacitiveTouch,
        Sensor::RgbdCamera,
        Sensor::MuscleSensor,
        Sensor::MagnetostrictivePosition,
        Sensor::UltrasonicPing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sensor::CapacitiveTouch => "TTP223 Capacitive Touch",
            Sensor::RgbdCamera => "Kamera RGB-D",
            Sensor::MuscleSensor => "Myoware Muscle",
            Sensor::MagnetostrictivePosition => "MTS Temposonics",
            Sensor::UltrasonicPing => "Parallax Ping",
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
