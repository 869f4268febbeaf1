//! Data types for decoded Xiaomi sensor advertisements

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Device family that produced an advertisement
///
/// The family is fixed before any measurement field is decoded, because the
/// weight field reads differently depending on who sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceFamily {
    /// Family not (yet) classified
    #[default]
    Unknown,
    /// Mijia temperature/humidity sensors (LYWSDCGQ and friends)
    Mijia,
    /// MiFlora plant sensor (temperature, illuminance, moisture, conductivity)
    MiFlora,
    /// LYWSD02 clock/hygrometer
    Lywsd02,
    /// Mi Scale and Mi Body Composition Scale
    MiScale,
}

impl DeviceFamily {
    /// Human-readable device name, as printed on the box
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Mijia => "Mi Jia",
            Self::MiFlora => "Mi Flora",
            Self::Lywsd02 => "LYWSD02",
            Self::MiScale => "Mi Scale",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Measurements decoded from one advertisement
///
/// Each field is independently present or absent; a sensor only ever
/// broadcasts one tagged record per advertisement, so a single parse fills
/// in exactly the fields that record carries. `weight`, `impedance` and
/// `timestamp` only appear for [`DeviceFamily::MiScale`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Device family the frame was classified as
    pub device_family: DeviceFamily,
    /// Temperature in °C, 0.1 °C resolution
    pub temperature: Option<f64>,
    /// Relative humidity in %, 0.1 % resolution
    pub humidity: Option<f64>,
    /// Battery level in %
    pub battery_level: Option<u8>,
    /// Soil conductivity in µS/cm
    pub conductivity: Option<u16>,
    /// Illuminance in lx (24-bit)
    pub illuminance: Option<u32>,
    /// Soil moisture in %
    pub moisture: Option<u8>,
    /// Body weight in kg
    pub weight: Option<f64>,
    /// Raw bioelectrical impedance, body composition scale only
    pub impedance: Option<u16>,
    /// Wall-clock time the scale recorded for the measurement
    pub timestamp: Option<NaiveDateTime>,
}

impl ParseResult {
    /// Create an empty result for a classified device family
    #[must_use]
    pub fn new(device_family: DeviceFamily) -> Self {
        Self {
            device_family,
            ..Self::default()
        }
    }
}
