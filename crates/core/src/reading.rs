//! Vehicle sensor snapshot submitted for evaluation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Canonical field order, used wherever a reading is listed or rendered.
pub const FIELD_NAMES: [&str; 7] = [
    "engine_temp",
    "oil_pressure",
    "battery_voltage",
    "vibration_level",
    "brake_wear",
    "coolant_level",
    "km_since_service",
];

/// One snapshot of the seven monitored measurements.
///
/// No physical bounds are enforced: out-of-range values are still evaluated.
/// The only requirement is that every field is finite (see [`VehicleReading::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleReading {
    /// Engine temperature in °C.
    pub engine_temp: f64,
    /// Oil pressure in bar.
    pub oil_pressure: f64,
    /// Battery / charging voltage in V.
    pub battery_voltage: f64,
    /// Vibration level in g.
    pub vibration_level: f64,
    /// Brake pad wear, nominally 0-100 %.
    pub brake_wear: f64,
    /// Coolant level, nominally 0-100 %.
    pub coolant_level: f64,
    /// Distance driven since the last service, in km.
    pub km_since_service: f64,
}

impl VehicleReading {
    /// A healthy vehicle. Used to pre-fill the form when nothing was submitted.
    pub const fn nominal() -> Self {
        Self {
            engine_temp: 90.0,
            oil_pressure: 2.5,
            battery_voltage: 12.5,
            vibration_level: 0.5,
            brake_wear: 30.0,
            coolant_level: 80.0,
            km_since_service: 6000.0,
        }
    }

    /// `(name, value)` pairs in [`FIELD_NAMES`] order.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            (FIELD_NAMES[0], self.engine_temp),
            (FIELD_NAMES[1], self.oil_pressure),
            (FIELD_NAMES[2], self.battery_voltage),
            (FIELD_NAMES[3], self.vibration_level),
            (FIELD_NAMES[4], self.brake_wear),
            (FIELD_NAMES[5], self.coolant_level),
            (FIELD_NAMES[6], self.km_since_service),
        ]
    }

    /// Reject NaN and infinite values, naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in self.fields() {
            validate_finite(value, name)?;
        }
        Ok(())
    }
}

impl Default for VehicleReading {
    fn default() -> Self {
        Self::nominal()
    }
}

/// Validate that a measurement is a finite number.
pub fn validate_finite(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Format a measurement as its shortest round-trip decimal.
///
/// Whole numbers keep a trailing `.0` (`115.0`, `6000.0`). Magnitudes below
/// `1e-4` or at least `1e16` use exponent notation with an explicit sign and
/// at least two exponent digits (`1e-05`, `1.5e+16`).
pub fn format_measurement(value: f64) -> String {
    // `{:?}` switches to exponent form at the same magnitudes, but prints
    // `1e-5` / `1e16`.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
