//! Form submission parsing.
//!
//! Browsers submit every field as text. Nothing reaches the evaluator until
//! all seven fields are present and parse to finite numbers.

use serde::Deserialize;
use vehidiag_core::error::CoreError;
use vehidiag_core::reading::{validate_finite, VehicleReading, FIELD_NAMES};

/// Raw `application/x-www-form-urlencoded` body of the diagnostics form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingForm {
    pub engine_temp: Option<String>,
    pub oil_pressure: Option<String>,
    pub battery_voltage: Option<String>,
    pub vibration_level: Option<String>,
    pub brake_wear: Option<String>,
    pub coolant_level: Option<String>,
    pub km_since_service: Option<String>,
}

impl ReadingForm {
    /// Submitted text per field in [`FIELD_NAMES`] order; empty when absent.
    pub fn raw_values(&self) -> [String; 7] {
        self.slots().map(|v| v.cloned().unwrap_or_default())
    }

    /// Parse every field, failing on the first missing or malformed one.
    pub fn to_reading(&self) -> Result<VehicleReading, CoreError> {
        let [
            engine_temp,
            oil_pressure,
            battery_voltage,
            vibration_level,
            brake_wear,
            coolant_level,
            km_since_service,
        ] = self.slots();

        Ok(VehicleReading {
            engine_temp: parse_field(FIELD_NAMES[0], engine_temp)?,
            oil_pressure: parse_field(FIELD_NAMES[1], oil_pressure)?,
            battery_voltage: parse_field(FIELD_NAMES[2], battery_voltage)?,
            vibration_level: parse_field(FIELD_NAMES[3], vibration_level)?,
            brake_wear: parse_field(FIELD_NAMES[4], brake_wear)?,
            coolant_level: parse_field(FIELD_NAMES[5], coolant_level)?,
            km_since_service: parse_field(FIELD_NAMES[6], km_since_service)?,
        })
    }

    fn slots(&self) -> [Option<&String>; 7] {
        [
            self.engine_temp.as_ref(),
            self.oil_pressure.as_ref(),
            self.battery_voltage.as_ref(),
            self.vibration_level.as_ref(),
            self.brake_wear.as_ref(),
            self.coolant_level.as_ref(),
            self.km_since_service.as_ref(),
        ]
    }
}

fn parse_field(name: &str, raw: Option<&String>) -> Result<f64, CoreError> {
    let text = raw.map(|s| s.trim()).unwrap_or_default();
    if text.is_empty() {
        return Err(CoreError::Validation(format!("{name} is required")));
    }
    let value: f64 = strip_digit_separators(text)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| CoreError::Validation(format!("{name} must be a number, got '{text}'")))?;
    validate_finite(value, name)?;
    Ok(value)
}

/// Drop `_` separators (`1_000`, `12_000.5`). Each one must sit between two
/// ASCII digits; anything else makes the text malformed.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut digits = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            let between_digits = i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            if !between_digits {
                return None;
            }
        } else {
            digits.push(c);
        }
    }
    Some(digits)
}
