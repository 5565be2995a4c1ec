//! Text input for manually entered readings.
//!
//! Only the station's own units are accepted: °F, percent and inHg. A bare
//! number is taken to be in those units already. Anything else is rejected
//! rather than converted.

use thiserror::Error;

/// Which reading a piece of text describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Dry-bulb temperature (°F)
    Temperature,
    /// Relative humidity (%)
    Humidity,
    /// Absolute pressure (inHg)
    AbsPressure,
}

impl InputKind {
    fn accepted_units(&self) -> &'static [&'static str] {
        match self {
            Self::Temperature => &["f", "°f", "degf", "fahrenheit"],
            Self::Humidity => &["%", "pct", "percent"],
            Self::AbsPressure => &["inhg", "in hg", "\"hg"],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::AbsPressure => "Absolute Pressure",
        }
    }
}

/// Error in reading text parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unit not recognized for this reading
    #[error("Unknown unit '{unit}' for {quantity} (only imperial station units are supported)")]
    UnknownUnit { unit: String, quantity: &'static str },

    /// Value is not finite
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: String },
}

/// Parse a reading such as `"80F"`, `"50 %"` or `"28.9 inHg"`.
pub fn parse_input(raw_text: &str, kind: InputKind) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(raw_text)?;

    let unit_lower = unit.to_lowercase();
    if !unit_lower.is_empty() && !kind.accepted_units().contains(&unit_lower.as_str()) {
        return Err(UnitError::UnknownUnit {
            unit,
            quantity: kind.label(),
        });
    }

    if !value.is_finite() {
        return Err(UnitError::OutOfRange {
            value,
            reason: "reading must be finite".to_string(),
        });
    }

    Ok(value)
}

fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok((value, String::new()));
    }

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.to_string()))
}
