//! Vendor payload extraction.
//!
//! Station APIs return the latest sample in several envelopes: a bare record, a
//! list of records (newest first), a device list whose entries carry `lastData`,
//! or any of those wrapped in a `data` field. [`extract_observation`] walks the
//! envelope down to a single flat record and reads the three readings from it.

use crate::error::{StationError, StationResult};
use chrono::{DateTime, Utc};
use rw_atmos::Inputs;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Maximum envelope nesting followed before giving up.
const MAX_DEPTH: usize = 4;

/// Key names tried, in order, for each reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAliases {
    #[serde(default)]
    pub temperature: Vec<String>,
    #[serde(default)]
    pub humidity: Vec<String>,
    #[serde(default)]
    pub abs_pressure: Vec<String>,
}

impl FieldAliases {
    /// No aliases at all. Used for user-supplied additions.
    pub fn empty() -> Self {
        Self {
            temperature: Vec::new(),
            humidity: Vec::new(),
            abs_pressure: Vec::new(),
        }
    }

    /// `self` first, then the built-in vendor names, without duplicates.
    pub fn merged_with_defaults(&self) -> Self {
        let defaults = Self::default();
        Self {
            temperature: merge(&self.temperature, &defaults.temperature),
            humidity: merge(&self.humidity, &defaults.humidity),
            abs_pressure: merge(&self.abs_pressure, &defaults.abs_pressure),
        }
    }
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            temperature: owned(&["tempf", "temp_f", "outdoor_temp_f", "temperature"]),
            humidity: owned(&["humidity", "humidity_pct", "outdoor_humidity"]),
            abs_pressure: owned(&["baromabsin", "abs_pressure_inhg", "pressure_abs_inhg"]),
        }
    }
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

fn merge(first: &[String], then: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(first.len() + then.len());
    for key in first.iter().chain(then) {
        if !out.contains(key) {
            out.push(key.clone());
        }
    }
    out
}

/// One station sample reduced to pipeline inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub inputs: Inputs,
    /// Vendor timestamp, when the payload carries one.
    pub observed_at: Option<DateTime<Utc>>,
}

/// Parse raw payload text and extract an observation.
pub fn parse_payload(text: &str, aliases: &FieldAliases) -> StationResult<Observation> {
    let value: Value = serde_json::from_str(text)?;
    extract_observation(&value, aliases)
}

/// Extract the three readings and timestamp from a vendor payload.
pub fn extract_observation(payload: &Value, aliases: &FieldAliases) -> StationResult<Observation> {
    let record = locate_record(payload, 0)?;

    let inputs = Inputs {
        temp_f: numeric_field(record, &aliases.temperature, "temperature")?,
        humidity_pct: numeric_field(record, &aliases.humidity, "humidity")?,
        abs_pressure_inhg: numeric_field(record, &aliases.abs_pressure, "absolute pressure")?,
    };
    let observed_at = observation_time(record)?;

    Ok(Observation {
        inputs,
        observed_at,
    })
}

fn locate_record(value: &Value, depth: usize) -> StationResult<&Map<String, Value>> {
    if depth > MAX_DEPTH {
        return Err(StationError::UnrecognizedShape {
            reason: format!("nested deeper than {MAX_DEPTH} levels"),
        });
    }

    match value {
        Value::Array(items) => match items.first() {
            Some(first) => locate_record(first, depth + 1),
            None => Err(StationError::UnrecognizedShape {
                reason: "empty array".to_string(),
            }),
        },
        Value::Object(map) => {
            if let Some(last) = map.get("lastData") {
                debug!(depth, "descending into lastData");
                return locate_record(last, depth + 1);
            }
            if let Some(data @ (Value::Array(_) | Value::Object(_))) = map.get("data") {
                debug!(depth, "descending into data");
                return locate_record(data, depth + 1);
            }
            Ok(map)
        }
        other => Err(StationError::UnrecognizedShape {
            reason: format!("expected object or array, found {}", json_kind(other)),
        }),
    }
}

fn numeric_field(
    record: &Map<String, Value>,
    aliases: &[String],
    field: &'static str,
) -> StationResult<f64> {
    for key in aliases {
        let value = match record.get(key) {
            None | Some(Value::Null) => continue,
            Some(v) => v,
        };

        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        return match parsed {
            Some(v) => {
                debug!(field, key = key.as_str(), value = v, "extracted reading");
                Ok(v)
            }
            None => Err(StationError::NotNumeric {
                field,
                key: key.clone(),
                found: value.to_string(),
            }),
        };
    }

    Err(StationError::MissingField {
        field,
        tried: aliases.to_vec(),
    })
}

fn observation_time(record: &Map<String, Value>) -> StationResult<Option<DateTime<Utc>>> {
    if let Some(value) = record.get("dateutc") {
        let millis = match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::Null => return Ok(None),
            _ => None,
        };
        return millis
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(Some)
            .ok_or_else(|| StationError::InvalidTimestamp {
                found: value.to_string(),
            });
    }

    match record.get("date") {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| StationError::InvalidTimestamp { found: s.clone() }),
        Some(Value::Null) | None => Ok(None),
        Some(other) => Err(StationError::InvalidTimestamp {
            found: other.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_record() {
        let payload = json!({ "tempf": 80.0, "humidity": 50, "baromabsin": 28.9 });
        let obs = extract_observation(&payload, &FieldAliases::default()).unwrap();
        assert_eq!(obs.inputs, Inputs::new(80.0, 50.0, 28.9));
        assert_eq!(obs.observed_at, None);
    }

    #[test]
    fn device_list_with_last_data() {
        let payload = json!([{
            "macAddress": "00:0E:C6:00:00:00",
            "info": { "name": "Pit" },
            "lastData": {
                "dateutc": 1_700_000_000_000_i64,
                "tempf": 71.2,
                "humidity": 44,
                "baromabsin": 29.01,
                "baromrelin": 29.95
            }
        }]);
        let obs = extract_observation(&payload, &FieldAliases::default()).unwrap();
        assert_eq!(obs.inputs, Inputs::new(71.2, 44.0, 29.01));
        assert_eq!(
            obs.observed_at.unwrap().timestamp_millis(),
            1_700_000_000_000
        );
    }

    #[test]
    fn data_envelope_newest_first() {
        let payload = json!({ "data": [
            { "temp_f": "68.5", "humidity_pct": "61", "abs_pressure_inhg": "29.2",
              "date": "2024-05-04T18:30:00.000Z" },
            { "temp_f": "60", "humidity_pct": "70", "abs_pressure_inhg": "29.1" }
        ]});
        let obs = extract_observation(&payload, &FieldAliases::default()).unwrap();
        assert_eq!(obs.inputs, Inputs::new(68.5, 61.0, 29.2));
        assert_eq!(
            obs.observed_at.unwrap().to_rfc3339(),
            "2024-05-04T18:30:00+00:00"
        );
    }

    #[test]
    fn null_falls_through_to_next_alias() {
        let payload = json!({
            "tempf": null, "temp_f": 75,
            "humidity": 30, "baromabsin": 29.0
        });
        let obs = extract_observation(&payload, &FieldAliases::default()).unwrap();
        assert_eq!(obs.inputs.temp_f, 75.0);
    }

    #[test]
    fn missing_pressure_is_reported() {
        let payload = json!({ "tempf": 80, "humidity": 50, "baromrelin": 29.9 });
        let err = extract_observation(&payload, &FieldAliases::default()).unwrap_err();
        match err {
            StationError::MissingField { field, tried } => {
                assert_eq!(field, "absolute pressure");
                assert!(tried.contains(&"baromabsin".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_value_is_reported() {
        let payload = json!({ "tempf": "hot", "humidity": 50, "baromabsin": 29.9 });
        let err = extract_observation(&payload, &FieldAliases::default()).unwrap_err();
        assert!(matches!(err, StationError::NotNumeric { key, .. } if key == "tempf"));
    }

    #[test]
    fn custom_aliases_take_priority() {
        let extra = FieldAliases {
            temperature: vec!["outTemp".to_string()],
            ..FieldAliases::empty()
        };
        let aliases = extra.merged_with_defaults();
        assert_eq!(aliases.temperature[0], "outTemp");
        assert!(aliases.temperature.contains(&"tempf".to_string()));

        let payload = json!({ "outTemp": 90, "tempf": 10, "humidity": 20, "baromabsin": 29.5 });
        let obs = extract_observation(&payload, &aliases).unwrap();
        assert_eq!(obs.inputs.temp_f, 90.0);
    }

    #[test]
    fn merge_drops_duplicates() {
        let extra = FieldAliases {
            humidity: vec!["humidity".to_string()],
            ..FieldAliases::empty()
        };
        let merged = extra.merged_with_defaults();
        assert_eq!(merged.humidity, FieldAliases::default().humidity);
    }

    #[test]
    fn unrecognized_shapes() {
        let aliases = FieldAliases::default();
        assert!(matches!(
            extract_observation(&json!([]), &aliases),
            Err(StationError::UnrecognizedShape { .. })
        ));
        assert!(matches!(
            extract_observation(&json!("nope"), &aliases),
            Err(StationError::UnrecognizedShape { .. })
        ));
        let deep = json!([[[[[[{ "tempf": 1 }]]]]]]);
        assert!(matches!(
            extract_observation(&deep, &aliases),
            Err(StationError::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn invalid_timestamp_is_rejected() {
        let payload = json!({ "tempf": 80, "humidity": 50, "baromabsin": 28.9, "date": "yesterday" });
        let err = extract_observation(&payload, &FieldAliases::default()).unwrap_err();
        assert!(matches!(err, StationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn parse_payload_rejects_bad_json() {
        let err = parse_payload("{not json", &FieldAliases::default()).unwrap_err();
        assert!(matches!(err, StationError::Json(_)));
    }
}
