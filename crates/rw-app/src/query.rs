//! Query helpers over stored history.

use rw_history::HistoryEntry;

use crate::error::{AppError, AppResult};

/// Min / max / mean of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl MetricStats {
    fn from_values(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.filter(|v| v.is_finite()) {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        (count > 0).then(|| Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

/// Summary of stored readings.
#[derive(Debug, Clone)]
pub struct HistorySummary {
    pub count: usize,
    pub first_recorded_at: String,
    pub last_recorded_at: String,
    pub adr_pct: Option<MetricStats>,
    pub density_alt_ft: Option<MetricStats>,
    pub correction: Option<MetricStats>,
}

/// Summarize history entries (oldest first).
pub fn summarize(entries: &[HistoryEntry]) -> AppResult<HistorySummary> {
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AppError::InvalidInput("No readings in history".to_string())),
    };

    Ok(HistorySummary {
        count: entries.len(),
        first_recorded_at: first.recorded_at.clone(),
        last_recorded_at: last.recorded_at.clone(),
        adr_pct: MetricStats::from_values(entries.iter().map(|e| e.reading.adr_pct)),
        density_alt_ft: MetricStats::from_values(entries.iter().map(|e| e.reading.density_alt_ft)),
        correction: MetricStats::from_values(entries.iter().map(|e| e.reading.correction)),
    })
}

/// Extract `(recorded_at, value)` pairs for one displayed metric.
pub fn extract_series(entries: &[HistoryEntry], metric: &str) -> AppResult<Vec<(String, f64)>> {
    let pick: fn(&HistoryEntry) -> f64 = match metric {
        "vapor_pressure" | "vapor_pressure_inhg" => |e| e.reading.vapor_pressure_inhg,
        "dew_point" | "dew_point_f" => |e| e.reading.dew_point_f,
        "grains" | "humidity_grains" => |e| e.reading.humidity_grains,
        "adr" | "adr_pct" => |e| e.reading.adr_pct,
        "density_alt" | "density_alt_ft" => |e| e.reading.density_alt_ft,
        "correction" => |e| e.reading.correction,
        "temp" | "temp_f" => |e| e.inputs.temp_f,
        "humidity" | "humidity_pct" => |e| e.inputs.humidity_pct,
        "pressure" | "abs_pressure_inhg" => |e| e.inputs.abs_pressure_inhg,
        _ => {
            return Err(AppError::InvalidInput(format!(
                "Unknown metric: {}",
                metric
            )));
        }
    };

    Ok(entries
        .iter()
        .map(|e| (e.recorded_at.clone(), pick(e)))
        .collect())
}
