//! CSV export of stored readings.

use crate::types::HistoryEntry;

pub const CSV_HEADER: &str = "recorded_at,observed_at,temp_f,humidity_pct,abs_pressure_inhg,\
vapor_pressure_inhg,dew_point_f,humidity_grains,adr_pct,density_alt_ft,correction";

/// Render entries as CSV, header first, one row per entry in the given order.
pub fn to_csv(entries: &[HistoryEntry]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for entry in entries {
        let r = &entry.reading;
        let row = [
            escape(&entry.recorded_at),
            escape(entry.observed_at.as_deref().unwrap_or("")),
            entry.inputs.temp_f.to_string(),
            entry.inputs.humidity_pct.to_string(),
            entry.inputs.abs_pressure_inhg.to_string(),
            r.vapor_pressure_inhg.to_string(),
            r.dew_point_f.to_string(),
            r.humidity_grains.to_string(),
            r.adr_pct.to_string(),
            r.density_alt_ft.to_string(),
            r.correction.to_string(),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
