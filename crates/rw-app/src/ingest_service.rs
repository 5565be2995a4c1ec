//! Station ingestion and on-demand computation.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rw_atmos::{
    Inputs, RawOutput, compute_racing_weather_checked, compute_racing_weather_with,
};
use rw_history::{AppendOutcome, HistoryEntry, HistoryStore};
use rw_station::{check_fresh, parse_payload};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// One payload to ingest.
#[derive(Debug, Clone)]
pub struct IngestRequest<'a> {
    /// Raw vendor response body.
    pub payload: &'a str,
    /// Reference time for freshness and `recorded_at`.
    pub now: DateTime<Utc>,
    /// Skip the staleness check.
    pub allow_stale: bool,
}

#[derive(Debug, Clone)]
pub struct IngestResponse {
    pub output: RawOutput,
    pub entry: HistoryEntry,
    pub outcome: AppendOutcome,
}

/// Open the history store described by the configuration.
pub fn open_history(config: &Config) -> AppResult<HistoryStore> {
    Ok(HistoryStore::open(
        config.history.path.clone(),
        config.history.max_entries,
    )?)
}

/// Run the pipeline on explicit inputs.
///
/// `checked` rejects inputs that would produce `NaN`/infinity; otherwise the
/// raw, unguarded output is returned.
pub fn compute_inputs(config: &Config, inputs: Inputs, checked: bool) -> AppResult<RawOutput> {
    let output = if checked {
        compute_racing_weather_checked(inputs, &config.calibration)?
    } else {
        let output = compute_racing_weather_with(inputs, &config.calibration);
        if let Some((field, value)) = output.first_non_finite() {
            warn!(field, value, "unchecked computation produced a non-finite value");
        }
        output
    };
    debug!(
        temp_f = inputs.temp_f,
        humidity_pct = inputs.humidity_pct,
        abs_pressure_inhg = inputs.abs_pressure_inhg,
        adr_pct = output.adr_pct,
        "computed racing weather"
    );
    Ok(output)
}

/// Extract, check, compute and record one vendor payload.
pub fn ingest_payload(
    config: &Config,
    store: &HistoryStore,
    request: IngestRequest<'_>,
) -> AppResult<IngestResponse> {
    let aliases = config.station.effective_aliases();
    let observation = parse_payload(request.payload, &aliases)?;

    if request.allow_stale {
        debug!("staleness check skipped");
    } else {
        let max_age = i64::try_from(config.station.max_age_s)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "station.max_age_s {} is out of range",
                    config.station.max_age_s
                ))
            })?;
        if let Err(err) = check_fresh(observation.observed_at, request.now, max_age) {
            warn!(%err, "rejecting stale observation");
            return Err(err.into());
        }
    }

    let output = compute_inputs(config, observation.inputs, true)?;

    let recorded_at = request.now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let observed_at = observation
        .observed_at
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true));
    let entry = HistoryEntry::from_output(&output, recorded_at, observed_at);

    let outcome = store.append(entry.clone())?;
    info!(
        adr_pct = entry.reading.adr_pct,
        density_alt_ft = entry.reading.density_alt_ft,
        correction = entry.reading.correction,
        ?outcome,
        "ingested station reading"
    );

    Ok(IngestResponse {
        output,
        entry,
        outcome,
    })
}

/// Read a payload file and ingest it.
pub fn ingest_file(
    config: &Config,
    store: &HistoryStore,
    path: &Path,
    now: DateTime<Utc>,
    allow_stale: bool,
) -> AppResult<IngestResponse> {
    let payload = std::fs::read_to_string(path).map_err(|e| AppError::PayloadFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    ingest_payload(
        config,
        store,
        IngestRequest {
            payload: &payload,
            now,
            allow_stale,
        },
    )
}
