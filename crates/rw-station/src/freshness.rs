//! Staleness policy for polled observations.

use crate::error::{StationError, StationResult};
use chrono::{DateTime, Duration, Utc};

/// Reject an observation older than `max_age` relative to `now`.
///
/// Observations without a timestamp, or stamped in the future, are accepted.
pub fn check_fresh(
    observed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    max_age: Duration,
) -> StationResult<()> {
    let Some(observed_at) = observed_at else {
        return Ok(());
    };

    let age = now - observed_at;
    if age > max_age {
        return Err(StationError::Stale {
            age_s: age.num_seconds(),
            max_age_s: max_age.num_seconds(),
        });
    }
    Ok(())
}
