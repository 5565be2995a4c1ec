//! History data types.

use rw_atmos::{DisplayReading, Inputs, RawOutput};
use serde::{Deserialize, Serialize};

pub type EntryId = String;

/// One stored reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    /// When the reading was computed (RFC 3339, UTC).
    pub recorded_at: String,
    /// Vendor timestamp of the underlying observation (RFC 3339, UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<String>,
    pub inputs: Inputs,
    pub reading: DisplayReading,
}

impl HistoryEntry {
    /// Build an entry from pipeline output; the id is derived from content.
    pub fn from_output(
        output: &RawOutput,
        recorded_at: impl Into<String>,
        observed_at: Option<String>,
    ) -> Self {
        let id = crate::hash::compute_entry_id(&output.inputs, observed_at.as_deref());
        Self {
            id,
            recorded_at: recorded_at.into(),
            observed_at,
            inputs: output.inputs,
            reading: DisplayReading::from_raw(output),
        }
    }
}
