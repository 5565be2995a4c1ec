//! rw-station: turning weather-station payloads into pipeline inputs.
//!
//! Provides:
//! - Shape sniffing for the vendor JSON (device lists, `lastData`, `data` envelopes)
//! - Field extraction through configurable key aliases
//! - Freshness checks on observation timestamps
//! - Text parsing of manually entered readings (imperial tags only)

pub mod error;
pub mod extract;
pub mod freshness;
pub mod units;

pub use error::{StationError, StationResult};
pub use extract::{FieldAliases, Observation, extract_observation, parse_payload};
pub use freshness::check_fresh;
pub use units::{InputKind, UnitError, parse_input};
