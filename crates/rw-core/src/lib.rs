//! rw-core: stable foundation for racewx.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers + fixed-iteration bisection)
//! - units (imperial/SI conversion constants used by the atmosphere model)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::CoreError;
pub use numeric::*;
