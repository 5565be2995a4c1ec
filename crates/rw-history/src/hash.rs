//! Content-based hashing for entry IDs.

use rw_atmos::Inputs;
use sha2::{Digest, Sha256};

/// Stable id for a reading: SHA-256 over the inputs and vendor timestamp.
///
/// Polling the same vendor observation twice yields the same id, which is how
/// the store spots duplicates.
pub fn compute_entry_id(inputs: &Inputs, observed_at: Option<&str>) -> String {
    let mut hasher = Sha256::new();

    let inputs_json = serde_json::to_string(inputs).unwrap_or_default();
    hasher.update(inputs_json.as_bytes());

    hasher.update(observed_at.unwrap_or("").as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_stability() {
        let inputs = Inputs::new(80.0, 50.0, 28.9);
        let a = compute_entry_id(&inputs, Some("2024-05-04T18:30:00+00:00"));
        let b = compute_entry_id(&inputs, Some("2024-05-04T18:30:00+00:00"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let a = compute_entry_id(&Inputs::new(80.0, 50.0, 28.9), None);
        let b = compute_entry_id(&Inputs::new(80.0, 51.0, 28.9), None);
        assert_ne!(a, b);

        let c = compute_entry_id(
            &Inputs::new(80.0, 50.0, 28.9),
            Some("2024-05-04T18:35:00+00:00"),
        );
        assert_ne!(a, c);
    }
}
