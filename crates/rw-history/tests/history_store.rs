use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rw_atmos::{Inputs, compute_racing_weather};
use rw_history::{AppendOutcome, HistoryEntry, HistoryError, HistoryStore, to_csv};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn entry(temp_f: f64, observed_at: &str) -> HistoryEntry {
    let out = compute_racing_weather(Inputs::new(temp_f, 50.0, 28.9));
    HistoryEntry::from_output(&out, "2026-02-26T00:00:00+00:00", Some(observed_at.to_string()))
}

#[test]
fn append_load_roundtrip() {
    let dir = unique_temp_dir("rw_history_roundtrip");
    let store = HistoryStore::open(dir.join("nested").join("history.jsonl"), 10)
        .expect("failed to open store");

    assert!(store.load().unwrap().is_empty());

    let first = entry(70.0, "2024-05-04T18:00:00+00:00");
    let second = entry(72.0, "2024-05-04T18:05:00+00:00");
    assert_eq!(
        store.append(first.clone()).unwrap(),
        AppendOutcome::Appended { evicted: 0 }
    );
    store.append(second.clone()).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, vec![first, second]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn repeated_observation_is_not_stored_twice() {
    let dir = unique_temp_dir("rw_history_dupe");
    let store = HistoryStore::open(dir.join("history.jsonl"), 10).unwrap();

    let reading = entry(70.0, "2024-05-04T18:00:00+00:00");
    store.append(reading.clone()).unwrap();
    assert_eq!(store.append(reading).unwrap(), AppendOutcome::Duplicate);
    assert_eq!(store.load().unwrap().len(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rolling_window_evicts_oldest() {
    let dir = unique_temp_dir("rw_history_roll");
    let store = HistoryStore::open(dir.join("history.jsonl"), 3).unwrap();

    for i in 0..5 {
        let outcome = store
            .append(entry(60.0 + i as f64, &format!("2024-05-04T18:0{i}:00+00:00")))
            .unwrap();
        let expected_evicted = if i >= 3 { 1 } else { 0 };
        assert_eq!(
            outcome,
            AppendOutcome::Appended {
                evicted: expected_evicted
            }
        );
    }

    let temps: Vec<f64> = store
        .load()
        .unwrap()
        .iter()
        .map(|e| e.inputs.temp_f)
        .collect();
    assert_eq!(temps, vec![62.0, 63.0, 64.0]);

    let recent: Vec<f64> = store
        .recent(2)
        .unwrap()
        .iter()
        .map(|e| e.inputs.temp_f)
        .collect();
    assert_eq!(recent, vec![63.0, 64.0]);

    let csv = to_csv(&store.load().unwrap());
    assert_eq!(csv.lines().count(), 4);

    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn zero_capacity_is_rejected() {
    let dir = unique_temp_dir("rw_history_zero");
    let err = HistoryStore::open(dir.join("history.jsonl"), 0).unwrap_err();
    assert!(matches!(err, HistoryError::InvalidArg { .. }));
}

#[test]
fn corrupt_line_is_an_error() {
    let dir = unique_temp_dir("rw_history_corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("history.jsonl");
    fs::write(&path, "{ not json }\n").unwrap();

    let store = HistoryStore::open(&path, 5).unwrap();
    assert!(matches!(store.load(), Err(HistoryError::Json(_))));

    let _ = fs::remove_dir_all(&dir);
}
