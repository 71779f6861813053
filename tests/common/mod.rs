// Shared test helpers

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use servertrack::clock::ManualClock;
use servertrack::load_repo::LoadStore;
use servertrack::models::LoadSample;
use std::sync::Arc;

pub fn sample(server_name: &str, cpu: f64, ram: f64) -> LoadSample {
    LoadSample {
        server_name: server_name.into(),
        cpu,
        ram,
    }
}

/// Fixed instant so bucket boundaries are exact.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Store on a manual clock frozen at `start_time()`.
pub fn manual_store() -> (Arc<ManualClock>, LoadStore) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let store = LoadStore::with_clock(clock.clone());
    (clock, store)
}
