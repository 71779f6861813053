// Rolling report: per-bucket averages for the two query horizons

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mean CPU and RAM over the samples of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadAverage {
    #[serde(rename = "avgCPU")]
    pub avg_cpu: f64,
    #[serde(rename = "avgRAM")]
    pub avg_ram: f64,
}

/// Bucket number (1 = most recent bucket width) to its averages.
/// Integer keys serialize as JSON object keys ("1", "2", ...).
pub type BucketAverages = BTreeMap<u32, LoadAverage>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Echoes the queried name as given.
    pub server_name: String,
    pub avg_last_60_minutes: BucketAverages,
    pub avg_last_24_hours: BucketAverages,
}

impl Report {
    /// Report with both horizons empty (unknown server or no samples yet).
    pub fn empty(server_name: &str) -> Self {
        Self {
            server_name: server_name.to_string(),
            avg_last_60_minutes: BTreeMap::new(),
            avg_last_24_hours: BTreeMap::new(),
        }
    }
}
