// Load samples: validated input and the recorded form held by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated sample as submitted by a server; not yet timestamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSample {
    pub server_name: String,
    pub cpu: f64,
    pub ram: f64,
}

/// A sample once appended: trimmed name plus the store-assigned timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedLoad {
    pub server_name: String,
    pub cpu: f64,
    pub ram: f64,
    pub recorded_at: DateTime<Utc>,
}

impl RecordedLoad {
    pub fn new(sample: LoadSample, recorded_at: DateTime<Utc>) -> Self {
        Self {
            server_name: sample.server_name.trim().to_string(),
            cpu: sample.cpu,
            ram: sample.ram,
            recorded_at,
        }
    }

    /// Case-insensitive name match; both sides are lower-cased.
    pub fn matches_server(&self, server_name: &str) -> bool {
        self.server_name.to_lowercase() == server_name.to_lowercase()
    }
}
