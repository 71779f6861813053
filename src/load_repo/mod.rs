// In-memory load store. Append-only; reports are computed fresh on every query.

pub mod aggregation;

use std::sync::{Arc, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::instrument;

use crate::clock::{Clock, SystemClock};
use crate::models::{BucketAverages, LoadSample, RecordedLoad, Report};
use aggregation::{Horizon, LAST_24_HOURS, LAST_60_MINUTES};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("sample age {age} cannot be bucketed")]
    InvalidAge { age: TimeDelta },
    #[error("bucket width must be positive, got {width}")]
    InvalidBucketWidth { width: TimeDelta },
    #[error("horizon task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub struct LoadStore {
    loads: RwLock<Vec<RecordedLoad>>,
    clock: Arc<dyn Clock>,
}

impl Default for LoadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            loads: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Records an already validated sample, stamped with the store clock.
    #[instrument(skip(self, sample), fields(repo = "loads", operation = "append"))]
    pub fn append(&self, sample: LoadSample) {
        let recorded_at = self.clock.now();
        self.record_at(sample, recorded_at);
    }

    /// Records a sample with an explicit timestamp (backfill, tests).
    pub fn record_at(&self, sample: LoadSample, recorded_at: DateTime<Utc>) {
        let load = RecordedLoad::new(sample, recorded_at);
        tracing::debug!(server_name = %load.server_name, "load recorded");
        // Samples are never mutated after push, so a poisoned lock still holds a consistent Vec.
        self.loads
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(load);
    }

    pub fn len(&self) -> usize {
        self.loads.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Averages for `server_name` (case-insensitive) over the last 60 minutes
    /// in 1-minute buckets and the last 24 hours in 60-minute buckets.
    /// Both horizons are anchored to the same query instant.
    #[instrument(skip(self), fields(repo = "loads", operation = "report"))]
    pub async fn report(&self, server_name: &str) -> Result<Report, ReportError> {
        let query_start = self.clock.now();
        let server_loads = Arc::new(self.loads_for(server_name));

        if server_loads.is_empty() {
            return Ok(Report::empty(server_name));
        }

        let (avg_last_60_minutes, avg_last_24_hours) = tokio::try_join!(
            average_in_background(server_loads.clone(), query_start, LAST_60_MINUTES),
            average_in_background(server_loads.clone(), query_start, LAST_24_HOURS),
        )?;

        tracing::debug!(
            samples = server_loads.len(),
            buckets_60_minutes = avg_last_60_minutes.len(),
            buckets_24_hours = avg_last_24_hours.len(),
            "report computed"
        );

        Ok(Report {
            server_name: server_name.to_string(),
            avg_last_60_minutes,
            avg_last_24_hours,
        })
    }

    /// Snapshot of the samples for one server; the read lock is released on return.
    fn loads_for(&self, server_name: &str) -> Vec<RecordedLoad> {
        let loads = self.loads.read().unwrap_or_else(|e| e.into_inner());
        loads
            .iter()
            .filter(|l| l.matches_server(server_name))
            .cloned()
            .collect()
    }
}

async fn average_in_background(
    loads: Arc<Vec<RecordedLoad>>,
    query_start: DateTime<Utc>,
    horizon: Horizon,
) -> Result<BucketAverages, ReportError> {
    tokio::task::spawn_blocking(move || {
        aggregation::average_by_bucket(&loads, query_start, horizon)
    })
    .await?
}
