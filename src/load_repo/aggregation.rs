// Time-bucketed averaging: pure logic over a snapshot of one server's samples.
// Buckets count backward from the query instant; bucket 1 is the most recent width.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};

use super::ReportError;
use crate::models::{BucketAverages, LoadAverage, RecordedLoad};

/// A query horizon: how far back to look and how wide each bucket is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub duration_minutes: i64,
    pub bucket_width_minutes: i64,
}

/// Last 60 minutes in 1-minute buckets.
pub const LAST_60_MINUTES: Horizon = Horizon {
    duration_minutes: 60,
    bucket_width_minutes: 1,
};

/// Last 24 hours in 60-minute buckets.
pub const LAST_24_HOURS: Horizon = Horizon {
    duration_minutes: 1440,
    bucket_width_minutes: 60,
};

impl Horizon {
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::minutes(self.duration_minutes)
    }

    pub fn bucket_width(&self) -> TimeDelta {
        TimeDelta::minutes(self.bucket_width_minutes)
    }
}

/// Bucket for a sample of the given age: ceil(age / width).
/// Age must be positive; a zero age has no bucket.
pub fn bucket_key(age: TimeDelta, width: TimeDelta) -> Result<u32, ReportError> {
    let age_ns = age
        .num_nanoseconds()
        .and_then(|ns| u64::try_from(ns).ok())
        .filter(|ns| *ns > 0)
        .ok_or(ReportError::InvalidAge { age })?;
    let width_ns = width
        .num_nanoseconds()
        .and_then(|ns| u64::try_from(ns).ok())
        .filter(|ns| *ns > 0)
        .ok_or(ReportError::InvalidBucketWidth { width })?;
    u32::try_from(age_ns.div_ceil(width_ns)).map_err(|_| ReportError::InvalidAge { age })
}

/// Averages the samples recorded strictly inside (query_start - duration, query_start),
/// grouped by bucket. Samples exactly on either bound are left out.
pub fn average_by_bucket(
    loads: &[RecordedLoad],
    query_start: DateTime<Utc>,
    horizon: Horizon,
) -> Result<BucketAverages, ReportError> {
    let min_time = query_start - horizon.duration();
    let width = horizon.bucket_width();

    let mut by_bucket: BTreeMap<u32, Vec<&RecordedLoad>> = BTreeMap::new();
    for load in loads
        .iter()
        .filter(|l| l.recorded_at > min_time && l.recorded_at < query_start)
    {
        let key = bucket_key(query_start - load.recorded_at, width)?;
        by_bucket.entry(key).or_default().push(load);
    }

    Ok(by_bucket
        .into_iter()
        .map(|(key, refs)| (key, average(&refs)))
        .collect())
}

fn average(refs: &[&RecordedLoad]) -> LoadAverage {
    LoadAverage {
        avg_cpu: mean_f64(&refs.iter().map(|l| l.cpu).collect::<Vec<_>>()),
        avg_ram: mean_f64(&refs.iter().map(|l| l.ram).collect::<Vec<_>>()),
    }
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
