// Background stats logger: periodically reports how many loads the store holds.

use crate::load_repo::LoadStore;
use std::sync::Arc;
use tokio::time::{Duration, interval};

pub struct WorkerConfig {
    /// How often to log app stats (real seconds). Zero is treated as one.
    pub stats_log_interval_secs: u64,
}

pub fn spawn(
    load_store: Arc<LoadStore>,
    config: WorkerConfig,
    mut shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    let stats_log_interval = Duration::from_secs(config.stats_log_interval_secs.max(1));

    tokio::spawn(async move {
        let mut stats_log_tick = interval(stats_log_interval);
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // First tick fires immediately; nothing is recorded yet.
        stats_log_tick.tick().await;

        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(samples_recorded = load_store.len(), "app stats");
                }
            }
        }
    })
}
