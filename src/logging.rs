// Tracing setup: console output plus an error-only log file.

use std::path::Path;

use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::{LookupSpan, Registry};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::MonitoringConfig;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Installs the global subscriber. The returned guard flushes the error log on
/// drop and must live until shutdown; `None` when the error log is disabled.
pub fn init(config: &MonitoringConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = tracing_subscriber::fmt::layer()
        .with_timer(LocalTimer)
        .with_filter(filter);

    let (error_file, guard) = if config.error_log_path.is_empty() {
        (None, None)
    } else {
        let (layer, guard) = error_file_layer::<Registry>(Path::new(&config.error_log_path))?;
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(error_file)
        .with(console)
        .try_init()?;
    Ok(guard)
}

/// Layer appending ERROR events (plain text, no ANSI) to `path`.
pub fn error_file_layer<S>(
    path: &Path,
) -> anyhow::Result<(impl Layer<S> + use<S>, WorkerGuard)>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("error log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(LevelFilter::ERROR);
    Ok((layer, guard))
}
