use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "config.toml";

pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Port override kept for compatibility with existing deployments.
pub const PORT_ENV: &str = "SERVER_TRACK_PORT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Prefix for the load routes, e.g. "/servertrack" -> POST /servertrack/loads.
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            host: "0.0.0.0".into(),
            base_path: "/servertrack".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// How often to log app stats (samples recorded) at INFO level.
    pub stats_log_interval_secs: u64,
    /// File receiving ERROR-level records. Empty disables the file.
    pub error_log_path: String,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: 60,
            error_log_path: "error.log".into(),
        }
    }
}

impl AppConfig {
    /// Reads `CONFIG_FILE`, else `config.toml` if present, else built-in defaults.
    /// `SERVER_TRACK_PORT` overrides the port either way.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as `load`, with environment lookups supplied by the caller.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = match env(CONFIG_FILE_ENV) {
            Some(path) => Self::read_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::read_file(DEFAULT_CONFIG_FILE)?
            }
            None => AppConfig::default(),
        };
        if let Some(port) = env(PORT_ENV) {
            config.server.port = port.parse().map_err(|e| {
                anyhow::anyhow!("{} must be a port number, got {:?}: {}", PORT_ENV, port, e)
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a TOML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config file {}: {}", path.display(), e))?;
        Ok(toml::from_str(&s)?)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.server.base_path.starts_with('/') && self.server.base_path.len() > 1,
            "server.base_path must start with '/' and name a path, got {:?}",
            self.server.base_path
        );
        anyhow::ensure!(
            !self.server.base_path.ends_with('/'),
            "server.base_path must not end with '/', got {:?}",
            self.server.base_path
        );
        anyhow::ensure!(
            self.monitoring.error_log_path.is_empty()
                || Path::new(&self.monitoring.error_log_path).file_name().is_some(),
            "monitoring.error_log_path must name a file, got {:?}",
            self.monitoring.error_log_path
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
