use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "internships.json";
const DEFAULT_TOP_N: usize = 5;

/// Top-level configuration for the tracker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_file = env::var("TRACKER_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let top_n = match env::var("TRACKER_TOP_N") {
            Ok(raw) => parse_top_n(&raw)?,
            Err(_) => DEFAULT_TOP_N,
        };

        let log_level = env::var("TRACKER_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            storage: StorageConfig { data_file },
            display: DisplayConfig { top_n },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_top_n(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidTopN {
            value: raw.to_string(),
        }),
    }
}

/// Where the record file lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

/// Presentation limits applied by the CLI when printing ranked results.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub top_n: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopN { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopN { value } => write!(
                f,
                "TRACKER_TOP_N must be a positive integer (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("TRACKER_DATA_FILE");
        env::remove_var("TRACKER_TOP_N");
        env::remove_var("TRACKER_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.storage.data_file, PathBuf::from("internships.json"));
        assert_eq!(config.display.top_n, 5);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRACKER_DATA_FILE", "/tmp/my-internships.json");
        env::set_var("TRACKER_TOP_N", " 10 ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.storage.data_file,
            PathBuf::from("/tmp/my-internships.json")
        );
        assert_eq!(config.display.top_n, 10);
        reset_env();
    }

    #[test]
    fn rejects_zero_top_n() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("TRACKER_TOP_N", "0");
        let err = AppConfig::load().expect_err("zero is rejected");
        assert!(matches!(err, ConfigError::InvalidTopN { .. }));
        reset_env();
    }
}
