//! Store configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the shot plan store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Artificial delay before interpretation, simulating async processing
    pub processing_delay: Duration,
    /// Maximum retained command history entries
    pub history_limit: usize,
    /// How long a notification stays visible before auto-expiry
    pub notification_ttl: Duration,
    /// Snapshot file for hydrate/flush; in-memory only when unset
    pub snapshot_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(1500),
            history_limit: 50,
            notification_ttl: Duration::from_secs(5),
            snapshot_path: None,
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            processing_delay: std::env::var("CINECRAFT_PROCESSING_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.processing_delay),
            history_limit: std::env::var("CINECRAFT_HISTORY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.history_limit),
            notification_ttl: std::env::var("CINECRAFT_NOTIFICATION_TTL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_ttl),
            snapshot_path: std::env::var("CINECRAFT_SNAPSHOT_PATH")
                .ok()
                .map(PathBuf::from),
        }
    }

    /// Config suited to tests and demos: no simulated delay, short TTL.
    pub fn immediate() -> Self {
        Self {
            processing_delay: Duration::ZERO,
            notification_ttl: Duration::from_millis(50),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.processing_delay, Duration::from_millis(1500));
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.notification_ttl, Duration::from_secs(5));
        assert!(config.snapshot_path.is_none());
    }
}
