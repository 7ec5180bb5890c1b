//! Recorder configuration. Expiry defaults to the 2 second inactivity window.

use serde::{Deserialize, Serialize};

/// Sessions end once the player pauses recordable activity for this long.
pub const EXPIRY_THRESHOLD_MS: i64 = 2000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderConfig {
    /// Per-session parameters
    pub session: SessionConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Idle time (ms) after which a session rejects appends. Values <= 0 are
    /// ignored in favor of [`EXPIRY_THRESHOLD_MS`].
    pub expiry_threshold_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_threshold_ms: EXPIRY_THRESHOLD_MS,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl SessionConfig {
    /// Threshold sessions actually use.
    pub fn threshold_ms(&self) -> i64 {
        if self.expiry_threshold_ms > 0 {
            self.expiry_threshold_ms
        } else {
            EXPIRY_THRESHOLD_MS
        }
    }
}

impl RecorderConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                match serde_json::from_str::<RecorderConfig>(&data) {
                    Ok(mut c) => {
                        if c.session.expiry_threshold_ms <= 0 {
                            tracing::warn!(
                                expiry_threshold_ms = c.session.expiry_threshold_ms,
                                "non-positive expiry threshold; using default"
                            );
                            c.session.expiry_threshold_ms = EXPIRY_THRESHOLD_MS;
                        }
                        return c;
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "invalid recorder config; using defaults")
                    }
                }
            }
        }
        Self::default()
    }
}
