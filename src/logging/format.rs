//! JSON log lines: one JSON object per line (ndjson) for ingestion and audit.

use crate::config::LogConfig;
use crate::features::SessionStats;
use crate::recorder::{Session, SessionId};
use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn ts_iso(ms: i64) -> String {
    let dt = Utc.timestamp_millis_opt(ms).single().unwrap_or_else(Utc::now);
    dt.to_rfc3339()
}

/// What a finished recording looked like, for operators reviewing detections.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub started_at: String,
    pub last_activity: String,
    pub expired: bool,
    pub stats: SessionStats,
}

impl SessionSummary {
    pub fn from_session(session: &Session) -> Self {
        Self {
            session_id: session.id(),
            started_at: ts_iso(session.session_start()),
            last_activity: ts_iso(session.last_activity()),
            expired: session.is_expired_now(),
            stats: session.stats(),
        }
    }
}

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber described by the `log` section of the recorder config.
    pub fn init_from(config: &LogConfig) -> bool {
        Self::init(config.json, &config.level)
    }

    /// Install global subscriber: JSON lines to stdout, level from RUST_LOG or default.
    /// Returns false if a subscriber was already installed.
    pub fn init(json: bool, default_level: &str) -> bool {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stdout);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt)
                .try_init()
                .is_ok()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
                .try_init()
                .is_ok()
        }
    }

    /// Emit a single structured log line (e.g. a session summary) without going through tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) {
        if let Ok(line) = serde_json::to_string(event) {
            let _ = writeln!(w, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{FixedLoad, ManualClock};
    use crate::recorder::RecordableAction;
    use std::sync::Arc;

    #[test]
    fn summary_is_one_json_line() {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let mut session = Session::new(clock.clone(), Arc::new(FixedLoad(20.0)));
        session.record(RecordableAction::Hit).unwrap();

        let mut out = Vec::new();
        StructuredLogger::emit_json(&SessionSummary::from_session(&session), &mut out);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["session_id"], session.id().to_string());
        assert_eq!(value["stats"]["performed_hits"], 1);
        assert_eq!(value["expired"], false);
        assert!(value["started_at"].as_str().unwrap().starts_with("2023-11-14"));
    }

    #[test]
    fn subscriber_installs_once() {
        let config = LogConfig {
            level: "debug".to_string(),
            json: true,
        };
        StructuredLogger::init_from(&config);
        assert!(!StructuredLogger::init_from(&config));
        assert!(!StructuredLogger::init(false, "info"));
    }
}
