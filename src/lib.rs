//! Cheatbuster recorder — per-player behavioral sessions for cheat detection.
//!
//! Modular structure:
//! - [`recorder`] — Session recording of clicks, block placements and hits
//! - [`features`] — Delay statistics and the classifier feature vector
//! - [`environment`] — Injected clock and server-load signals
//! - [`error`] — Expired-session contract violation
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod environment;
pub mod error;
pub mod features;
pub mod logging;
pub mod recorder;

pub use config::{RecorderConfig, EXPIRY_THRESHOLD_MS};
pub use environment::{Clock, LoadSource, Timestamp};
pub use error::{RecorderError, RecorderResult};
pub use features::{Feature, FeatureVector, SessionStats, FEATURE_DIM};
pub use logging::StructuredLogger;
pub use recorder::{RecordableAction, Session, SessionId, SharedSession};
