//! Recorder errors. Appending to an expired session is the only failure.

use crate::recorder::SessionId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecorderError {
    /// The caller kept a handle to a session the registry should have discarded.
    #[error("session {id} expired after {idle_ms}ms of inactivity; data must not be appended")]
    ExpiredSession { id: SessionId, idle_ms: i64 },
}

pub type RecorderResult<T> = Result<T, RecorderError>;
