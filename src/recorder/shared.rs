//! Session handle for event pipelines that call in from several threads.

use super::{RecordableAction, Session, SessionId};
use crate::environment::Timestamp;
use crate::error::RecorderResult;
use crate::features::{FeatureVector, SessionStats};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Each call holds the session lock for its whole duration, so the expiry
/// check and the append it guards happen as one step.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // Appends mutate only after the expiry check passes, so a poisoned
    // session is still consistent.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn id(&self) -> SessionId {
        self.lock().id()
    }

    pub fn record(&self, action: RecordableAction) -> RecorderResult<()> {
        self.lock().record(action)
    }

    pub fn record_at(&self, action: RecordableAction, at: Timestamp) -> RecorderResult<()> {
        self.lock().record_at(action, at)
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.lock().is_expired(now)
    }

    pub fn is_expired_now(&self) -> bool {
        self.lock().is_expired_now()
    }

    pub fn stats(&self) -> SessionStats {
        self.lock().stats()
    }

    pub fn extract_features(&self) -> FeatureVector {
        self.lock().extract_features()
    }

    pub fn to_diagnostic_text(&self) -> String {
        self.lock().to_diagnostic_text()
    }

    /// Run `f` against the session while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.lock())
    }
}

impl From<Session> for SharedSession {
    fn from(session: Session) -> Self {
        Self::new(session)
    }
}
