//! A recording that starts when the player engages in a recordable action and
//! expires once they stop for the inactivity threshold.

use super::{RecordableAction, SessionId};
use crate::config::{SessionConfig, EXPIRY_THRESHOLD_MS};
use crate::environment::{Clock, LoadSource, Timestamp};
use crate::error::{RecorderError, RecorderResult};
use crate::features::{DelaySeries, FeatureVector, SessionStats};
use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

pub struct Session {
    id: SessionId,
    clock: Arc<dyn Clock>,
    load: Arc<dyn LoadSource>,
    expiry_threshold_ms: i64,

    session_start: Timestamp,
    last_activity: Timestamp,
    baseline_load: f64,

    left_click_times: Vec<Timestamp>,
    left_click_delays: OnceCell<DelaySeries>,
    right_click_count: u32,

    block_place_times: Vec<Timestamp>,
    block_place_delays: OnceCell<DelaySeries>,

    hit_count: u32,
}

impl Session {
    /// Start a recording now, sampling the baseline load once.
    pub fn new(clock: Arc<dyn Clock>, load: Arc<dyn LoadSource>) -> Self {
        Self::with_threshold(clock, load, EXPIRY_THRESHOLD_MS)
    }

    pub fn with_config(clock: Arc<dyn Clock>, load: Arc<dyn LoadSource>, config: &SessionConfig) -> Self {
        Self::with_threshold(clock, load, config.threshold_ms())
    }

    fn with_threshold(clock: Arc<dyn Clock>, load: Arc<dyn LoadSource>, expiry_threshold_ms: i64) -> Self {
        let now = clock.now();
        let baseline_load = load.current_load();
        let id = Uuid::new_v4();
        debug!(session_id = %id, start = now, baseline_load, "recording started");
        Self {
            id,
            clock,
            load,
            expiry_threshold_ms,
            session_start: now,
            last_activity: now,
            baseline_load,
            left_click_times: Vec::new(),
            left_click_delays: OnceCell::new(),
            right_click_count: 0,
            block_place_times: Vec::new(),
            block_place_delays: OnceCell::new(),
            hit_count: 0,
        }
    }

    /// Record an action at the current time.
    pub fn record(&mut self, action: RecordableAction) -> RecorderResult<()> {
        let now = self.clock.now();
        self.append(action, now, now)
    }

    /// Record an action that happened at `at`. Expiry is still judged against
    /// the current time. `at` is clamped into `[last_activity, now]`: recorded
    /// sequences never go backwards and a future timestamp cannot hold the
    /// session open past the clock.
    pub fn record_at(&mut self, action: RecordableAction, at: Timestamp) -> RecorderResult<()> {
        let now = self.clock.now();
        self.append(action, at, now)
    }

    pub fn add_left_click(&mut self) -> RecorderResult<()> {
        self.record(RecordableAction::LeftClick)
    }

    pub fn add_right_click(&mut self) -> RecorderResult<()> {
        self.record(RecordableAction::RightClick)
    }

    pub fn add_block_place(&mut self) -> RecorderResult<()> {
        self.record(RecordableAction::BlockPlace)
    }

    /// Damaging an entity.
    pub fn add_hit(&mut self) -> RecorderResult<()> {
        self.record(RecordableAction::Hit)
    }

    fn append(&mut self, action: RecordableAction, at: Timestamp, now: Timestamp) -> RecorderResult<()> {
        if self.is_expired(now) {
            let idle_ms = now.saturating_sub(self.last_activity);
            warn!(session_id = %self.id, action = action.as_str(), idle_ms, "append to expired recording rejected");
            return Err(RecorderError::ExpiredSession { id: self.id, idle_ms });
        }

        let at = at.min(now).max(self.last_activity);
        match action {
            RecordableAction::LeftClick => {
                self.left_click_times.push(at);
                self.left_click_delays.take();
            }
            RecordableAction::BlockPlace => {
                self.block_place_times.push(at);
                self.block_place_delays.take();
            }
            RecordableAction::RightClick => self.right_click_count += 1,
            RecordableAction::Hit => self.hit_count += 1,
        }
        self.last_activity = at;
        trace!(session_id = %self.id, action = action.as_str(), at, "recorded");
        Ok(())
    }

    /// True once nothing was recorded for longer than the expiry threshold.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now.saturating_sub(self.last_activity) > self.expiry_threshold_ms
    }

    pub fn is_expired_now(&self) -> bool {
        self.is_expired(self.clock.now())
    }

    /// Delays between consecutive left clicks, computed on first use.
    pub fn left_click_delays(&self) -> &DelaySeries {
        self.left_click_delays
            .get_or_init(|| DelaySeries::from_timestamps(&self.left_click_times))
    }

    /// Delays between consecutive block placements, computed on first use.
    pub fn block_place_delays(&self) -> &DelaySeries {
        self.block_place_delays
            .get_or_init(|| DelaySeries::from_timestamps(&self.block_place_times))
    }

    /// Current statistics. Load delta is taken against a fresh load reading.
    pub fn stats(&self) -> SessionStats {
        let left = self.left_click_delays();
        let place = self.block_place_delays();
        SessionStats {
            load_delta: self.baseline_load - self.load.current_load(),
            session_length_ms: self.session_length_ms(),
            total_left_clicks: self.left_click_times.len(),
            max_left_click_delay: left.max(),
            average_left_click_delay: left.average(),
            min_left_click_delay: left.min(),
            performed_hits: self.hit_count,
            total_right_clicks: self.right_click_count,
            placed_blocks: self.block_place_times.len(),
            max_place_delay: place.max(),
            average_place_delay: place.average(),
            min_place_delay: place.min(),
        }
    }

    /// Vector for the classifier, label slot left at 0.
    pub fn extract_features(&self) -> FeatureVector {
        let stats = self.stats();
        let ts = self.clock.now();
        debug!(
            session_id = %self.id,
            length_ms = stats.session_length_ms,
            left_clicks = stats.total_left_clicks,
            hits = stats.performed_hits,
            "features extracted"
        );
        FeatureVector {
            session_id: self.id,
            ts,
            values: stats.to_vector(),
        }
    }

    pub fn to_diagnostic_text(&self) -> String {
        self.stats().to_string()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn session_start(&self) -> Timestamp {
        self.session_start
    }

    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    pub fn session_length_ms(&self) -> i64 {
        self.last_activity.saturating_sub(self.session_start)
    }

    pub fn baseline_load(&self) -> f64 {
        self.baseline_load
    }

    pub fn expiry_threshold_ms(&self) -> i64 {
        self.expiry_threshold_ms
    }

    pub fn left_click_times(&self) -> &[Timestamp] {
        &self.left_click_times
    }

    pub fn block_place_times(&self) -> &[Timestamp] {
        &self.block_place_times
    }

    pub fn right_click_count(&self) -> u32 {
        self.right_click_count
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("session_start", &self.session_start)
            .field("last_activity", &self.last_activity)
            .field("baseline_load", &self.baseline_load)
            .field("left_clicks", &self.left_click_times.len())
            .field("right_clicks", &self.right_click_count)
            .field("block_places", &self.block_place_times.len())
            .field("hits", &self.hit_count)
            .finish_non_exhaustive()
    }
}
