//! Delays between consecutive events of one kind.

use crate::environment::Timestamp;

/// Signed gaps (ms) between chronologically consecutive timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelaySeries {
    delays: Vec<i64>,
}

impl DelaySeries {
    /// `k` timestamps give `k - 1` delays; fewer than two give none.
    pub fn from_timestamps(timestamps: &[Timestamp]) -> Self {
        Self {
            delays: timestamps.windows(2).map(|w| w[1].saturating_sub(w[0])).collect(),
        }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.delays
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Longest delay, 0 when empty.
    pub fn max(&self) -> i64 {
        self.delays.iter().copied().max().unwrap_or(0)
    }

    /// Shortest delay, 0 when empty.
    pub fn min(&self) -> i64 {
        self.delays.iter().copied().min().unwrap_or(0)
    }

    /// Arithmetic mean, 0.0 when empty.
    pub fn average(&self) -> f64 {
        if self.delays.is_empty() {
            return 0.0;
        }
        self.delays.iter().map(|&d| d as f64).sum::<f64>() / self.delays.len() as f64
    }
}
