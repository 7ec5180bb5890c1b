//! Server load readings (ticks per second). The recorder samples these, it never computes them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Vanilla servers target 20 ticks per second.
pub const NOMINAL_TPS: f64 = 20.0;

pub trait LoadSource: Send + Sync {
    fn current_load(&self) -> f64;
}

/// Constant reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedLoad(pub f64);

impl Default for FixedLoad {
    fn default() -> Self {
        Self(NOMINAL_TPS)
    }
}

impl LoadSource for FixedLoad {
    fn current_load(&self) -> f64 {
        self.0
    }
}

/// Latest reading published by the host's tick meter. Writers and readers never block.
#[derive(Debug)]
pub struct SharedLoad {
    bits: AtomicU64,
}

impl SharedLoad {
    pub fn new(initial: f64) -> Self {
        Self {
            bits: AtomicU64::new(initial.to_bits()),
        }
    }

    pub fn publish(&self, tps: f64) {
        self.bits.store(tps.to_bits(), Ordering::Release);
    }
}

impl Default for SharedLoad {
    fn default() -> Self {
        Self::new(NOMINAL_TPS)
    }
}

impl LoadSource for SharedLoad {
    fn current_load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_load_returns_latest_publish() {
        let load = SharedLoad::default();
        assert_eq!(load.current_load(), 20.0);
        load.publish(17.5);
        assert_eq!(load.current_load(), 17.5);
    }
}
