//! Signals the recorder reads from its host: wall-clock time and server load.
//! Both are injected so tests can drive them deterministically.

mod clock;
mod load;

pub use clock::{Clock, ManualClock, SystemClock};
pub use load::{FixedLoad, LoadSource, SharedLoad, NOMINAL_TPS};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;
