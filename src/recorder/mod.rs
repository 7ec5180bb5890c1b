//! Per-player recording of click, block-place and hit activity.
//!
//! - [`Session`] — single-owner recording with lazily derived delay statistics
//! - [`SharedSession`] — lock-guarded handle for multi-threaded event pipelines

mod session;
mod shared;

pub use session::Session;
pub use shared::SharedSession;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SessionId = Uuid;

/// Player actions the event source forwards to a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordableAction {
    LeftClick,
    RightClick,
    BlockPlace,
    /// Damaging an entity
    Hit,
}

impl RecordableAction {
    pub const ALL: [RecordableAction; 4] = [
        RecordableAction::LeftClick,
        RecordableAction::RightClick,
        RecordableAction::BlockPlace,
        RecordableAction::Hit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordableAction::LeftClick => "left_click",
            RecordableAction::RightClick => "right_click",
            RecordableAction::BlockPlace => "block_place",
            RecordableAction::Hit => "hit",
        }
    }
}
