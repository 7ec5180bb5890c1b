//! Feature extraction: recorded timestamps → delay statistics → fixed-size vector.

mod delays;
mod stats;

pub use delays::DelaySeries;
pub use stats::SessionStats;

use crate::environment::Timestamp;
use crate::recorder::SessionId;
use serde::{Deserialize, Serialize};

/// Number of components the classifier expects.
pub const FEATURE_DIM: usize = 13;

/// Position of each component in a [`FeatureVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    LoadDelta,
    SessionLength,
    TotalLeftClicks,
    MaxLeftClickDelay,
    AverageLeftClickDelay,
    MinLeftClickDelay,
    PerformedHits,
    TotalRightClicks,
    PlacedBlocks,
    MaxPlaceDelay,
    AveragePlaceDelay,
    MinPlaceDelay,
    /// Ground-truth slot filled by whoever builds training data.
    Label,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_DIM] = [
        Feature::LoadDelta,
        Feature::SessionLength,
        Feature::TotalLeftClicks,
        Feature::MaxLeftClickDelay,
        Feature::AverageLeftClickDelay,
        Feature::MinLeftClickDelay,
        Feature::PerformedHits,
        Feature::TotalRightClicks,
        Feature::PlacedBlocks,
        Feature::MaxPlaceDelay,
        Feature::AveragePlaceDelay,
        Feature::MinPlaceDelay,
        Feature::Label,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name used in diagnostic output.
    pub fn label(self) -> &'static str {
        match self {
            Feature::LoadDelta => "TPS Difference",
            Feature::SessionLength => "Recording length",
            Feature::TotalLeftClicks => "Total left clicks",
            Feature::MaxLeftClickDelay => "Maximum left click delay",
            Feature::AverageLeftClickDelay => "Average left click delay",
            Feature::MinLeftClickDelay => "Minimum left click delay",
            Feature::PerformedHits => "Performed hits",
            Feature::TotalRightClicks => "Total right clicks",
            Feature::PlacedBlocks => "Blocks placed",
            Feature::MaxPlaceDelay => "Maximum place delay",
            Feature::AveragePlaceDelay => "Average place delay",
            Feature::MinPlaceDelay => "Minimum place delay",
            Feature::Label => "Label",
        }
    }
}

/// Fixed-size feature vector for classifier input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub session_id: SessionId,
    /// When the vector was extracted
    pub ts: Timestamp,
    pub values: [f64; FEATURE_DIM],
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn label(&self) -> f64 {
        self.get(Feature::Label)
    }

    /// Attach a ground-truth label, e.g. when exporting training samples.
    pub fn with_label(mut self, label: f64) -> Self {
        self.values[Feature::Label.index()] = label;
        self
    }

    /// Narrow to f32 for models that take single-precision input.
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|&v| v as f32).collect()
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        &self.values[idx]
    }
}
