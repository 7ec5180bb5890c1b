//! Snapshot of the statistics a session reports, rendered either as a
//! classifier vector or as diagnostic text.

use super::{Feature, FEATURE_DIM};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Baseline load minus load at extraction time
    pub load_delta: f64,
    /// Last activity minus session start (ms)
    pub session_length_ms: i64,
    pub total_left_clicks: usize,
    pub max_left_click_delay: i64,
    pub average_left_click_delay: f64,
    pub min_left_click_delay: i64,
    pub performed_hits: u32,
    pub total_right_clicks: u32,
    pub placed_blocks: usize,
    pub max_place_delay: i64,
    pub average_place_delay: f64,
    pub min_place_delay: i64,
}

impl SessionStats {
    /// Classifier layout; the label slot is always 0.
    pub fn to_vector(&self) -> [f64; FEATURE_DIM] {
        [
            self.load_delta,
            self.session_length_ms as f64,
            self.total_left_clicks as f64,
            self.max_left_click_delay as f64,
            self.average_left_click_delay,
            self.min_left_click_delay as f64,
            self.performed_hits as f64,
            self.total_right_clicks as f64,
            self.placed_blocks as f64,
            self.max_place_delay as f64,
            self.average_place_delay,
            self.min_place_delay as f64,
            0.0,
        ]
    }
}

/// One `label: value` line per statistic, in vector order.
impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:?}", Feature::LoadDelta.label(), self.load_delta)?;
        writeln!(f, "{}: {}", Feature::SessionLength.label(), self.session_length_ms)?;
        writeln!(f, "{}: {}", Feature::TotalLeftClicks.label(), self.total_left_clicks)?;
        writeln!(f, "{}: {}", Feature::MaxLeftClickDelay.label(), self.max_left_click_delay)?;
        writeln!(
            f,
            "{}: {:?}",
            Feature::AverageLeftClickDelay.label(),
            self.average_left_click_delay
        )?;
        writeln!(f, "{}: {}", Feature::MinLeftClickDelay.label(), self.min_left_click_delay)?;
        writeln!(f, "{}: {}", Feature::PerformedHits.label(), self.performed_hits)?;
        writeln!(f, "{}: {}", Feature::TotalRightClicks.label(), self.total_right_clicks)?;
        writeln!(f, "{}: {}", Feature::PlacedBlocks.label(), self.placed_blocks)?;
        writeln!(f, "{}: {}", Feature::MaxPlaceDelay.label(), self.max_place_delay)?;
        writeln!(f, "{}: {:?}", Feature::AveragePlaceDelay.label(), self.average_place_delay)?;
        writeln!(f, "{}: {}", Feature::MinPlaceDelay.label(), self.min_place_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_lines_follow_vector_order() {
        let stats = SessionStats {
            load_delta: 2.0,
            session_length_ms: 250,
            total_left_clicks: 3,
            max_left_click_delay: 150,
            average_left_click_delay: 125.0,
            min_left_click_delay: 100,
            ..Default::default()
        };
        let text = stats.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        for (line, feature) in lines.iter().zip(Feature::ALL.iter()) {
            assert!(line.starts_with(feature.label()), "{line}");
        }
        assert_eq!(lines[0], "TPS Difference: 2.0");
        assert_eq!(lines[4], "Average left click delay: 125.0");
        assert_eq!(lines[5], "Minimum left click delay: 100");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn vector_label_slot_is_zero() {
        let v = SessionStats::default().to_vector();
        assert_eq!(v.len(), FEATURE_DIM);
        assert!(v.iter().all(|&x| x == 0.0));
    }
}
