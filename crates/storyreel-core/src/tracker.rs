//! Visibility tracking
//!
//! Fed the visible ratio of every section after each scroll update, the
//! tracker reports which sections just crossed the visibility threshold
//! upward. Falling back below the threshold only re-arms a section; it is
//! never reported as an event.

use tracing::trace;

/// Minimum visible fraction for a section to count as in view
pub const VISIBILITY_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Default)]
pub struct VisibilityTracker {
    /// Whether each section was at or above the threshold last observation
    in_view: Vec<bool>,
}

impl VisibilityTracker {
    pub fn new(section_count: usize) -> Self {
        Self {
            in_view: vec![false; section_count],
        }
    }

    pub fn section_count(&self) -> usize {
        self.in_view.len()
    }

    /// Record new ratios and return indices that entered view, in index order
    ///
    /// Ratios beyond the tracked section count are ignored. A NaN ratio
    /// counts as out of view.
    pub fn observe(&mut self, ratios: &[f64]) -> Vec<usize> {
        let mut entered = Vec::new();
        for (index, (&ratio, was_in_view)) in ratios.iter().zip(self.in_view.iter_mut()).enumerate() {
            let now_in_view = ratio >= VISIBILITY_THRESHOLD;
            if now_in_view && !*was_in_view {
                trace!("Section {} entered view at ratio {:.2}", index, ratio);
                entered.push(index);
            }
            *was_in_view = now_in_view;
        }
        entered
    }
}
