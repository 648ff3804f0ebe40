//! Scroll geometry for stacked full-viewport sections

/// Visible window of the scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Distance scrolled from the top of the container
    pub scroll_top: f64,
    /// Height of the visible window; also the height of every section
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64) -> Self {
        Self { scroll_top, height }
    }

    /// Scroll offset that puts section `index` flush with the top
    pub fn offset_of(&self, index: usize) -> f64 {
        index as f64 * self.height
    }
}

/// Fraction of a box of `height` starting at `top` that lies in the viewport
pub fn visible_ratio(top: f64, height: f64, viewport: Viewport) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_top = viewport.scroll_top;
    let view_bottom = viewport.scroll_top + viewport.height;
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap.max(0.0) / height).clamp(0.0, 1.0)
}

/// Visible ratio of each of `count` sections, each one viewport tall
pub fn visible_ratios(count: usize, viewport: Viewport) -> Vec<f64> {
    (0..count)
        .map(|i| visible_ratio(viewport.offset_of(i), viewport.height, viewport))
        .collect()
}
