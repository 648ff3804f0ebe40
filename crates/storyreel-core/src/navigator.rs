//! Keyboard and nav-click navigation
//!
//! Both affordances only produce scroll requests. The host performs the
//! scroll, and the visibility tracker then observes the result like any
//! other scroll.

use crate::geometry::Viewport;
use crate::story::Section;

/// Directional keys that jump between sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowDown,
    PageDown,
    ArrowUp,
    PageUp,
}

impl NavKey {
    pub fn direction(self) -> Direction {
        match self {
            NavKey::ArrowDown | NavKey::PageDown => Direction::Forward,
            NavKey::ArrowUp | NavKey::PageUp => Direction::Back,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

/// Request for the host to bring a section into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub smooth: bool,
}

impl ScrollRequest {
    pub fn smooth(index: usize) -> Self {
        Self { index, smooth: true }
    }
}

/// Result of handling a directional key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub request: Option<ScrollRequest>,
    /// The host should swallow the key instead of applying its own scroll
    pub prevent_default: bool,
}

/// Approximate index of the section under the viewport
///
/// This is `round(scroll_top / height)`, not a membership test. While a
/// smooth scroll is still running it reflects the in-flight position, so
/// rapid key presses can compute from a stale index. Returns `None` for a
/// zero or non-finite height, or a negative result.
pub fn current_section_index(viewport: Viewport) -> Option<usize> {
    if viewport.height <= 0.0 || !viewport.height.is_finite() {
        return None;
    }
    let index = (viewport.scroll_top / viewport.height).round();
    if index.is_finite() && index >= 0.0 {
        Some(index as usize)
    } else {
        None
    }
}

/// Neighbor of the current section in `direction`, if within range
pub fn keyboard_target(
    direction: Direction,
    viewport: Viewport,
    section_count: usize,
) -> Option<usize> {
    let current = current_section_index(viewport)?;
    let target = match direction {
        Direction::Forward => current.checked_add(1)?,
        Direction::Back => current.checked_sub(1)?,
    };
    (target < section_count).then_some(target)
}

/// Handle a directional key press
///
/// The key is always swallowed, even at the first or last section where no
/// scroll is requested.
pub fn handle_key(key: NavKey, viewport: Viewport, section_count: usize) -> KeyOutcome {
    step(key.direction(), viewport, section_count)
}

/// Move one section in `direction`; swallowed like a directional key
pub fn step(direction: Direction, viewport: Viewport, section_count: usize) -> KeyOutcome {
    KeyOutcome {
        request: keyboard_target(direction, viewport, section_count).map(ScrollRequest::smooth),
        prevent_default: true,
    }
}

/// Resolve a nav click on `target_id`; unknown ids resolve to nothing
pub fn click_target(sections: &[Section], target_id: &str) -> Option<ScrollRequest> {
    sections
        .iter()
        .position(|s| s.id == target_id)
        .map(ScrollRequest::smooth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_section(index: usize) -> Viewport {
        Viewport::new(index as f64 * 100.0, 100.0)
    }

    #[test]
    fn test_current_index_rounds() {
        assert_eq!(current_section_index(Viewport::new(0.0, 100.0)), Some(0));
        assert_eq!(current_section_index(Viewport::new(49.0, 100.0)), Some(0));
        assert_eq!(current_section_index(Viewport::new(50.0, 100.0)), Some(1));
        assert_eq!(current_section_index(Viewport::new(260.0, 100.0)), Some(3));
    }

    #[test]
    fn test_current_index_zero_height() {
        assert_eq!(current_section_index(Viewport::new(10.0, 0.0)), None);
    }

    #[test]
    fn test_forward_within_range() {
        for i in 0..3 {
            let expected = if i + 1 < 3 { Some(i + 1) } else { None };
            assert_eq!(keyboard_target(Direction::Forward, at_section(i), 3), expected);
        }
    }

    #[test]
    fn test_back_within_range() {
        for i in 0..3 {
            let expected = if i >= 1 { Some(i - 1) } else { None };
            assert_eq!(keyboard_target(Direction::Back, at_section(i), 3), expected);
        }
    }

    #[test]
    fn test_scrolled_past_end_goes_nowhere() {
        assert_eq!(keyboard_target(Direction::Forward, at_section(7), 3), None);
        assert_eq!(keyboard_target(Direction::Back, at_section(7), 3), None);
    }

    #[test]
    fn test_key_always_prevents_default() {
        let outcome = handle_key(NavKey::ArrowDown, at_section(2), 3);
        assert_eq!(outcome.request, None);
        assert!(outcome.prevent_default);

        let outcome = handle_key(NavKey::PageDown, at_section(0), 3);
        assert_eq!(outcome.request, Some(ScrollRequest::smooth(1)));
    }

    #[test]
    fn test_page_keys_match_arrows() {
        assert_eq!(NavKey::PageUp.direction(), NavKey::ArrowUp.direction());
        assert_eq!(NavKey::PageDown.direction(), Direction::Forward);
    }

    #[test]
    fn test_click_target() {
        let sections = vec![Section::new("a"), Section::new("b")];
        assert_eq!(click_target(&sections, "b"), Some(ScrollRequest::smooth(1)));
        assert_eq!(click_target(&sections, "x"), None);
    }
}
