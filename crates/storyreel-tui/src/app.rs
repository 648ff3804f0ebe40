use std::time::Instant;

use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout, Rect};
use storyreel_core::geometry::visible_ratios;
use storyreel_core::navigator::current_section_index;
use storyreel_core::{AppConfig, ScrollRequest, Story, StoryScroller, Viewport};
use tracing::{debug, warn};

use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub nav: Rect,
    pub story: Rect,
    pub status: Rect,
}

impl AppLayout {
    /// Nav rail on the left, story viewport on the right, status bar below
    pub fn new(area: Rect, nav_width: u16) -> Self {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Length(nav_width), Constraint::Min(1)])
            .split(rows[0]);
        Self {
            nav: columns[0],
            story: columns[1],
            status: rows[1],
        }
    }
}

/// Application state
pub struct App {
    pub scroller: StoryScroller,
    pub animator: ScrollAnimator,
    pub theme: Theme,
    pub nav_width: u16,
    /// Height of the story viewport, which is also the height of a section
    pub viewport_height: u16,
    /// Inner area of the nav rail at the last draw, for mouse hit-testing
    pub nav_area: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn new(story: Story, config: &AppConfig, theme: Theme) -> Self {
        Self {
            scroller: StoryScroller::new(story),
            animator: ScrollAnimator::new(config.ui.scroll.clone()),
            theme,
            nav_width: config.ui.nav_width,
            viewport_height: 0,
            nav_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Activate the first section before any scrolling happens
    pub fn start(&mut self, now: Instant) {
        if let Some(id) = self.scroller.bootstrap(now) {
            debug!("Bootstrapped with section '{}'", id);
        }
    }

    pub fn section_count(&self) -> usize {
        self.scroller.section_count()
    }

    /// True when the last section starts beyond the largest scroll offset,
    /// leaving the tail of the story unreachable at this height
    pub fn scroll_overflows(&self) -> bool {
        let sections = self.section_count().saturating_sub(1) as u64;
        sections * self.viewport_height as u64 > u16::MAX as u64
    }

    /// Largest scroll offset: the last section flush with the top
    pub fn max_scroll(&self) -> u16 {
        let sections = self.section_count().saturating_sub(1);
        (sections as u32 * self.viewport_height as u32).min(u16::MAX as u32) as u16
    }

    /// Current scroll state as seen by the core navigator
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.animator.current_scroll() as f64,
            self.viewport_height as f64,
        )
    }

    /// Adopt a new viewport height, keeping the nearest section aligned
    pub fn set_viewport_height(&mut self, height: u16) {
        if height == self.viewport_height {
            return;
        }
        let index = current_section_index(self.viewport()).unwrap_or(0);
        self.viewport_height = height;
        if self.scroll_overflows() {
            let reachable = u16::MAX as usize / height.max(1) as usize + 1;
            warn!(
                "Story has {} sections but only the first {} fit the scroll range at height {}",
                self.section_count(),
                reachable,
                height
            );
        }
        let offset = (index as u32 * height as u32).min(self.max_scroll() as u32) as u16;
        self.animator.set_scroll(offset);
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action, now: Instant) {
        let max_scroll = self.max_scroll();
        match action {
            Action::Quit => self.should_quit = true,
            Action::SectionKey(key) => {
                let outcome = self.scroller.handle_key(key, self.viewport());
                if let Some(request) = outcome.request {
                    self.request_scroll(request, now);
                }
            }
            Action::Step(direction) => {
                if let Some(request) = self.scroller.step(direction, self.viewport()).request {
                    self.request_scroll(request, now);
                }
            }
            Action::LineDown => self.animator.scroll_down(max_scroll),
            Action::LineUp => self.animator.scroll_up(max_scroll),
            Action::HalfPageDown => self
                .animator
                .scroll_half_page_down(self.viewport_height, max_scroll),
            Action::HalfPageUp => self
                .animator
                .scroll_half_page_up(self.viewport_height, max_scroll),
            Action::FirstSection => {
                if self.section_count() > 0 {
                    self.request_scroll(ScrollRequest::smooth(0), now);
                }
            }
            Action::LastSection => {
                if let Some(last) = self.section_count().checked_sub(1) {
                    self.request_scroll(ScrollRequest::smooth(last), now);
                }
            }
            Action::NavClick(entry) => {
                if let Some(request) = self.scroller.click_nav(entry) {
                    self.request_scroll(request, now);
                }
            }
            Action::None => {}
        }
    }

    fn request_scroll(&mut self, request: ScrollRequest, now: Instant) {
        let target = (request.index as u32 * self.viewport_height as u32)
            .min(u16::MAX as u32) as u16;
        if request.smooth {
            self.animator.scroll_to(target, self.max_scroll(), now);
        } else {
            self.animator.set_scroll(target.min(self.max_scroll()));
        }
    }

    /// Advance scrolling and counters to `now` and feed visibility to the
    /// scroller. Returns true while anything is still animating.
    pub fn update(&mut self, now: Instant) -> bool {
        self.animator.update(self.max_scroll(), now);
        let ratios = visible_ratios(self.section_count(), self.viewport());
        for id in self.scroller.observe(&ratios, now) {
            debug!("Section '{}' entered view", id);
        }
        let counters_running = self.scroller.tick(now);
        counters_running || self.animator.needs_update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storyreel_core::{Counter, NavKey, ScrollConfig, Section};

    fn app(smooth: bool) -> App {
        let story = Story::from_sections(vec![
            Section::new("a").with_counter(Counter::new("10")),
            Section::new("b").with_accent("#112233"),
            Section::new("c"),
        ])
        .unwrap();
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: smooth,
            animation_duration_ms: 100,
            ..Default::default()
        };
        let mut app = App::new(story, &config, Theme::default());
        app.set_viewport_height(20);
        app
    }

    #[test]
    fn test_layout_splits_rail_story_status() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), 18);
        assert_eq!(layout.nav.width, 18);
        assert_eq!(layout.story.width, 62);
        assert_eq!(layout.story.height, 23);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_arrow_down_scrolls_and_activates_next_section() {
        let mut app = app(true);
        let t0 = Instant::now();
        app.start(t0);
        app.update(t0);

        app.apply(Action::SectionKey(NavKey::ArrowDown), t0);
        assert_eq!(app.animator.target_scroll(), 20);

        app.update(t0 + Duration::from_millis(200));
        assert_eq!(app.animator.current_scroll(), 20);
        assert_eq!(app.scroller.current_index(), Some(1));
        assert!(app.scroller.nav()[1].active);
        assert!(app.scroller.sections()[0].is_active());
    }

    #[test]
    fn test_arrow_up_at_top_does_nothing() {
        let mut app = app(false);
        let t0 = Instant::now();
        app.start(t0);
        app.apply(Action::SectionKey(NavKey::ArrowUp), t0);
        assert_eq!(app.animator.current_scroll(), 0);
    }

    #[test]
    fn test_nav_click_and_last_section() {
        let mut app = app(false);
        let t0 = Instant::now();
        app.start(t0);

        app.apply(Action::NavClick(2), t0);
        assert_eq!(app.animator.current_scroll(), 40);

        app.apply(Action::FirstSection, t0);
        assert_eq!(app.animator.current_scroll(), 0);

        app.apply(Action::LastSection, t0);
        assert_eq!(app.animator.current_scroll(), 40);

        // No entry behind digit 9
        app.apply(Action::NavClick(8), t0);
        assert_eq!(app.animator.current_scroll(), 40);
    }

    #[test]
    fn test_update_reports_running_counters() {
        let mut app = app(false);
        let t0 = Instant::now();
        app.start(t0);
        assert!(app.update(t0 + Duration::from_millis(10)));
        assert!(!app.update(t0 + Duration::from_millis(1500)));
        assert_eq!(app.scroller.counter_text(0, 0).as_deref(), Some("10"));
    }

    #[test]
    fn test_resize_keeps_section_aligned() {
        let mut app = app(false);
        app.apply(Action::NavClick(1), Instant::now());
        assert_eq!(app.animator.current_scroll(), 20);

        app.set_viewport_height(30);
        assert_eq!(app.animator.current_scroll(), 30);
        assert_eq!(app.max_scroll(), 60);
    }

    #[test]
    fn test_scroll_overflow_detected_for_tall_stories() {
        let sections = (0..1400).map(|i| Section::new(format!("s{}", i))).collect();
        let story = Story::from_sections(sections).unwrap();
        let mut app = App::new(story, &AppConfig::default(), Theme::default());

        app.set_viewport_height(40);
        assert!(!app.scroll_overflows());

        app.set_viewport_height(50);
        assert!(app.scroll_overflows());
        assert_eq!(app.max_scroll(), u16::MAX);
    }

    #[test]
    fn test_quit() {
        let mut app = app(false);
        app.apply(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }
}
