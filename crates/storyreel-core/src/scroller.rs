//! Story scroller state machine
//!
//! Ties the pieces together: visibility events activate sections, activation
//! highlights the nav rail and starts the section's counters once, and key or
//! nav input turns into scroll requests for the host.
//!
//! The host drives everything from its own loop:
//!
//! ```ignore
//! let mut scroller = StoryScroller::new(story);
//! scroller.bootstrap(Instant::now());
//! loop {
//!     // after applying scroll for this frame
//!     scroller.observe(&visible_ratios(scroller.section_count(), viewport), now);
//!     scroller.tick(now);
//!     // render scroller.sections() / scroller.nav()
//! }
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::animation::CounterAnimation;
use crate::geometry::Viewport;
use crate::nav::sync_nav;
use crate::navigator::{self, Direction, KeyOutcome, NavKey, ScrollRequest};
use crate::story::{NavEntry, Section, Story};
use crate::tracker::VisibilityTracker;

#[derive(Debug, Clone)]
struct RunningCounter {
    section: usize,
    counter: usize,
    animation: CounterAnimation,
}

#[derive(Debug, Clone)]
pub struct StoryScroller {
    story: Story,
    tracker: VisibilityTracker,
    running: Vec<RunningCounter>,
    /// Most recently activated section
    current: Option<usize>,
}

impl StoryScroller {
    pub fn new(story: Story) -> Self {
        let tracker = VisibilityTracker::new(story.sections.len());
        Self {
            story,
            tracker,
            running: Vec::new(),
            current: None,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn sections(&self) -> &[Section] {
        &self.story.sections
    }

    pub fn nav(&self) -> &[NavEntry] {
        &self.story.nav
    }

    pub fn section_count(&self) -> usize {
        self.story.sections.len()
    }

    /// Index of the most recently activated section
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.current.and_then(|i| self.story.sections.get(i))
    }

    /// True while any counter animation still has frames to produce
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Treat the first section as in view before any observation arrives.
    /// Returns the id of the activated section, or `None` for an empty story.
    pub fn bootstrap(&mut self, now: Instant) -> Option<String> {
        if self.story.sections.is_empty() {
            debug!("Empty story, nothing to bootstrap");
            return None;
        }
        self.activate(0, now);
        Some(self.story.sections[0].id.clone())
    }

    /// Feed visible ratios (one per section, document order) and process
    /// every section that crossed into view. Returns the activated ids.
    pub fn observe(&mut self, ratios: &[f64], now: Instant) -> Vec<String> {
        let entered = self.tracker.observe(ratios);
        entered
            .into_iter()
            .map(|index| {
                self.activate(index, now);
                self.story.sections[index].id.clone()
            })
            .collect()
    }

    /// Process section `index` entering view: mark it active, sync the nav
    /// rail and start its counters unless they already ran
    pub fn activate(&mut self, index: usize, now: Instant) {
        let Some(section) = self.story.sections.get_mut(index) else {
            return;
        };

        if section.activate() {
            info!("Section '{}' activated", section.id);
        }
        self.current = Some(index);

        let id = section.id.clone();
        sync_nav(&mut self.story.nav, &self.story.sections, &id);
        self.start_counters(index, now);
    }

    fn start_counters(&mut self, index: usize, now: Instant) {
        let section = &mut self.story.sections[index];
        if !section.claim_counters() {
            return;
        }
        debug!(
            "Starting {} counter(s) in section '{}'",
            section.counters.len(),
            section.id
        );
        for (counter_index, counter) in section.counters.iter().enumerate() {
            self.running.push(RunningCounter {
                section: index,
                counter: counter_index,
                animation: CounterAnimation::start(counter, now),
            });
        }
    }

    /// Advance every running counter to `now` and write its text.
    /// Returns true while any counter is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let sections = &mut self.story.sections;
        self.running.retain_mut(|running| {
            let frame = running.animation.tick(now);
            if let Some(counter) = sections
                .get_mut(running.section)
                .and_then(|s| s.counters.get_mut(running.counter))
            {
                counter.display = Some(frame.text);
            }
            !frame.done
        });
        !self.running.is_empty()
    }

    /// Handle a directional key against the current scroll position
    pub fn handle_key(&self, key: NavKey, viewport: Viewport) -> KeyOutcome {
        self.step(key.direction(), viewport)
    }

    /// Jump one section in `direction` from the approximate current index
    pub fn step(&self, direction: Direction, viewport: Viewport) -> KeyOutcome {
        let outcome = navigator::step(direction, viewport, self.section_count());
        if let Some(request) = outcome.request {
            debug!("{:?} -> section {}", direction, request.index);
        }
        outcome
    }

    /// Handle a click on nav entry `entry`; unknown entries or targets are ignored
    pub fn click_nav(&self, entry: usize) -> Option<ScrollRequest> {
        let target = &self.story.nav.get(entry)?.target;
        let request = navigator::click_target(&self.story.sections, target);
        if request.is_none() {
            debug!("Nav target '{}' does not resolve, ignoring click", target);
        }
        request
    }

    /// Text currently displayed for a counter
    pub fn counter_text(&self, section: usize, counter: usize) -> Option<String> {
        self.story
            .sections
            .get(section)?
            .counters
            .get(counter)
            .map(|c| c.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Counter;
    use std::time::Duration;

    fn three_sections() -> StoryScroller {
        let story = Story::from_sections(vec![
            Section::new("a")
                .with_accent("#ff6b35")
                .with_counter(Counter::new("42.5").with_prefix("$").with_suffix("M")),
            Section::new("b")
                .with_accent("#3366ff")
                .with_counter(Counter::new("1000")),
            Section::new("c"),
        ])
        .unwrap();
        StoryScroller::new(story)
    }

    #[test]
    fn test_bootstrap_activates_first_section() {
        let mut scroller = three_sections();
        let t0 = Instant::now();
        assert_eq!(scroller.bootstrap(t0).as_deref(), Some("a"));
        assert!(scroller.sections()[0].is_active());
        assert!(scroller.nav()[0].active);
        assert_eq!(scroller.nav()[0].accent.as_deref(), Some("#ff6b35"));
        assert!(scroller.is_animating());
    }

    #[test]
    fn test_bootstrap_empty_story() {
        let mut scroller = StoryScroller::new(Story::default());
        assert_eq!(scroller.bootstrap(Instant::now()), None);
        assert!(scroller.observe(&[], Instant::now()).is_empty());
        assert!(!scroller.is_animating());
    }

    #[test]
    fn test_counters_start_once_per_section() {
        let mut scroller = three_sections();
        let t0 = Instant::now();
        scroller.bootstrap(t0);
        scroller.activate(0, t0);
        scroller.observe(&[1.0, 0.0, 0.0], t0);
        assert_eq!(scroller.running.len(), 1);
    }

    #[test]
    fn test_tick_writes_text_and_finishes() {
        let mut scroller = three_sections();
        let t0 = Instant::now();
        scroller.bootstrap(t0);

        assert!(scroller.tick(t0 + Duration::from_millis(100)));
        assert_ne!(scroller.counter_text(0, 0).as_deref(), Some("$42.5M"));

        assert!(!scroller.tick(t0 + Duration::from_millis(1500)));
        assert_eq!(scroller.counter_text(0, 0).as_deref(), Some("$42.5M"));
    }

    #[test]
    fn test_key_uses_scroll_position() {
        let scroller = three_sections();
        let outcome = scroller.handle_key(NavKey::ArrowDown, Viewport::new(0.0, 40.0));
        assert_eq!(outcome.request, Some(ScrollRequest::smooth(1)));
    }

    #[test]
    fn test_key_and_step_agree() {
        let scroller = three_sections();
        for top in [0.0, 40.0, 80.0] {
            let viewport = Viewport::new(top, 40.0);
            assert_eq!(
                scroller.handle_key(NavKey::PageDown, viewport),
                scroller.step(Direction::Forward, viewport)
            );
            assert_eq!(
                scroller.handle_key(NavKey::ArrowUp, viewport),
                scroller.step(Direction::Back, viewport)
            );
        }
        let last = scroller.step(Direction::Forward, Viewport::new(80.0, 40.0));
        assert_eq!(last.request, None);
        assert!(last.prevent_default);
    }

    #[test]
    fn test_click_nav() {
        let scroller = three_sections();
        assert_eq!(scroller.click_nav(2), Some(ScrollRequest::smooth(2)));
        assert_eq!(scroller.click_nav(9), None);
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let mut scroller = three_sections();
        scroller.activate(10, Instant::now());
        assert_eq!(scroller.current_index(), None);
    }
}
