//! Scroll animation controller for the story viewport

use std::time::{Duration, Instant};

use storyreel_core::animation::timing::{is_complete, lerp_u16, progress};
use storyreel_core::EasingType;

use super::config::{ScrollConfig, ScrollConfigExt};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_to()` for section jumps or `scroll_by()` for free scrolling,
/// then `update()` each frame to get the current interpolated position.
/// Scroll requests are never cancelled by the controller itself; a new
/// request retargets from wherever the viewport currently is.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: u16,
    /// Pending scroll delta for batching multiple scroll events
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Get the target scroll position (final position after animation)
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    /// Get the current interpolated scroll position
    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Start a scroll animation to a target position
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    /// An animation in progress is replaced, starting from the currently
    /// visible position.
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;
        if from == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta amount (positive = down, negative = up)
    ///
    /// Multiple scroll events within the same frame are batched together
    /// for smoother handling of rapid key presses and wheel bursts.
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let new_scroll = (self.current_scroll as i32 + delta)
                .clamp(0, max_scroll as i32) as u16;
            self.current_scroll = new_scroll;
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Scroll down by configured line count
    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.line_step(), max_scroll);
    }

    /// Scroll up by configured line count
    pub fn scroll_up(&mut self, max_scroll: u16) {
        self.scroll_by(-self.line_step(), max_scroll);
    }

    fn line_step(&self) -> i32 {
        if self.config.is_smooth() {
            1 // Smooth scroll moves 1 line at a time for fine control
        } else {
            self.config.scroll_lines.max(1) as i32
        }
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    /// Update animation state and return current scroll position
    ///
    /// Call this every frame to advance the animation.
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = self.target_scroll();
            let new_target = (target as i32 + self.pending_delta)
                .clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if new_target != self.current_scroll {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current_scroll,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, now, anim.duration) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, now, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased_t).min(max_scroll);
            }
        }

        self.current_scroll
    }

    /// Reset to initial state
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_scroll = 0;
        self.pending_delta = 0;
    }
}
