//! One-shot counter tween
//!
//! A counter animates from zero to its parsed target over a fixed duration
//! with an ease-out-cubic curve. The host polls `tick(now)` once per frame;
//! there is no cancellation and no restart.

use std::time::{Duration, Instant};

use super::easing::cubic_ease_out;
use super::timing::progress;
use crate::story::literal::format_fixed;
use crate::story::Counter;

/// Time budget of every counter animation
pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);

/// Output of one animation frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    /// Text to display for this frame
    pub text: String,
    /// True on the final frame and every frame after it
    pub done: bool,
}

/// Running state of one counter's animation
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    start: Instant,
    target: f64,
    decimals: usize,
    prefix: String,
    suffix: String,
    duration: Duration,
    done: bool,
}

impl CounterAnimation {
    /// Capture the counter's target and formatting and start the clock at `now`
    pub fn start(counter: &Counter, now: Instant) -> Self {
        Self {
            start: now,
            target: counter.target(),
            decimals: counter.decimals(),
            prefix: counter.prefix.clone(),
            suffix: counter.suffix.clone(),
            duration: COUNTER_DURATION,
            done: false,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Advance to `now` and render the frame
    ///
    /// Progress is linear in elapsed time and clamped to 1. When it reaches
    /// 1 the text snaps to the exact target instead of the eased product.
    pub fn tick(&mut self, now: Instant) -> CounterFrame {
        let p = if self.done {
            1.0
        } else {
            progress(self.start, now, self.duration)
        };

        if p >= 1.0 {
            self.done = true;
            return CounterFrame {
                text: self.render(self.target),
                done: true,
            };
        }

        CounterFrame {
            text: self.render(self.target * cubic_ease_out(p)),
            done: false,
        }
    }

    fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_fixed(value, self.decimals),
            self.suffix
        )
    }
}
