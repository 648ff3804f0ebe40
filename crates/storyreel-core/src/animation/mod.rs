//! Frame-driven animation primitives
//!
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - Progress and interpolation helpers over explicit timestamps
//! - `counter` - One-shot counter tween polled with `tick(now)`
//!
//! Nothing here reads the clock. Callers pass `now` in, which keeps every
//! animation reproducible under test.

pub mod counter;
pub mod easing;
pub mod timing;

pub use counter::{CounterAnimation, CounterFrame, COUNTER_DURATION};
pub use easing::EasingType;
