//! Smooth scrolling for the story viewport
//!
//! - `config` - `ScrollConfig` helpers (durations, tick rate)
//! - `animation` - `ScrollAnimator`, the per-frame scroll position controller
//!
//! Easing and timing primitives live in `storyreel_core::animation` and are
//! shared with the counter animations.
//!
//! # Usage
//!
//! ```ignore
//! use storyreel_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//!
//! // Section jump
//! animator.scroll_to(2 * viewport_height, max_scroll, Instant::now());
//!
//! // In main loop, update each frame and get current position
//! let scroll = animator.update(max_scroll, Instant::now());
//! ```

pub mod animation;
pub mod config;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;
