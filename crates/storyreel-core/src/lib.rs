pub mod animation;
pub mod config;
pub mod error;
pub mod geometry;
pub mod nav;
pub mod navigator;
pub mod scroller;
pub mod story;
pub mod tracker;

pub use animation::{CounterAnimation, CounterFrame, EasingType};
pub use config::{AppConfig, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::Viewport;
pub use navigator::{Direction, KeyOutcome, NavKey, ScrollRequest};
pub use scroller::StoryScroller;
pub use story::{Counter, NavEntry, Section, Story};
