mod nav_rail;
mod status_bar;
mod story;

pub use nav_rail::NavRailWidget;
pub use status_bar::StatusBarWidget;
pub use story::{section_lines, wrap_text, StoryWidget};
