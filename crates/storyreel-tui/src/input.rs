use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use storyreel_core::{Direction, NavKey};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Hardwired section key (arrows, page up/down)
    SectionKey(NavKey),
    /// Configurable next/previous section key
    Step(Direction),
    LineDown,
    LineUp,
    HalfPageDown,
    HalfPageUp,
    FirstSection,
    LastSection,
    /// Click on the nav entry at this index
    NavClick(usize),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Handle a mouse event given where the nav rail was drawn
///
/// Rail rows map one-to-one onto nav entries, starting at the rail's top
/// inner row. The wheel scrolls the story anywhere on screen.
pub fn handle_mouse_event(mouse: MouseEvent, nav_area: Rect, entry_count: usize) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::LineDown,
        MouseEventKind::ScrollUp => Action::LineUp,
        MouseEventKind::Down(MouseButton::Left) => {
            if !nav_area.contains(Position::new(mouse.column, mouse.row)) {
                return Action::None;
            }
            let row = (mouse.row - nav_area.y) as usize;
            if row < entry_count {
                Action::NavClick(row)
            } else {
                Action::None
            }
        }
        _ => Action::None,
    }
}
