use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    /// Poll timeout while idle
    tick_rate: Duration,
    /// Poll timeout while scroll or counter animations are running
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, animation_tick: Duration) -> Self {
        Self {
            tick_rate,
            animation_tick: animation_tick.min(tick_rate),
        }
    }

    /// Poll timeout for the next iteration
    pub fn timeout(&self, animating: bool) -> Duration {
        if animating {
            self.animation_tick
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.timeout(animating))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Poll timed out; advance animations
    Tick,
}
