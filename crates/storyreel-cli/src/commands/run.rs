use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;

use storyreel_core::{AppConfig, Story};
use storyreel_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    load_theme,
    scroll::ScrollConfigExt,
    widgets::{NavRailWidget, StatusBarWidget, StoryWidget},
    App, AppLayout,
};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(config: &AppConfig, path: &Path) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let story = Story::load(path)?;
    info!(
        "Loaded '{}' with {} section(s)",
        path.display(),
        story.sections.len()
    );

    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let title = story
        .title
        .clone()
        .unwrap_or_else(|| "Storyreel".to_string());
    let mut app = App::new(story, config, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match setup_terminal(&title) {
        Ok(terminal) => terminal,
        Err(err) => {
            // Restore errors are dropped; the setup error is returned
            let _ = restore_terminal(&mut io::stdout());
            return Err(err);
        }
    };

    let result = event_loop(&mut terminal, &mut app, &keymap, config);

    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal(title: &str) -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leave raw mode and the alternate screen
fn restore_terminal<W: io::Write>(out: &mut W) -> Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

fn event_loop(terminal: &mut Tui, app: &mut App, keymap: &Keymap, config: &AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms),
        config.ui.scroll.animation_tick_duration(),
    );

    let size = terminal.size()?;
    let layout = AppLayout::new(Rect::new(0, 0, size.width, size.height), app.nav_width);
    app.set_viewport_height(layout.story.height);
    app.start(Instant::now());

    loop {
        let animating = app.update(Instant::now());

        terminal.draw(|frame| {
            let layout = AppLayout::new(frame.area(), app.nav_width);
            app.set_viewport_height(layout.story.height);

            NavRailWidget::render(frame, layout.nav, app);
            StoryWidget::render(frame, layout.story, app);
            StatusBarWidget::render(frame, layout.status, app);
        })?;

        if let Some(event) = event_handler.next(animating)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, keymap);
                    app.apply(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app.nav_area, app.scroller.nav().len());
                    app.apply(action, now);
                }
                AppEvent::Resize(width, height) => {
                    let layout = AppLayout::new(Rect::new(0, 0, width, height), app.nav_width);
                    app.set_viewport_height(layout.story.height);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen() {
        // Raw mode was never enabled, so only the escape sequences are written
        let mut out: Vec<u8> = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"));
    }
}
