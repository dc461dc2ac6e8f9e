pub mod components;
pub mod events;
pub mod spinner;
pub mod theme;

use crate::app::{AppState, event::handle_key_event};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use events::{AppEvent, EventSource};
use ratatui::{Terminal, backend::CrosstermBackend};
use spinner::Spinner;
use std::io::{self, Write};
use std::time::Duration;

/// Restores the terminal on every exit path, including `?` and panics.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(mut state: AppState, tick_rate: Duration) -> Result<AppState> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state, tick_rate);
    terminal.show_cursor()?;

    result.map(|()| state)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventSource::new(tick_rate);
    let mut spinner = Spinner::default();

    loop {
        terminal.draw(|f| {
            components::render(f, state, &spinner);
        })?;

        match events.next()? {
            AppEvent::Key(key) => handle_key_event(key, state)?,
            AppEvent::Tick => spinner.tick(),
            AppEvent::Resize => {}
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
