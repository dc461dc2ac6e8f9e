pub mod prompt;
pub mod status_bar;
pub mod task_list;

use crate::app::AppState;
use crate::app::mode::Mode;
use crate::app::snapshot::{ADD_PROMPT, EDIT_PROMPT};
use crate::ui::spinner::Spinner;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Draw one frame from a read-only view of the state.
pub fn render(f: &mut Frame, state: &AppState, spinner: &Spinner) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(state.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Spinner + mode header
            Constraint::Min(1),    // List or prompt
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(f, state, spinner, chunks[0]);

    match state.mode {
        Mode::Browsing(kind) => task_list::render(f, state, kind, chunks[1]),
        Mode::Adding => prompt::render(f, state, ADD_PROMPT, chunks[1]),
        Mode::Editing(_) => prompt::render(f, state, EDIT_PROMPT, chunks[1]),
    }

    status_bar::render(f, state, chunks[2]);
}

fn render_header(f: &mut Frame, state: &AppState, spinner: &Spinner, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner.current()),
            Style::default().fg(state.theme.spinner),
        ),
        Span::styled(
            format!("{} mode", state.mode),
            Style::default()
                .fg(state.theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), area);
}
