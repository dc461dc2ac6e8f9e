use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

pub const PLACEHOLDER: &str = "your task goes here";

pub fn render(f: &mut Frame, state: &AppState, label: &str, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let label = format!(" {label} ");
    let text_style = Style::default().fg(state.theme.foreground);
    let body = if state.input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(state.theme.placeholder))
    } else {
        Span::styled(state.input.text(), text_style)
    };

    let line = Line::from(vec![Span::styled(label.as_str(), text_style), body]);
    f.render_widget(Paragraph::new(line), area);

    let (before, _) = state.input.split_at_cursor();
    let offset = (label.width() + before.width()) as u16;
    let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
    f.set_cursor_position((x, area.y));
}
