use crate::app::AppState;
use crate::task::ListKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use std::ops::Range;

/// Bordered box (3 rows) plus one blank row below it.
const SLOT_HEIGHT: u16 = 4;
const BOX_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, state: &AppState, kind: ListKind, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let list = state.store.list(kind);
    if list.is_empty() {
        let empty = Paragraph::new(Line::from(format!(" No {kind} tasks")))
            .style(Style::default().fg(state.theme.placeholder));
        f.render_widget(empty, area);
        return;
    }

    let capacity = usize::from((area.height + 1) / SLOT_HEIGHT).max(1);
    let window = visible_window(list.cursor(), list.len(), capacity);
    let needs_scrollbar = list.len() > capacity;
    let box_width = if needs_scrollbar {
        area.width.saturating_sub(1)
    } else {
        area.width
    };

    for (row, index) in window.enumerate() {
        let task = &list.items()[index];
        let slot = Rect {
            x: area.x,
            y: area.y + row as u16 * SLOT_HEIGHT,
            width: box_width,
            height: BOX_HEIGHT,
        }
        .intersection(area);
        if slot.is_empty() {
            break;
        }

        let selected = index == list.cursor();
        let (border_style, body_style) = if selected {
            (
                Style::default().fg(state.theme.selected_border),
                Style::default()
                    .fg(state.theme.foreground)
                    .bg(state.theme.selected_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(state.theme.border),
                Style::default().fg(state.theme.foreground),
            )
        };

        let block = Block::bordered()
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .style(body_style);
        f.render_widget(Paragraph::new(task.label()).block(block), slot);
    }

    if needs_scrollbar {
        let mut scrollbar_state = ScrollbarState::new(list.len()).position(list.cursor());
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

/// Indices to draw so that `cursor` stays on screen, scrolling only as far
/// as needed to keep it in the last visible slot.
pub fn visible_window(cursor: usize, len: usize, capacity: usize) -> Range<usize> {
    if len == 0 || capacity == 0 {
        return 0..0;
    }
    let start = (cursor + 1).saturating_sub(capacity).min(len.saturating_sub(1));
    start..(start + capacity).min(len)
}
