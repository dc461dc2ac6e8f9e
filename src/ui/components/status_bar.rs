use crate::app::AppState;
use crate::keybindings::Action;
use crate::task::ListKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let left_content = format!(
        " {} | {} pending | {} done",
        state.mode,
        state.store.pending().len(),
        state.store.completed().len()
    );
    let hints = key_hints(state);
    let version_text = format!("v{VERSION}");

    // Format: "{left_content}  {hints} {padding} {version_text} "
    let used = left_content.chars().count() + hints.chars().count() + version_text.len() + 4;
    let padding = (area.width as usize).saturating_sub(used);

    let status_line = format!(
        "{left_content}  {hints} {:>padding$} {version_text} ",
        "",
        padding = padding
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);
    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn key_hints(state: &AppState) -> String {
    let hint = |action: Action, label: &str| {
        state
            .keybindings
            .key_for(action)
            .map(|key| format!("{key} {label}"))
    };

    let hints: Vec<Option<String>> = match state.viewing() {
        Some(kind) => {
            let mut hints = vec![hint(Action::Add, "add")];
            if kind == ListKind::Pending {
                hints.push(hint(Action::Edit, "edit"));
                hints.push(hint(Action::Complete, "done"));
            }
            hints.push(hint(Action::Delete, "delete"));
            hints.push(hint(Action::ToggleView, "switch"));
            hints.push(hint(Action::Quit, "quit"));
            hints
        }
        None => vec![
            Some("enter save".to_string()),
            Some("esc quit".to_string()),
        ],
    };

    hints.into_iter().flatten().collect::<Vec<_>>().join("  ")
}
