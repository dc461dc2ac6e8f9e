use super::mode::Mode;
use super::state::AppState;
use std::fmt::Write;

pub const ADD_PROMPT: &str = "Name the task:";
pub const EDIT_PROMPT: &str = "Edit the task:";

/// Plain-text view of the current state: a header naming the mode, then
/// either the viewed list (selection marked with `>`) or the input prompt.
pub fn render_text(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} mode", state.mode);
    out.push('\n');

    match state.mode {
        Mode::Browsing(kind) => {
            let list = state.store.list(kind);
            if list.is_empty() {
                let _ = writeln!(out, "  (no {kind} tasks)");
            }
            for (i, task) in list.items().iter().enumerate() {
                let marker = if i == list.cursor() { '>' } else { ' ' };
                let _ = writeln!(out, "{marker} {}", task.label());
            }
        }
        Mode::Adding => {
            let _ = writeln!(out, "{ADD_PROMPT} {}", state.input.text());
        }
        Mode::Editing(_) => {
            let _ = writeln!(out, "{EDIT_PROMPT} {}", state.input.text());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::KeybindingCache;
    use crate::task::{ListKind, TaskId, TaskStore};
    use crate::ui::theme::Theme;
    use pretty_assertions::assert_eq;

    fn demo_state() -> AppState {
        AppState::new(TaskStore::demo(), Theme::default(), KeybindingCache::default())
    }

    #[test]
    fn test_render_pending() {
        let state = demo_state();
        assert_eq!(
            render_text(&state),
            "PENDING mode\n\n  #2 two\n> #3 three\n  #4 four\n  #5 five\n"
        );
    }

    #[test]
    fn test_render_completed() {
        let mut state = demo_state();
        state.mode = Mode::Browsing(ListKind::Completed);
        assert_eq!(
            render_text(&state),
            "COMPLETED mode\n\n  #0 completed-zero\n> #1 completed-one\n"
        );
    }

    #[test]
    fn test_render_empty_list() {
        let state = AppState::new(TaskStore::new(), Theme::default(), KeybindingCache::default());
        assert_eq!(render_text(&state), "PENDING mode\n\n  (no pending tasks)\n");
    }

    #[test]
    fn test_render_prompts() {
        let mut state = demo_state();
        state.mode = Mode::Adding;
        state.input.set("milk");
        assert_eq!(render_text(&state), "ADD mode\n\nName the task: milk\n");

        state.mode = Mode::Editing(TaskId(3));
        state.input.set("three");
        assert_eq!(render_text(&state), "EDIT mode\n\nEdit the task: three\n");
    }
}
