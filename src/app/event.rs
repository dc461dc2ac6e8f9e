use super::mode::Mode;
use super::state::AppState;
use crate::keybindings::Action;
use crate::task::{ListKind, RenameOutcome, TaskId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match state.mode {
        Mode::Browsing(kind) => handle_browsing_mode(key, kind, state),
        Mode::Adding => handle_adding_mode(key, state),
        Mode::Editing(id) => handle_editing_mode(key, id, state),
    }
    Ok(())
}

fn handle_browsing_mode(key: KeyEvent, kind: ListKind, state: &mut AppState) {
    let Some(action) = state.keybindings.get_browse_action(&key) else {
        return;
    };

    match action {
        Action::Quit => quit(state),
        Action::ToggleView => {
            state.mode = Mode::Browsing(kind.other());
            debug!(from = %kind, to = %kind.other(), "switched view");
        }
        Action::MoveUp => state.store.move_cursor(kind, -1),
        Action::MoveDown => state.store.move_cursor(kind, 1),
        Action::Complete => {
            // Completed tasks have nowhere further to go.
            if kind == ListKind::Pending {
                state.store.complete();
            }
        }
        Action::Delete => {
            state.store.remove_at_cursor(kind);
        }
        Action::Add => {
            state.input.clear();
            state.mode = Mode::Adding;
        }
        Action::Edit => enter_edit_mode(kind, state),
        _ => {}
    }
}

fn enter_edit_mode(kind: ListKind, state: &mut AppState) {
    if kind != ListKind::Pending {
        return;
    }
    if let Some(task) = state.store.selected(ListKind::Pending) {
        state.input.set(&task.title);
        state.mode = Mode::Editing(task.id);
    }
}

fn handle_adding_mode(key: KeyEvent, state: &mut AppState) {
    if edit_input(key, state) {
        return;
    }

    let title = state.input.take();
    if let Some(task) = state.store.insert(ListKind::Pending, &title) {
        info!(id = task.id.0, "added task");
    }
    state.mode = Mode::Browsing(ListKind::Pending);
}

fn handle_editing_mode(key: KeyEvent, id: TaskId, state: &mut AppState) {
    if edit_input(key, state) {
        return;
    }

    let title = state.input.take();
    let selected = state.store.selected(ListKind::Pending).map(|task| task.id);
    if selected == Some(id) {
        match state.store.rename_at_cursor(ListKind::Pending, &title) {
            RenameOutcome::Renamed => info!(id = id.0, "renamed task"),
            RenameOutcome::Removed(_) => info!(id = id.0, "deleted task by clearing its title"),
            RenameOutcome::Unchanged => {}
        }
    } else {
        warn!(id = id.0, ?selected, "edit target no longer selected, dropping edit");
    }
    state.mode = Mode::Browsing(ListKind::Pending);
}

/// Apply a line-editing key to the scratch buffer. Returns false when the
/// key is the confirm key and the caller should commit.
fn edit_input(key: KeyEvent, state: &mut AppState) -> bool {
    let action = state.keybindings.get_text_action(&key);
    match action {
        Some(Action::InputConfirm) => return false,
        Some(Action::Quit) => {
            quit(state);
            return true;
        }
        _ => {}
    }

    let input = &mut state.input;
    match action {
        Some(Action::InputBackspace) => input.backspace(),
        Some(Action::InputDelete) => input.delete(),
        Some(Action::InputLeft) => input.move_left(),
        Some(Action::InputRight) => input.move_right(),
        Some(Action::InputWordLeft) => input.move_word_left(),
        Some(Action::InputWordRight) => input.move_word_right(),
        Some(Action::InputHome) => input.move_home(),
        Some(Action::InputEnd) => input.move_end(),
        Some(Action::InputDeleteToStart) => input.delete_to_start(),
        Some(Action::InputDeleteToEnd) => input.delete_to_end(),
        Some(Action::InputDeleteWordBack) => input.delete_word_back(),
        Some(_) => {}
        None => {
            if let KeyCode::Char(c) = key.code
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                input.insert_char(c);
            }
        }
    }
    true
}

fn quit(state: &mut AppState) {
    debug!(mode = %state.mode, "quit requested");
    state.should_quit = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybindings::{KeybindingCache, KeybindingsConfig};
    use crate::task::{Task, TaskList, TaskStore};
    use crate::ui::theme::Theme;
    use pretty_assertions::assert_eq;

    fn state_with(store: TaskStore) -> AppState {
        AppState::new(store, Theme::default(), KeybindingCache::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(key(code), state).unwrap();
    }

    fn ctrl(state: &mut AppState, c: char) {
        handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), state).unwrap();
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn pending(state: &AppState) -> Vec<Task> {
        state.store.pending().items().to_vec()
    }

    /// pending = [#2 two, #3 three] with the counter already at 6.
    fn two_pending_tasks() -> AppState {
        let mut state = state_with(TaskStore::demo());
        state.store.move_cursor(ListKind::Pending, 2);
        state.store.remove_at_cursor(ListKind::Pending);
        state.store.remove_at_cursor(ListKind::Pending);
        state.store.move_cursor(ListKind::Pending, -5);
        state
    }

    #[test]
    fn test_initial_mode_is_browsing_pending() {
        let state = state_with(TaskStore::new());
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
        assert!(!state.should_quit);
    }

    #[test]
    fn test_add_scenario_continues_counter() {
        let mut state = two_pending_tasks();
        assert_eq!(pending(&state), vec![Task::new(2, "two"), Task::new(3, "three")]);
        assert_eq!(state.store.pending().cursor(), 0);

        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.mode, Mode::Adding);
        type_text(&mut state, "six");
        press(&mut state, KeyCode::Enter);

        assert_eq!(
            pending(&state),
            vec![Task::new(2, "two"), Task::new(3, "three"), Task::new(6, "six")]
        );
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_complete_scenario_single_task() {
        let pending = TaskList::with_items(vec![Task::new(2, "two")], 0);
        let mut state = state_with(TaskStore::with_seed(pending, TaskList::new()));

        press(&mut state, KeyCode::Enter);

        assert!(state.store.pending().is_empty());
        assert_eq!(state.store.pending().cursor(), 0);
        assert_eq!(state.store.completed().items(), &[Task::new(2, "two")]);
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_edit_scenario_clear_buffer_deletes_task() {
        let mut state = two_pending_tasks();
        press(&mut state, KeyCode::Down);
        assert_eq!(state.store.pending().cursor(), 1);

        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.mode, Mode::Editing(TaskId(3)));
        assert_eq!(state.input.text(), "three");

        ctrl(&mut state, 'u');
        assert!(state.input.is_empty());
        press(&mut state, KeyCode::Enter);

        assert_eq!(pending(&state), vec![Task::new(2, "two")]);
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_edit_renames_in_place() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('e'));
        type_text(&mut state, "!!");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.pending().items()[1], Task::new(3, "three!!"));
        assert_eq!(state.store.pending().len(), 4);
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_edit_with_whitespace_only_deletes() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('e'));
        ctrl(&mut state, 'u');
        type_text(&mut state, "   ");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.pending().len(), 3);
        assert!(state.store.pending().items().iter().all(|t| t.id != TaskId(3)));
    }

    #[test]
    fn test_edit_on_empty_pending_stays_browsing() {
        let mut state = state_with(TaskStore::new());
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_edit_disallowed_in_completed() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Completed));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_enter_on_completed_is_noop() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.pending().len(), 4);
        assert_eq!(state.store.completed().len(), 2);
        assert_eq!(state.mode, Mode::Browsing(ListKind::Completed));
    }

    #[test]
    fn test_toggle_view_round_trip() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Completed));
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_navigation_only_moves_viewed_list() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.store.pending().cursor(), 3);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.store.pending().cursor(), 3);

        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Up);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.store.completed().cursor(), 0);
        assert_eq!(state.store.pending().cursor(), 3);
    }

    #[test]
    fn test_delete_in_each_view() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.store.pending().len(), 3);

        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('d'));
        assert!(state.store.completed().is_empty());
        assert_eq!(state.mode, Mode::Browsing(ListKind::Completed));
    }

    #[test]
    fn test_add_from_completed_returns_to_pending() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "new");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
        assert_eq!(state.store.pending().items().last(), Some(&Task::new(6, "new")));
        assert_eq!(state.store.completed().len(), 2);
    }

    #[test]
    fn test_add_blank_discards() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "  ");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.pending().len(), 4);
        assert_eq!(state.store.next_id(), TaskId(6));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_add_clears_previous_scratch() {
        let mut state = state_with(TaskStore::demo());
        state.input.set("leftover");
        press(&mut state, KeyCode::Char('a'));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_q_is_text_while_adding() {
        let mut state = state_with(TaskStore::new());
        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "quiz");
        assert!(!state.should_quit);
        assert_eq!(state.input.text(), "quiz");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.pending().items(), &[Task::new(0, "quiz")]);
    }

    #[test]
    fn test_browse_keys_are_text_while_editing() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('e'));
        type_text(&mut state, " sad");
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.input.text(), "three sd");
        assert_eq!(state.mode, Mode::Editing(TaskId(3)));
        assert_eq!(state.store.pending().len(), 4);
    }

    #[test]
    fn test_quit_from_browsing() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut state = state_with(TaskStore::demo());
            press(&mut state, code);
            assert!(state.should_quit);
        }
        let mut state = state_with(TaskStore::demo());
        ctrl(&mut state, 'c');
        assert!(state.should_quit);
    }

    #[test]
    fn test_quit_from_text_modes() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('a'));
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);

        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('e'));
        ctrl(&mut state, 'c');
        assert!(state.should_quit);
        assert_eq!(state.store.pending().items()[1], Task::new(3, "three"));
    }

    #[test]
    fn test_control_chars_not_inserted() {
        let mut state = state_with(TaskStore::new());
        press(&mut state, KeyCode::Char('a'));
        ctrl(&mut state, 'z');
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_stale_edit_target_is_dropped() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('e'));
        // Simulate the selection drifting away from the edited task.
        state.store.move_cursor(ListKind::Pending, 1);
        type_text(&mut state, "x");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.pending().items()[1], Task::new(3, "three"));
        assert_eq!(state.store.pending().items()[2], Task::new(4, "four"));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
    }

    #[test]
    fn test_custom_bindings_drive_controller() {
        let config = KeybindingsConfig {
            add: vec!["n".to_string()],
            ..KeybindingsConfig::default()
        };
        let mut state = AppState::new(
            TaskStore::new(),
            Theme::default(),
            KeybindingCache::from_config(&config),
        );

        press(&mut state, KeyCode::Char('a'));
        assert_eq!(state.mode, Mode::Browsing(ListKind::Pending));
        press(&mut state, KeyCode::Char('n'));
        assert_eq!(state.mode, Mode::Adding);
    }

    #[test]
    fn test_ids_not_reused_through_controller() {
        let mut state = state_with(TaskStore::demo());
        press(&mut state, KeyCode::Char('d'));
        assert!(state.store.pending().items().iter().all(|t| t.id != TaskId(3)));

        press(&mut state, KeyCode::Char('a'));
        type_text(&mut state, "again");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.store.pending().items().last().map(|t| t.id), Some(TaskId(6)));
    }
}
