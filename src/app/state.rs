use super::input::InputBuffer;
use super::mode::Mode;
use crate::keybindings::KeybindingCache;
use crate::task::{ListKind, TaskStore};
use crate::ui::theme::Theme;

pub struct AppState {
    pub store: TaskStore,
    pub mode: Mode,
    /// Scratch text for `Adding`/`Editing`; empty otherwise.
    pub input: InputBuffer,
    pub should_quit: bool,
    pub theme: Theme,
    pub keybindings: KeybindingCache,
}

impl AppState {
    pub fn new(store: TaskStore, theme: Theme, keybindings: KeybindingCache) -> Self {
        Self {
            store,
            mode: Mode::default(),
            input: InputBuffer::new(),
            should_quit: false,
            theme,
            keybindings,
        }
    }

    /// The list on screen, if a list is on screen at all.
    pub fn viewing(&self) -> Option<ListKind> {
        match self.mode {
            Mode::Browsing(kind) => Some(kind),
            Mode::Adding | Mode::Editing(_) => None,
        }
    }
}
