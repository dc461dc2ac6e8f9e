//! Key strings from the config file resolved into [`Action`]s.
//!
//! Browse-mode bindings are user-configurable. Text-entry bindings are fixed
//! so that every printable key can reach the input buffer.

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Browsing
    ToggleView,
    MoveUp,
    MoveDown,
    Complete,
    Delete,
    Add,
    Edit,
    Quit,
    // Text entry
    InputConfirm,
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputWordLeft,
    InputWordRight,
    InputHome,
    InputEnd,
    InputDeleteToStart,
    InputDeleteToEnd,
    InputDeleteWordBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }.normalized()
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }

    /// Terminals disagree on whether an uppercase char carries SHIFT; drop it
    /// so `"A"` matches either way.
    fn normalized(mut self) -> Self {
        if let KeyCode::Char(_) = self.code {
            self.modifiers.remove(KeyModifiers::SHIFT);
        }
        self
    }

    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow!("empty key string"));
        }

        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            let lower = rest.to_ascii_lowercase();
            let (flag, len) = if lower.starts_with("ctrl+") && rest.len() > 5 {
                (KeyModifiers::CONTROL, 5)
            } else if lower.starts_with("alt+") && rest.len() > 4 {
                (KeyModifiers::ALT, 4)
            } else if lower.starts_with("shift+") && rest.len() > 6 {
                (KeyModifiers::SHIFT, 6)
            } else {
                break;
            };
            modifiers |= flag;
            rest = &rest[len..];
        }

        let code = match rest.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "space" => KeyCode::Char(' '),
            _ => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(anyhow!("unknown key: {s}")),
                }
            }
        };

        Ok(Self::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::PageUp => write!(f, "pageup"),
            KeyCode::PageDown => write!(f, "pagedown"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Delete => write!(f, "delete"),
            other => write!(f, "{other:?}"),
        }
    }
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// `[keybindings]` table of the config file. A listed action replaces that
/// action's defaults entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub toggle_view: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub complete: Vec<String>,
    pub delete: Vec<String>,
    pub add: Vec<String>,
    pub edit: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_view: keys(&["s"]),
            up: keys(&["up", "left"]),
            down: keys(&["down", "right"]),
            complete: keys(&["enter"]),
            delete: keys(&["d"]),
            add: keys(&["a"]),
            edit: keys(&["e"]),
            quit: keys(&["q", "esc", "ctrl+c"]),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(Action, &[String]); 8] {
        [
            (Action::ToggleView, self.toggle_view.as_slice()),
            (Action::MoveUp, self.up.as_slice()),
            (Action::MoveDown, self.down.as_slice()),
            (Action::Complete, self.complete.as_slice()),
            (Action::Delete, self.delete.as_slice()),
            (Action::Add, self.add.as_slice()),
            (Action::Edit, self.edit.as_slice()),
            (Action::Quit, self.quit.as_slice()),
        ]
    }
}

/// Resolved lookup tables built once at startup.
#[derive(Debug, Clone)]
pub struct KeybindingCache {
    browse: HashMap<KeyBinding, Action>,
    text: HashMap<KeyBinding, Action>,
}

impl Default for KeybindingCache {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl KeybindingCache {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut browse = HashMap::new();
        for (action, key_strings) in config.entries() {
            for key in key_strings {
                match KeyBinding::parse(key) {
                    Ok(binding) => {
                        if let Some(previous) = browse.insert(binding, action) {
                            warn!(key = %binding, ?previous, ?action, "key bound twice, last one wins");
                        }
                    }
                    Err(e) => warn!("Skipping key binding for {action:?}: {e}"),
                }
            }
        }

        Self {
            browse,
            text: text_bindings(),
        }
    }

    pub fn get_browse_action(&self, key: &KeyEvent) -> Option<Action> {
        self.browse.get(&KeyBinding::from_event(key)).copied()
    }

    pub fn get_text_action(&self, key: &KeyEvent) -> Option<Action> {
        self.text.get(&KeyBinding::from_event(key)).copied()
    }

    /// First configured key for `action`, used for on-screen hints.
    pub fn key_for(&self, action: Action) -> Option<KeyBinding> {
        let mut bound: Vec<KeyBinding> = self
            .browse
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        bound.sort_by_key(|k| {
            let name = k.to_string();
            (name.len(), name)
        });
        bound.into_iter().next()
    }
}

fn text_bindings() -> HashMap<KeyBinding, Action> {
    let none = KeyModifiers::NONE;
    let ctrl = KeyModifiers::CONTROL;
    let alt = KeyModifiers::ALT;
    [
        (KeyCode::Enter, none, Action::InputConfirm),
        (KeyCode::Esc, none, Action::Quit),
        (KeyCode::Char('c'), ctrl, Action::Quit),
        (KeyCode::Backspace, none, Action::InputBackspace),
        (KeyCode::Char('h'), ctrl, Action::InputBackspace),
        (KeyCode::Delete, none, Action::InputDelete),
        (KeyCode::Char('d'), ctrl, Action::InputDelete),
        (KeyCode::Left, none, Action::InputLeft),
        (KeyCode::Char('b'), ctrl, Action::InputLeft),
        (KeyCode::Right, none, Action::InputRight),
        (KeyCode::Char('f'), ctrl, Action::InputRight),
        (KeyCode::Left, ctrl, Action::InputWordLeft),
        (KeyCode::Left, alt, Action::InputWordLeft),
        (KeyCode::Char('b'), alt, Action::InputWordLeft),
        (KeyCode::Right, ctrl, Action::InputWordRight),
        (KeyCode::Right, alt, Action::InputWordRight),
        (KeyCode::Char('f'), alt, Action::InputWordRight),
        (KeyCode::Home, none, Action::InputHome),
        (KeyCode::Char('a'), ctrl, Action::InputHome),
        (KeyCode::End, none, Action::InputEnd),
        (KeyCode::Char('e'), ctrl, Action::InputEnd),
        (KeyCode::Char('u'), ctrl, Action::InputDeleteToStart),
        (KeyCode::Char('k'), ctrl, Action::InputDeleteToEnd),
        (KeyCode::Char('w'), ctrl, Action::InputDeleteWordBack),
        (KeyCode::Backspace, alt, Action::InputDeleteWordBack),
    ]
    .into_iter()
    .map(|(code, modifiers, action)| (KeyBinding::new(code, modifiers), action))
    .collect()
}
