use crate::task::{ListKind, TaskId};
use std::fmt;

/// Exactly one is active at a time. `Editing` carries the task being renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing(ListKind),
    Adding,
    Editing(TaskId),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Browsing(ListKind::Pending)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Browsing(ListKind::Pending) => write!(f, "PENDING"),
            Mode::Browsing(ListKind::Completed) => write!(f, "COMPLETED"),
            Mode::Adding => write!(f, "ADD"),
            Mode::Editing(_) => write!(f, "EDIT"),
        }
    }
}
