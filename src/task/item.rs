use std::fmt;

/// Identifier handed out by [`TaskStore`](super::TaskStore). Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: TaskId(id),
            title: title.into(),
        }
    }

    /// `#<id> <title>`, the form shown in every list view.
    pub fn label(&self) -> String {
        format!("{} {}", self.id, self.title)
    }
}

pub fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}
