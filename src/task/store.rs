use super::item::is_blank;
use super::{Task, TaskId, TaskList};
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Pending,
    Completed,
}

impl ListKind {
    pub fn other(self) -> Self {
        match self {
            ListKind::Pending => ListKind::Completed,
            ListKind::Completed => ListKind::Pending,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Pending => write!(f, "pending"),
            ListKind::Completed => write!(f, "completed"),
        }
    }
}

/// What [`TaskStore::rename_at_cursor`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    Removed(Task),
    Unchanged,
}

/// The pending and completed lists plus the id counter they share.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    pending: TaskList,
    completed: TaskList,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pre-existing lists. The counter continues after the
    /// highest seeded id, and never starts below the number of seeded tasks.
    pub fn with_seed(pending: TaskList, completed: TaskList) -> Self {
        let seeded = (pending.len() + completed.len()) as u64;
        let after_max = pending
            .items()
            .iter()
            .chain(completed.items())
            .map(|task| task.id.0 + 1)
            .max()
            .unwrap_or(0);

        Self {
            pending,
            completed,
            next_id: after_max.max(seeded),
        }
    }

    /// The demo lists the app starts with unless seeding is turned off.
    pub fn demo() -> Self {
        let pending = TaskList::with_items(
            vec![
                Task::new(2, "two"),
                Task::new(3, "three"),
                Task::new(4, "four"),
                Task::new(5, "five"),
            ],
            1,
        );
        let completed = TaskList::with_items(
            vec![Task::new(0, "completed-zero"), Task::new(1, "completed-one")],
            1,
        );
        Self::with_seed(pending, completed)
    }

    pub fn list(&self, kind: ListKind) -> &TaskList {
        match kind {
            ListKind::Pending => &self.pending,
            ListKind::Completed => &self.completed,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut TaskList {
        match kind {
            ListKind::Pending => &mut self.pending,
            ListKind::Completed => &mut self.completed,
        }
    }

    pub fn pending(&self) -> &TaskList {
        &self.pending
    }

    pub fn completed(&self) -> &TaskList {
        &self.completed
    }

    pub fn selected(&self, kind: ListKind) -> Option<&Task> {
        self.list(kind).selected()
    }

    pub fn next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }

    pub fn insert(&mut self, kind: ListKind, title: &str) -> Option<Task> {
        if is_blank(title) {
            trace!(list = %kind, "insert: blank title ignored");
            return None;
        }
        let task = Task::new(self.next_id, title);
        self.next_id += 1;
        self.list_mut(kind).push(task.clone());
        debug!(list = %kind, id = task.id.0, "inserted task");
        Some(task)
    }

    pub fn remove_at_cursor(&mut self, kind: ListKind) -> Option<Task> {
        let removed = self.list_mut(kind).remove_at_cursor();
        match &removed {
            Some(task) => debug!(list = %kind, id = task.id.0, "removed task"),
            None => trace!(list = %kind, "remove: list empty"),
        }
        removed
    }

    /// A blank title is a request to delete the selected task.
    pub fn rename_at_cursor(&mut self, kind: ListKind, title: &str) -> RenameOutcome {
        if is_blank(title) {
            return match self.remove_at_cursor(kind) {
                Some(task) => RenameOutcome::Removed(task),
                None => RenameOutcome::Unchanged,
            };
        }
        if self.list_mut(kind).set_selected_title(title.to_string()) {
            debug!(list = %kind, "renamed selected task");
            RenameOutcome::Renamed
        } else {
            RenameOutcome::Unchanged
        }
    }

    pub fn move_cursor(&mut self, kind: ListKind, delta: isize) {
        self.list_mut(kind).move_cursor(delta);
    }

    /// Move the selected pending task to the end of the completed list.
    pub fn complete(&mut self) -> bool {
        match self.pending.remove_at_cursor() {
            Some(task) => {
                debug!(id = task.id.0, "completed task");
                self.completed.push(task);
                true
            }
            None => false,
        }
    }
}
