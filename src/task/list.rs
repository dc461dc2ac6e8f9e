use super::Task;

/// An ordered list of tasks with its own selection cursor.
///
/// The cursor always points at an existing item, or is 0 when the list is
/// empty. Every mutating method re-establishes that before returning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    items: Vec<Task>,
    cursor: usize,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Task>, cursor: usize) -> Self {
        let mut list = Self { items, cursor };
        list.clamp_cursor();
        list
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<&Task> {
        self.items.get(self.cursor)
    }

    pub fn push(&mut self, task: Task) {
        self.items.push(task);
    }

    pub fn remove_at_cursor(&mut self) -> Option<Task> {
        if self.items.is_empty() {
            return None;
        }
        let removed = self.items.remove(self.cursor);
        self.clamp_cursor();
        Some(removed)
    }

    /// Replace the selected title in place. Returns false on an empty list.
    pub fn set_selected_title(&mut self, title: String) -> bool {
        match self.items.get_mut(self.cursor) {
            Some(task) => {
                task.title = title;
                true
            }
            None => false,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Put the cursor on `index`, clamped into range.
    pub fn select(&mut self, index: usize) {
        self.cursor = index;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.items.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.items.len() - 1);
        }
    }
}
