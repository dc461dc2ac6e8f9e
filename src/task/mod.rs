pub mod item;
pub mod list;
pub mod store;

pub use item::{Task, TaskId};
pub use list::TaskList;
pub use store::{ListKind, RenameOutcome, TaskStore};
