pub mod event;
pub mod input;
pub mod mode;
pub mod snapshot;
pub mod state;

pub use state::AppState;
