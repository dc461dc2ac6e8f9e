pub mod config;
pub mod keybindings;
pub mod task;
pub mod utils;
