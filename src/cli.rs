use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::task::ListKind;

#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(about = "A terminal task manager with pending and completed lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the data directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with empty lists instead of the demo tasks
    #[arg(long, global = true)]
    pub empty: bool,

    /// Theme to use (default, dark, light)
    #[arg(long, global = true)]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the starting lists as plain text and exit
    Show {
        #[arg(long, value_enum, default_value_t = View::Pending)]
        view: View,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Pending,
    Completed,
}

impl From<View> for ListKind {
    fn from(view: View) -> Self {
        match view {
            View::Pending => ListKind::Pending,
            View::Completed => ListKind::Completed,
        }
    }
}
