mod app;
mod cli;
mod ui;

use tasks_tui::config;
use tasks_tui::keybindings;
use tasks_tui::task;
use tasks_tui::utils;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use keybindings::KeybindingCache;
use std::fs;
use std::io::Write;
use std::panic;
use std::time::Duration;
use task::TaskStore;
use ui::theme::Theme;
use utils::paths::{get_crash_log_path, get_logs_dir};

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {timestamp} ===\n");

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {message}\n"));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {message}\n"));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n\n",
                std::backtrace::Backtrace::force_capture()
            ));

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI.
///
/// Logs go to `<data dir>/logs/tasks.log`, rolled daily. Level comes from
/// `RUST_LOG` (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {e}");
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "tasks.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    if cli.empty {
        config.seed_tasks = false;
    }
    Ok(config)
}

fn build_state(config: &Config) -> app::AppState {
    let store = if config.seed_tasks {
        TaskStore::demo()
    } else {
        TaskStore::new()
    };
    app::AppState::new(
        store,
        Theme::from_config(config),
        KeybindingCache::from_config(&config.keybindings),
    )
}

fn main() -> Result<()> {
    install_crash_handler();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Show { view }) => {
            let mut state = build_state(&config);
            state.mode = app::mode::Mode::Browsing(view.into());
            print!("{}", app::snapshot::render_text(&state));
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!("tasks starting");

            let state = build_state(&config);
            let tick_rate = Duration::from_millis(config.tick_rate_ms);
            let state = ui::run_tui(state, tick_rate)?;

            tracing::info!(
                pending = state.store.pending().len(),
                completed = state.store.completed().len(),
                "tasks exiting gracefully"
            );
        }
    }

    Ok(())
}
