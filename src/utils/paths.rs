use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

/// Overrides the data directory; mainly for tests and throwaway sessions.
pub const HOME_ENV_VAR: &str = "TASKS_TUI_HOME";

pub fn get_tasks_tui_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".tasks-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_tasks_tui_dir()?.join("config.toml"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    Ok(get_tasks_tui_dir()?.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    Ok(get_tasks_tui_dir()?.join("crash.log"))
}
