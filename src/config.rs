//! Runtime configuration.
//!
//! The data directory comes from `ROFI_TODO_DATA_FOLDER` or defaults to
//! `~/.config/rofi-todo`. An optional `rc` file inside it holds `key=value` lines:
//!
//! ```text
//! # what a selected list line does: copy | done
//! selection=copy
//! # stdout format: lines | json
//! output=lines
//! alarm.command=alarma
//! clipboard.command=wl-copy
//! notify.command=notify-send
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ROFI_TODO_DATA_FOLDER";

/// Data directory relative to the home directory
pub const DEFAULT_DATA_SUBDIR: &str = ".config/rofi-todo";

pub const DB_FILE_NAME: &str = "rofi-todo.db";
pub const RC_FILE_NAME: &str = "rc";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cannot determine the home directory; set ROFI_TODO_DATA_FOLDER")]
    NoHome,
    #[error("rc line {line}: expected key=value")]
    MalformedLine { line: usize },
    #[error("rc line {line}: invalid value '{value}' for {key}")]
    InvalidValue { line: usize, key: String, value: String },
}

/// What the fallback selection action does with the task found in the selected line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Copy the task's canonical text to the clipboard
    #[default]
    Copy,
    /// Mark the task done
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub selection: SelectionMode,
    pub output: OutputFormat,
    pub alarm_command: String,
    pub clipboard_command: String,
    pub notify_command: String,
}

impl Config {
    /// Defaults for a given data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            selection: SelectionMode::default(),
            output: OutputFormat::default(),
            alarm_command: "alarma".to_string(),
            clipboard_command: "wl-copy".to_string(),
            notify_command: "notify-send".to_string(),
        }
    }

    /// Resolve the data directory from the environment and read the rc file if present
    pub fn load() -> Result<Self> {
        let data_dir = Self::resolve_data_dir(std::env::var_os(DATA_DIR_ENV), dirs::home_dir())?;
        let mut config = Self::with_data_dir(data_dir);

        let rc_path = config.rc_path();
        if rc_path.exists() {
            let contents = std::fs::read_to_string(&rc_path)
                .with_context(|| format!("Failed to read config: {}", rc_path.display()))?;
            config
                .apply_rc(&contents)
                .with_context(|| format!("Invalid config: {}", rc_path.display()))?;
        }

        log::debug!("Using data directory {}", config.data_dir.display());
        Ok(config)
    }

    /// An empty override counts as unset
    pub fn resolve_data_dir(
        env_value: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Result<PathBuf, ConfigError> {
        match env_value {
            Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            _ => home
                .map(|h| h.join(DEFAULT_DATA_SUBDIR))
                .ok_or(ConfigError::NoHome),
        }
    }

    /// Apply `key=value` lines on top of the current values
    pub fn apply_rc(&mut self, contents: &str) -> Result<(), ConfigError> {
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_no = idx + 1;
            let (key, value) = line
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .ok_or(ConfigError::MalformedLine { line: line_no })?;
            let invalid = || ConfigError::InvalidValue {
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "selection" => {
                    self.selection = match value {
                        "copy" => SelectionMode::Copy,
                        "done" => SelectionMode::Done,
                        _ => return Err(invalid()),
                    }
                }
                "output" => {
                    self.output = match value {
                        "lines" => OutputFormat::Lines,
                        "json" => OutputFormat::Json,
                        _ => return Err(invalid()),
                    }
                }
                "alarm.command" | "clipboard.command" | "notify.command" => {
                    if value.is_empty() {
                        return Err(invalid());
                    }
                    let slot = match key {
                        "alarm.command" => &mut self.alarm_command,
                        "clipboard.command" => &mut self.clipboard_command,
                        _ => &mut self.notify_command,
                    };
                    *slot = value.to_string();
                }
                _ => log::warn!("rc line {}: unknown key '{}' ignored", line_no, key),
            }
        }
        Ok(())
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn rc_path(&self) -> PathBuf {
        self.data_dir.join(RC_FILE_NAME)
    }
}
