// Input validation errors for selections and their values

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("No action value found")]
    NoActionValue,
    #[error("Invalid task ID: '{0}'. Task ID must be a positive number.")]
    InvalidTaskId(String),
    #[error("Invalid priority: '{0}'. Priority must be a number.")]
    InvalidPriority(String),
    #[error("No priority given. Expected '<id> <priority>'.")]
    MissingPriority,
    #[error("No text given. Expected '<id> <text>'.")]
    MissingText,
    #[error("No task ID found in selection: '{0}'")]
    NoIdInSelection(String),
    #[error("Task {0} not found")]
    TaskNotFound(i64),
}

/// Validate that a task ID is valid (positive integer)
pub fn validate_task_id(id_str: &str) -> Result<i64, CommandError> {
    match id_str.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CommandError::InvalidTaskId(id_str.to_string())),
    }
}

/// Split `"<id> <rest>"` at the first whitespace. The rest is returned untrimmed and may be empty.
pub fn split_id_and_value(value: &str) -> Result<(i64, &str), CommandError> {
    let (id_str, rest) = value
        .split_once(char::is_whitespace)
        .unwrap_or((value, ""));
    let id = validate_task_id(id_str)?;
    Ok((id, rest))
}
