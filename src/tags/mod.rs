//! Inline tag grammar for task titles.
//!
//! A tag is written `key:value:key` anywhere in the title, e.g. `p:2:p Pay rent` or
//! `a:2024-06-01 13:53,Call mom:a Call mom`. Extraction removes the tag expression from the
//! title and hands back its raw value.
//!
//! Matching is a plain substring search: the first `key:` in the text opens the tag, even when
//! it sits inside another word (`Map:` contains `p:`). Only the first tag expression is removed.

mod metadata;

use thiserror::Error;

use crate::effects::EffectError;

/// Tag key for the task priority
pub const PRIORITY_TAG: &str = "p";

/// Tag key for the alarm (`time[,text]`)
pub const ALARM_TAG: &str = "a";

#[derive(Debug, Error)]
pub enum TagError {
    #[error("Tag {0} not closed")]
    NotClosed(String),
    #[error("Tag {0} has no value")]
    NoValue(String),
    #[error("Priority must be an integer, got '{0}'")]
    InvalidPriority(String),
    #[error("Invalid alarm time '{value}': {reason}")]
    InvalidAlarmTime { value: String, reason: String },
    #[error("Task title is empty once tags are removed")]
    EmptyTitle,
    #[error("Failed to schedule alarm: {0}")]
    Alarm(#[from] EffectError),
}

/// Extract the value of `tag` from `text`.
///
/// Returns the text with the first tag expression removed (and trimmed) plus the raw value.
/// A missing tag is not an error: the text comes back untouched with an empty value.
pub fn extract_tag(text: &str, tag: &str) -> Result<(String, String), TagError> {
    let open = format!("{}:", tag);
    let close = format!(":{}", tag);

    let Some(open_idx) = text.find(&open) else {
        return Ok((text.to_string(), String::new()));
    };

    let value_start = open_idx + open.len();
    let value_len = text[value_start..]
        .find(&close)
        .ok_or_else(|| TagError::NotClosed(tag.to_string()))?;
    if value_len == 0 {
        return Err(TagError::NoValue(tag.to_string()));
    }

    let value_end = value_start + value_len;
    let expr_end = value_end + close.len();
    let stripped = format!("{}{}", &text[..open_idx], &text[expr_end..]);

    Ok((stripped.trim().to_string(), text[value_start..value_end].to_string()))
}
