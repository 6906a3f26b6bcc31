// Output formatting for the launcher

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::models::Task;
use crate::tags::PRIORITY_TAG;
use crate::utils::{format_local, LIST_FORMAT};

const DONE_GLYPH: &str = "✔";
const OPEN_GLYPH: &str = "✘";

fn format_id(task: &Task) -> String {
    task.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One list line: `[id] [p:priority] [created] glyph title`.
///
/// The leading `[id]` is what the fallback selection looks for when the line is fed back in.
pub fn format_task_line(task: &Task) -> String {
    let glyph = if task.done { DONE_GLYPH } else { OPEN_GLYPH };
    format!(
        "[{}] [p:{}] [{}] {} {}",
        format_id(task),
        task.priority,
        format_local(task.created_ts, LIST_FORMAT),
        glyph,
        task.title
    )
}

/// Text put on the clipboard for a task: `id p:N:p title`, or `id title` without priority.
///
/// Prefixing it with `>` edits the task with its priority intact.
pub fn canonical_text(task: &Task) -> String {
    if task.priority > 0 {
        format!(
            "{} {tag}:{}:{tag} {}",
            format_id(task),
            task.priority,
            task.title,
            tag = PRIORITY_TAG
        )
    } else {
        format!("{} {}", format_id(task), task.title)
    }
}

/// Write the task list, one task per line
pub fn write_tasks<W: Write>(out: &mut W, tasks: &[Task], format: OutputFormat) -> Result<()> {
    for task in tasks {
        match format {
            OutputFormat::Lines => writeln!(out, "{}", format_task_line(task))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(task)?)?,
        }
    }
    out.flush()?;
    Ok(())
}
