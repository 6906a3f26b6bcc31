// Runs a typed command against the task store

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use rusqlite::Connection;

use crate::cli::error::{split_id_and_value, validate_task_id, CommandError};
use crate::cli::output::canonical_text;
use crate::cli::selection::{Action, Command};
use crate::config::SelectionMode;
use crate::effects::{AlarmScheduler, Clipboard};
use crate::models::Task;
use crate::repo::{ClearScope, TaskRepo};

/// Task id embedded in a rendered list line, e.g. `[12]`
fn line_id_regex() -> &'static Regex {
    static LINE_ID: OnceLock<Regex> = OnceLock::new();
    LINE_ID.get_or_init(|| Regex::new(r"\[([0-9]+)\]").expect("valid line id regex"))
}

type Handler<'a> = fn(&Dispatcher<'a>, &str) -> Result<()>;

impl Action {
    fn handler<'a>(self) -> Handler<'a> {
        match self {
            Action::Create => Dispatcher::create,
            Action::MarkDone => Dispatcher::mark_done,
            Action::MarkUndone => Dispatcher::mark_undone,
            Action::Clear => Dispatcher::clear,
            Action::Edit => Dispatcher::edit,
            Action::SetPriority => Dispatcher::set_priority,
            Action::Selection => Dispatcher::selection,
        }
    }
}

/// Everything a command may touch, passed in explicitly for the lifetime of one invocation
pub struct Dispatcher<'a> {
    conn: &'a Connection,
    alarms: &'a dyn AlarmScheduler,
    clipboard: &'a dyn Clipboard,
    selection_mode: SelectionMode,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        conn: &'a Connection,
        alarms: &'a dyn AlarmScheduler,
        clipboard: &'a dyn Clipboard,
        selection_mode: SelectionMode,
    ) -> Self {
        Self {
            conn,
            alarms,
            clipboard,
            selection_mode,
        }
    }

    pub fn run(&self, command: &Command) -> Result<()> {
        log::debug!("Running {:?} with {:?}", command.action, command.value);
        (command.action.handler())(self, &command.value)
    }

    fn load(&self, id: i64) -> Result<Task> {
        TaskRepo::get_by_id(self.conn, id)?.ok_or_else(|| CommandError::TaskNotFound(id).into())
    }

    fn create(&self, value: &str) -> Result<()> {
        let mut task = Task::new(value);
        task.extract_tags(self.alarms)?;
        let task = TaskRepo::create(self.conn, &task)?;
        if task.has_alarm() {
            log::info!("Task {:?} created with an alarm", task.id);
        }
        Ok(())
    }

    fn mark_done(&self, value: &str) -> Result<()> {
        let id = validate_task_id(value)?;
        TaskRepo::mark_done(self.conn, id)?;
        Ok(())
    }

    fn mark_undone(&self, value: &str) -> Result<()> {
        let id = validate_task_id(value)?;
        TaskRepo::mark_undone(self.conn, id)?;
        Ok(())
    }

    fn clear(&self, value: &str) -> Result<()> {
        let scope = match value {
            "" => return Err(CommandError::NoActionValue.into()),
            "done" => ClearScope::Done,
            "all" => ClearScope::All,
            other => ClearScope::Id(validate_task_id(other)?),
        };
        TaskRepo::clear(self.conn, scope)?;
        Ok(())
    }

    /// `<id> <text>`: retitle a task; tags in the text apply as on create.
    /// Only title and priority are stored, the alarm columns keep their values.
    fn edit(&self, value: &str) -> Result<()> {
        let (id, text) = split_id_and_value(value)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(CommandError::MissingText.into());
        }

        let mut task = self.load(id)?;
        task.title = text.to_string();
        task.extract_tags(self.alarms)?;
        TaskRepo::update_title_priority(self.conn, &task)?;
        Ok(())
    }

    fn set_priority(&self, value: &str) -> Result<()> {
        let (id, raw) = split_id_and_value(value)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CommandError::MissingPriority.into());
        }
        let priority = raw
            .parse::<i64>()
            .map_err(|_| CommandError::InvalidPriority(raw.to_string()))?;

        let mut task = self.load(id)?;
        task.priority = priority;
        TaskRepo::update_title_priority(self.conn, &task)?;
        Ok(())
    }

    fn selection(&self, value: &str) -> Result<()> {
        match self.selection_mode {
            SelectionMode::Copy => self.copy_selection(value),
            SelectionMode::Done => self.mark_selection_done(value),
        }
    }

    fn copy_selection(&self, line: &str) -> Result<()> {
        let task = self.load(id_from_line(line)?)?;
        self.clipboard.copy(&canonical_text(&task))?;
        Ok(())
    }

    fn mark_selection_done(&self, line: &str) -> Result<()> {
        TaskRepo::mark_done(self.conn, id_from_line(line)?)?;
        Ok(())
    }
}

/// First bracketed number in a rendered line
fn id_from_line(line: &str) -> Result<i64> {
    let digits = line_id_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| CommandError::NoIdInSelection(line.to_string()))?;
    Ok(validate_task_id(digits.as_str())?)
}
