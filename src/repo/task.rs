use rusqlite::{Connection, OptionalExtension, Row, ToSql};
use crate::models::Task;
use anyhow::{Context, Result};

/// Column list shared by every task query, in `row_to_task` order
pub(crate) const TASK_COLUMNS: &str =
    "id, title, done, created_ts, finished_ts, priority, alarm_ts, alarm_text";

pub(crate) fn row_to_task(row: &Row, offset: usize) -> rusqlite::Result<Task> {
    Ok(Task {
        id: Some(row.get(offset)?),
        title: row.get(offset + 1)?,
        done: row.get(offset + 2)?,
        created_ts: row.get(offset + 3)?,
        finished_ts: row.get(offset + 4)?,
        priority: row.get(offset + 5)?,
        alarm_ts: row.get(offset + 6)?,
        alarm_text: row.get(offset + 7)?,
    })
}

/// Which active tasks a clear moves to the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    /// Every completed task
    Done,
    /// Every task
    All,
    /// One task by id
    Id(i64),
}

impl ClearScope {
    /// WHERE clause plus the value bound to `:id`, if the clause uses it
    fn predicate(&self) -> (&'static str, Option<i64>) {
        match self {
            ClearScope::Done => ("done = 1", None),
            ClearScope::All => ("1 = 1", None),
            ClearScope::Id(id) => ("id = :id", Some(*id)),
        }
    }
}

/// Task repository for the active task list
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task and return it with its assigned id
    pub fn create(conn: &Connection, task: &Task) -> Result<Task> {
        conn.execute(
            "INSERT INTO todos (title, done, created_ts, finished_ts, priority, alarm_ts, alarm_text)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                task.title,
                task.done,
                task.created_ts,
                task.finished_ts,
                task.priority,
                task.alarm_ts,
                task.alarm_text,
            ],
        )
        .with_context(|| format!("Failed to create task: {}", task.title))?;

        let id = conn.last_insert_rowid();
        log::info!("Created task {}: {}", id, task.title);

        Ok(Task {
            id: Some(id),
            ..task.clone()
        })
    }

    /// Get task by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Task>> {
        let mut stmt = conn.prepare(&format!("SELECT {} FROM todos WHERE id = ?1", TASK_COLUMNS))?;
        let task = stmt.query_row([id], |row| row_to_task(row, 0)).optional()?;
        Ok(task)
    }

    /// All active tasks: open before done, then higher priority, then oldest first
    pub fn list_ordered(conn: &Connection) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM todos ORDER BY done ASC, priority DESC, created_ts ASC, id ASC",
            TASK_COLUMNS
        ))?;
        let rows = stmt.query_map([], |row| row_to_task(row, 0))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }

    /// Overwrite title and priority. Alarm fields and done state are left alone.
    pub fn update_title_priority(conn: &Connection, task: &Task) -> Result<usize> {
        let id = task
            .id
            .ok_or_else(|| anyhow::anyhow!("Cannot update a task that was never stored"))?;
        let changed = conn
            .execute(
                "UPDATE todos SET title = ?1, priority = ?2 WHERE id = ?3",
                rusqlite::params![task.title, task.priority, id],
            )
            .with_context(|| format!("Failed to update task {}", id))?;
        Ok(changed)
    }

    /// Mark a task done. Already-done tasks keep their finish time; returns rows changed.
    pub fn mark_done(conn: &Connection, id: i64) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();
        let changed = conn.execute(
            "UPDATE todos SET done = 1, finished_ts = ?1 WHERE id = ?2 AND done = 0",
            rusqlite::params![now, id],
        )?;
        log::debug!("mark_done({}) changed {} row(s)", id, changed);
        Ok(changed)
    }

    /// Mark a task not done and clear its finish time; returns rows changed
    pub fn mark_undone(conn: &Connection, id: i64) -> Result<usize> {
        let changed = conn.execute(
            "UPDATE todos SET done = 0, finished_ts = NULL WHERE id = ?1 AND done = 1",
            [id],
        )?;
        log::debug!("mark_undone({}) changed {} row(s)", id, changed);
        Ok(changed)
    }

    /// Move the tasks in `scope` to the archive and delete them, atomically.
    /// Returns the number of tasks cleared.
    pub fn clear(conn: &Connection, scope: ClearScope) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();
        let (predicate, id) = scope.predicate();
        let mut delete_params: Vec<(&str, &dyn ToSql)> = Vec::new();
        if let Some(id) = &id {
            delete_params.push((":id", id));
        }
        let mut archive_params = delete_params.clone();
        archive_params.push((":now", &now));

        let tx = conn.unchecked_transaction()?;
        let archived = tx
            .execute(
                &format!(
                    "INSERT INTO todos_archive (deleted_ts, {cols})
                     SELECT :now, {cols} FROM todos WHERE {predicate}",
                    cols = TASK_COLUMNS,
                    predicate = predicate
                ),
                archive_params.as_slice(),
            )
            .context("Failed to archive tasks")?;
        let deleted = tx
            .execute(
                &format!("DELETE FROM todos WHERE {}", predicate),
                delete_params.as_slice(),
            )
            .context("Failed to delete archived tasks")?;
        if archived != deleted {
            anyhow::bail!("Archived {} task(s) but deleted {}", archived, deleted);
        }
        tx.commit()?;

        log::info!("Cleared {} task(s) ({:?})", deleted, scope);
        Ok(deleted)
    }
}
