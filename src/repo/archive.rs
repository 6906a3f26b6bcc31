use rusqlite::Connection;
use crate::models::ArchivedTask;
use crate::repo::task::{row_to_task, TASK_COLUMNS};
use anyhow::Result;

/// Read access to the archive of cleared tasks.
///
/// Rows are written only by [`crate::repo::TaskRepo::clear`]; the active list never reads them.
pub struct ArchiveRepo;

impl ArchiveRepo {
    /// All archived tasks, in the order they were cleared
    pub fn list(conn: &Connection) -> Result<Vec<ArchivedTask>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT deleted_ts, {} FROM todos_archive ORDER BY deleted_ts ASC, id ASC",
            TASK_COLUMNS
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok(ArchivedTask {
                deleted_ts: row.get(0)?,
                task: row_to_task(row, 1)?,
            })
        })?;

        let mut archived = Vec::new();
        for row in rows {
            archived.push(row?);
        }
        Ok(archived)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM todos_archive", [], |row| row.get(0))?;
        Ok(count)
    }
}
