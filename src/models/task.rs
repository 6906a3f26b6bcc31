use serde::{Deserialize, Serialize};

/// Task model
///
/// `finished_ts` is set exactly when `done` is true. Timestamps are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub done: bool,
    pub created_ts: i64,
    pub finished_ts: Option<i64>,
    pub priority: i64,
    pub alarm_ts: Option<i64>,
    pub alarm_text: Option<String>,
}

impl Task {
    /// Create a new, not yet persisted task
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            done: false,
            created_ts: chrono::Utc::now().timestamp(),
            finished_ts: None,
            priority: 0,
            alarm_ts: None,
            alarm_text: None,
        }
    }

    pub fn has_alarm(&self) -> bool {
        self.alarm_ts.is_some()
    }
}

/// A soft-deleted task as stored in the archive table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedTask {
    pub deleted_ts: i64,
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(task.id.is_none());
        assert!(!task.done);
        assert!(task.finished_ts.is_none());
        assert_eq!(task.priority, 0);
        assert!(!task.has_alarm());
        assert!(task.created_ts > 0);
    }
}
