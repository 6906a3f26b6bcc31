use crate::effects::AlarmScheduler;
use crate::models::Task;
use crate::tags::{extract_tag, TagError, ALARM_TAG, PRIORITY_TAG};
use crate::utils::parse_local_minute;

/// Alarm parsed out of the title but not yet applied to the task
struct PendingAlarm {
    at_ts: i64,
    text: Option<String>,
}

impl Task {
    /// Pull the priority and alarm tags out of the title, in that order.
    ///
    /// On success the title is stripped of both tags, `priority` and the alarm fields are set
    /// and the alarm (if any) has been handed to `alarms`. On error the task must not be stored.
    pub fn extract_tags(&mut self, alarms: &dyn AlarmScheduler) -> Result<(), TagError> {
        self.extract_priority()?;
        let alarm = self.take_alarm()?;

        if self.title.is_empty() {
            return Err(TagError::EmptyTitle);
        }

        if let Some(PendingAlarm { at_ts, text }) = alarm {
            // Without an explicit text the alarm shows the final title
            let text = text.unwrap_or_else(|| self.title.clone());
            alarms.schedule(&text, at_ts)?;
            self.alarm_ts = Some(at_ts);
            self.alarm_text = Some(text);
        }

        Ok(())
    }

    fn extract_priority(&mut self) -> Result<(), TagError> {
        let (title, value) = extract_tag(&self.title, PRIORITY_TAG)?;
        self.title = title;

        if value.is_empty() {
            return Ok(());
        }

        self.priority = value
            .parse::<i64>()
            .map_err(|_| TagError::InvalidPriority(value.clone()))?;
        Ok(())
    }

    fn take_alarm(&mut self) -> Result<Option<PendingAlarm>, TagError> {
        let (title, value) = extract_tag(&self.title, ALARM_TAG)?;
        self.title = title;

        if value.is_empty() {
            return Ok(None);
        }

        let mut parts = value.splitn(2, ',');
        let time_part = parts.next().unwrap_or_default();
        let at_ts = parse_local_minute(time_part).map_err(|e| TagError::InvalidAlarmTime {
            value: time_part.to_string(),
            reason: e.to_string(),
        })?;
        let text = parts.next().map(|t| t.trim().to_string());

        Ok(Some(PendingAlarm { at_ts, text }))
    }
}
