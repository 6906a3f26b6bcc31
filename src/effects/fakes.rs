// In-process collaborators for unit tests

use std::cell::RefCell;

use crate::effects::{AlarmScheduler, Clipboard, EffectError, Notifier};

/// Records every scheduled alarm; fails every call when `fail` is set
#[derive(Default)]
pub struct RecordingAlarms {
    pub fail: bool,
    pub scheduled: RefCell<Vec<(String, i64)>>,
}

impl RecordingAlarms {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl AlarmScheduler for RecordingAlarms {
    fn schedule(&self, text: &str, at_ts: i64) -> Result<(), EffectError> {
        if self.fail {
            return Err(EffectError::Spawn {
                program: "alarma".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            });
        }
        self.scheduled.borrow_mut().push((text.to_string(), at_ts));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub copied: RefCell<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> Result<(), EffectError> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str) {
        self.messages.borrow_mut().push((title.to_string(), message.to_string()));
    }
}
