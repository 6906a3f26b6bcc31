//! Side effects that leave the process: desktop notifications, alarms and the clipboard.
//!
//! Each concern is a trait so the dispatcher and the tag extractor can be driven by fakes in
//! tests. The production implementations in [`process`] spawn an external program per call.

pub mod process;
#[cfg(test)]
pub mod fakes;

pub use process::{ProcessAlarmScheduler, ProcessClipboard, ProcessNotifier};

use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Reports an error to the user. Best effort: implementations never fail.
pub trait Notifier {
    fn notify(&self, title: &str, message: &str);
}

/// Schedules an alarm showing `text` at the Unix timestamp `at_ts`
pub trait AlarmScheduler {
    fn schedule(&self, text: &str, at_ts: i64) -> Result<(), EffectError>;
}

/// Puts text on the system clipboard
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), EffectError>;
}
