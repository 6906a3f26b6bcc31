use std::process::{Command, Stdio};

use crate::effects::{AlarmScheduler, Clipboard, EffectError, Notifier};
use crate::utils::{format_local, ALARM_COMMAND_FORMAT};

/// Application name passed to the notification daemon
const APP_NAME: &str = "rofi-todo";

/// Run `program` with `args`, detached from our stdio so nothing leaks into the launcher list
fn run_program(program: &str, args: &[&str]) -> Result<(), EffectError> {
    log::debug!("Running {} {:?}", program, args);
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| EffectError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(EffectError::Failed {
            program: program.to_string(),
            status,
        })
    }
}

/// `notify-send -a rofi-todo <title> <message>`
#[derive(Debug, Clone)]
pub struct ProcessNotifier {
    pub program: String,
}

impl Notifier for ProcessNotifier {
    fn notify(&self, title: &str, message: &str) {
        if let Err(e) = run_program(&self.program, &["-a", APP_NAME, title, message]) {
            log::warn!("Notification not delivered: {}", e);
        }
    }
}

/// `alarma <text> "<HH:MM YYYY-MM-DD>"`
#[derive(Debug, Clone)]
pub struct ProcessAlarmScheduler {
    pub program: String,
}

impl AlarmScheduler for ProcessAlarmScheduler {
    fn schedule(&self, text: &str, at_ts: i64) -> Result<(), EffectError> {
        let when = format_local(at_ts, ALARM_COMMAND_FORMAT);
        log::info!("Scheduling alarm '{}' at {}", text, when);
        run_program(&self.program, &[text, &when])
    }
}

/// `wl-copy <text>`
#[derive(Debug, Clone)]
pub struct ProcessClipboard {
    pub program: String,
}

impl Clipboard for ProcessClipboard {
    fn copy(&self, text: &str) -> Result<(), EffectError> {
        run_program(&self.program, &[text])
    }
}
