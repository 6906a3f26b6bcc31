// Date/time helpers shared by tag extraction and output

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};
use anyhow::Result;

/// Format accepted inside an alarm tag: `2024-06-01 13:53`
pub const ALARM_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format handed to the alarm program: `13:53 2024-06-01`
pub const ALARM_COMMAND_FORMAT: &str = "%H:%M %Y-%m-%d";

/// Format used when rendering creation timestamps in the task list
pub const LIST_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a local wall-clock time in `YYYY-MM-DD HH:MM` form and return a Unix timestamp.
///
/// Every string matching the pattern is accepted. A time repeated when clocks go back resolves
/// to its first occurrence; a time skipped when clocks go forward moves forward by an hour.
pub fn parse_local_minute(expr: &str) -> Result<i64> {
    let datetime = NaiveDateTime::parse_from_str(expr, ALARM_INPUT_FORMAT)
        .map_err(|e| anyhow::anyhow!("Invalid time '{}': {} (expected YYYY-MM-DD HH:MM)", expr, e))?;
    // chrono skips whitespace and accepts single-digit fields; the pattern must match exactly
    if datetime.format(ALARM_INPUT_FORMAT).to_string() != expr {
        anyhow::bail!("Invalid time '{}' (expected YYYY-MM-DD HH:MM)", expr);
    }
    let local_dt = resolve_wall_clock(&Local, &datetime)
        .ok_or_else(|| anyhow::anyhow!("No local time matches {}", expr))?;
    Ok(local_dt.timestamp())
}

fn resolve_wall_clock<Tz: TimeZone>(tz: &Tz, datetime: &NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(datetime).earliest().or_else(|| {
        let shifted = datetime.checked_add_signed(Duration::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })
}

/// Format a Unix timestamp in local time using the given strftime pattern
pub fn format_local(ts: i64, pattern: &str) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format(pattern).to_string(),
        None => String::from("????-??-?? ??:??"),
    }
}
