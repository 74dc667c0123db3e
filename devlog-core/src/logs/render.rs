use crate::conf::TimeZoneMode;
use crate::logs::constants::{BADGE_WIDTH, DURATION_COLUMN_WIDTH, METHOD_COLUMN_WIDTH, MISSING_FIELD};
use crate::logs::duration::{format_delta, format_duration};
use crate::logs::group::{Group, LogItem};
use crate::logs::inspect::inspect;
use crate::logs::palette::{Palette, Tone};
use crate::logs::types::{Level, LogRecord};
use chrono::{DateTime, Local, Utc};
use serde_json::Value;

/// Turns groups, items and loose records into terminal text. Holds no state.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette: Palette,
    timezone: TimeZoneMode,
}

impl Renderer {
    pub fn new(palette: Palette, timezone: TimeZoneMode) -> Self {
        Self { palette, timezone }
    }

    /// `time CODE latency method url (id: <human id>)`
    pub fn header(&self, group: &Group, finish: &LogRecord) -> String {
        let origin = group.origin();
        let req = origin.req.clone().unwrap_or_default();

        let status = match finish.status_code {
            Some(code) => self.palette.paint(&code.to_string(), status_tone(code)),
            None => MISSING_FIELD.to_string(),
        };
        let latency = finish
            .latency_ms
            .map(format_duration)
            .unwrap_or_else(|| MISSING_FIELD.to_string());

        [
            self.palette
                .paint(&self.time_of_day(group.epoch()), Tone::MutedUnderline),
            status,
            self.palette.paint(
                &format!("{latency:>width$}", width = DURATION_COLUMN_WIDTH),
                Tone::Muted,
            ),
            format!(
                "{:>width$}",
                req.method.as_deref().unwrap_or(MISSING_FIELD),
                width = METHOD_COLUMN_WIDTH
            ),
            self.palette
                .paint(req.url.as_deref().unwrap_or(MISSING_FIELD), Tone::Underline),
            format!("(id: {})", group.human_id()),
        ]
        .join(" ")
    }

    /// `  +elapsed BADGE label message`, continuation lines aligned under the message.
    pub fn item(&self, item: &LogItem) -> String {
        let elapsed = format!(
            "{:>width$}",
            format_delta(item.delta_ms),
            width = DURATION_COLUMN_WIDTH
        );
        let indent = " ".repeat(
            elapsed.chars().count() + BADGE_WIDTH + item.label.chars().count() + 3,
        );
        let is_error = item.record.level == Level::Error;

        let message = message_for(&item.record)
            .split('\n')
            .enumerate()
            .map(|(idx, line)| {
                let line = if idx == 0 {
                    line.trim_end_matches('\r')
                } else {
                    line.trim()
                };
                let line = match (is_error, idx) {
                    (true, 0) => self.palette.paint(line, Tone::Alert),
                    (true, _) => self.palette.paint(line, Tone::Muted),
                    (false, _) => line.to_string(),
                };
                if idx == 0 {
                    line
                } else {
                    format!("{indent}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        [
            self.palette.paint(&elapsed, Tone::Muted),
            self.badge(item.record.level),
            self.palette.paint(&item.label, Tone::Hue(item.hue)),
            message,
        ]
        .join(" ")
    }

    /// Header followed by every buffered item in arrival order.
    pub fn block(&self, group: &Group, finish: &LogRecord) -> String {
        let header = self.header(group, finish);
        if group.entries().is_empty() {
            return header;
        }

        let items = group
            .entries()
            .iter()
            .map(|item| self.item(item))
            .collect::<Vec<_>>()
            .join("\n")
            .replace(group.id(), group.human_id());

        format!("{header}\n{items}")
    }

    /// An item that arrived after its group was flushed.
    pub fn late_item(&self, item: &LogItem, human_id: &str) -> String {
        format!("{} (after {human_id})", self.item(item))
    }

    pub fn standalone(&self, value: &Value) -> String {
        inspect(value, &self.palette)
    }

    fn badge(&self, level: Level) -> String {
        match level {
            Level::Error => self.palette.paint("ERR", Tone::Alert),
            Level::Warn => self.palette.paint("WRN", Tone::Caution),
            Level::Info => self.palette.paint("LOG", Tone::Notice),
        }
    }

    fn time_of_day(&self, at: Option<DateTime<Utc>>) -> String {
        let Some(at) = at else {
            return "--:--:--".to_string();
        };

        match self.timezone {
            TimeZoneMode::Utc => at.format("%H:%M:%S").to_string(),
            TimeZoneMode::Local => at.with_timezone(&Local).format("%H:%M:%S").to_string(),
        }
    }
}

pub fn status_tone(code: i64) -> Tone {
    match code {
        c if c < 300 => Tone::Success,
        c if c < 399 => Tone::SuccessStrong,
        c if c < 499 => Tone::Warning,
        _ => Tone::Alert,
    }
}

/// Error text first, then the request line, then the plain message.
pub fn message_for(record: &LogRecord) -> String {
    if let Some(err) = &record.err {
        return err
            .stack
            .clone()
            .or_else(|| err.message.clone())
            .unwrap_or_else(|| "Unknown Error".to_string());
    }

    if let Some(req) = &record.req {
        return format!(
            "{} {}",
            req.method.as_deref().unwrap_or(MISSING_FIELD),
            req.url.as_deref().unwrap_or(MISSING_FIELD)
        );
    }

    record
        .message
        .clone()
        .unwrap_or_else(|| "Unknown message".to_string())
}
