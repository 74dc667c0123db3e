use chrono::{DateTime, Utc};
use serde_json::Value;

/// Outcome of classifying one input line.
#[derive(Debug, Clone)]
pub enum Classified {
    /// Not JSON. The raw bytes are echoed unchanged.
    PassThrough(Vec<u8>),
    /// JSON that does not belong to a correlation group.
    Standalone(Value),
    /// A record carrying a group id.
    Group(GroupEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Start,
    Finish,
    Child,
}

#[derive(Debug, Clone)]
pub struct GroupEvent {
    pub id: String,
    /// Name segments before the id, joined by `:`.
    pub label: String,
    pub kind: RecordKind,
    pub record: LogRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
}

impl Level {
    pub fn from_field(level: Option<&str>) -> Self {
        match level {
            Some("error") => Level::Error,
            Some("warn") => Level::Warn,
            _ => Level::Info,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorInfo {
    pub stack: Option<String>,
    pub message: Option<String>,
}

/// A decoded log record. `raw` keeps the original object for standalone rendering.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub name: String,
    pub time: Option<DateTime<Utc>>,
    pub level: Level,
    pub req: Option<RequestLine>,
    /// status is a number in most logs, but numeric strings are accepted too
    pub status_code: Option<i64>,
    pub latency_ms: Option<f64>,
    pub message: Option<String>,
    pub err: Option<ErrorInfo>,
    pub raw: Value,
}
