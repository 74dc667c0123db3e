use crate::logs::constants::REQUEST_LABEL;
use crate::logs::types::{
    Classified, ErrorInfo, GroupEvent, Level, LogRecord, RecordKind, RequestLine,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Group ids come from a base64 encoder upstream, so they end in padding.
pub fn is_group_id(id: &str) -> bool {
    !id.is_empty() && id.ends_with('=')
}

pub fn classify(line: &[u8]) -> Classified {
    let Ok(value) = serde_json::from_slice::<Value>(line) else {
        return Classified::PassThrough(line.to_vec());
    };

    let Some(name) = value.get("name").and_then(Value::as_str) else {
        return Classified::Standalone(value);
    };
    let name = name.to_owned();

    let mut segments: Vec<&str> = name.split(':').collect();
    let id = segments.pop().unwrap_or_default();
    if !is_group_id(id) {
        return Classified::Standalone(value);
    }

    let id = id.to_string();
    let label = segments.join(":");
    let is_request = segments.first() == Some(&REQUEST_LABEL);
    let record = parse_record(&name, value);

    let kind = if is_request && record.req.is_some() {
        RecordKind::Start
    } else if is_request && record.status_code.is_some() {
        RecordKind::Finish
    } else {
        RecordKind::Child
    };

    Classified::Group(GroupEvent {
        id,
        label,
        kind,
        record,
    })
}

pub fn parse_record(name: &str, value: Value) -> LogRecord {
    LogRecord {
        name: name.to_string(),
        time: value.get("time").and_then(parse_time),
        level: Level::from_field(value.get("level").and_then(Value::as_str)),
        req: value
            .get("req")
            .filter(|req| req.is_object())
            .map(|req| RequestLine {
                method: non_empty_str(req.get("method")),
                url: non_empty_str(req.get("url")),
            }),
        status_code: value.get("statusCode").and_then(parse_status),
        latency_ms: value.get("latency").and_then(Value::as_f64),
        message: value.get("message").and_then(message_text),
        err: value
            .get("err")
            .filter(|err| err.is_object())
            .map(|err| ErrorInfo {
                stack: non_empty_str(err.get("stack")),
                message: non_empty_str(err.get("message")),
            }),
        raw: value,
    }
}

/// RFC 3339 strings or epoch milliseconds.
pub fn parse_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|ms| ms as i64))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_status(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .filter(|code| *code != 0)
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
