use crate::logs::palette::{Hue, hue_for};
use crate::logs::types::LogRecord;
use chrono::{DateTime, Utc};
use std::time::Instant;

/// One buffered child line of a group.
#[derive(Debug, Clone)]
pub struct LogItem {
    pub label: String,
    /// Milliseconds since the group epoch. Negative when clocks disagree.
    pub delta_ms: Option<i64>,
    pub hue: Hue,
    pub record: LogRecord,
}

impl LogItem {
    pub fn new(label: String, record: LogRecord, epoch: Option<DateTime<Utc>>) -> Self {
        let delta_ms = record
            .time
            .zip(epoch)
            .map(|(at, epoch)| (at - epoch).num_milliseconds());

        Self {
            hue: hue_for(&label),
            label,
            delta_ms,
            record,
        }
    }
}

/// A request lifecycle, from its start record until eviction.
#[derive(Debug)]
pub struct Group {
    id: String,
    origin: LogRecord,
    human_id: String,
    entries: Vec<LogItem>,
    closed: bool,
    opened_at: Instant,
}

impl Group {
    pub fn open(id: String, origin: LogRecord, human_id: String, now: Instant) -> Self {
        Self {
            id,
            origin,
            human_id,
            entries: Vec::new(),
            closed: false,
            opened_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn origin(&self) -> &LogRecord {
        &self.origin
    }

    pub fn human_id(&self) -> &str {
        &self.human_id
    }

    pub fn epoch(&self) -> Option<DateTime<Utc>> {
        self.origin.time
    }

    pub fn entries(&self) -> &[LogItem] {
        &self.entries
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn opened_at(&self) -> Instant {
        self.opened_at
    }

    pub fn item(&self, label: String, record: LogRecord) -> LogItem {
        LogItem::new(label, record, self.epoch())
    }

    pub fn buffer(&mut self, item: LogItem) {
        self.entries.push(item);
    }

    /// Returns false when the group was already closed.
    pub fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.closed, true)
    }
}
