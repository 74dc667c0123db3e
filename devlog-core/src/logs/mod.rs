//! Request-grouping log formatter
//!
//! Reads newline-delimited JSON log records and prints them for a human
//! reading a terminal during local development.
//!
//! Records whose `name` ends in a group id (`request:<id>`, `db:query:<id>`)
//! are collected per request: a `request` record with a `req` object opens the
//! group, child records are buffered, and a `request` record with a
//! `statusCode` closes it and prints one block:
//!
//! ```text
//! 12:00:01 200     10ms    GET /foo (id: 🐱 )
//!     +3ms LOG db query ok
//!     +9ms WRN cache miss
//! ```
//!
//! Closed groups linger for a short grace window so children that were
//! already in flight print as `(after <id>)` instead of as loose records.
//! Anything that is not JSON is echoed unchanged, and JSON without a group
//! id is dumped structurally.
//!
//! The data processing architecture is:
//!
//! input
//! LineSplitter
//! classify
//! Classified
//! GroupTracker
//! Renderer
//! output
//!

mod constants;
mod duration;
mod formatter;
mod group;
mod human_id;
mod inspect;
mod palette;
mod parse;
mod render;
mod run;
mod split;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use constants::GRACE_WINDOW;
pub use duration::{format_delta, format_duration};
pub use formatter::LogFormatter;
pub use group::{Group, LogItem};
pub use human_id::{GlyphAlphabet, Pictographs, human_id};
pub use inspect::inspect;
pub use palette::{GROUP_HUES, Hue, Palette, Tone, deterministic_index, hue_for};
pub use parse::{classify, is_group_id};
pub use render::Renderer;
pub use run::run_logs;
pub use split::LineSplitter;
pub use tracker::GroupTracker;
pub use types::{Classified, ErrorInfo, GroupEvent, Level, LogRecord, RecordKind, RequestLine};
