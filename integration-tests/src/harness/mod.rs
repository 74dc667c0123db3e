pub mod pipeline;
pub mod tracing;

pub use pipeline::{format, format_bytes, format_with, ndjson, plain_config};
pub use tracing::{CapturedEvent, EventLog, init_test_tracing};
