use devlog_core::conf::{ColorMode, FormatConfig, TimeZoneMode};
use devlog_core::logs::run_logs;
use serde_json::Value;

/// Uncolored, UTC, default grace window.
pub fn plain_config() -> FormatConfig {
    FormatConfig {
        color: ColorMode::Never,
        timezone: TimeZoneMode::Utc,
        ..FormatConfig::default()
    }
}

/// One JSON document per line, no trailing newline.
pub fn ndjson(records: &[Value]) -> String {
    records
        .iter()
        .map(|record| serde_json::to_string(record).expect("serializable record"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn format(input: &str) -> String {
    String::from_utf8(format_bytes(input.as_bytes()).await).expect("utf-8 output")
}

pub async fn format_bytes(input: &[u8]) -> Vec<u8> {
    format_with(input, &plain_config()).await
}

pub async fn format_with(input: &[u8], config: &FormatConfig) -> Vec<u8> {
    let mut out = Vec::new();
    run_logs(input, &mut out, config)
        .await
        .expect("in-memory pipeline cannot fail");
    out
}
