use anyhow::Result;
use clap::Parser;
use devlog_core::conf::{ColorMode, FormatConfig, TimeZoneMode, load_config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "devlog",
    version,
    about = "Pretty print a NDJSON log, grouped by request"
)]
pub struct Cli {
    /// Log file to read. Reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Path to an HCL config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// When to color output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Print header timestamps in UTC instead of local time
    #[arg(long)]
    pub utc: bool,

    /// Milliseconds a finished request keeps catching late lines
    #[arg(long)]
    pub grace_ms: Option<u64>,

    /// Discard requests that never finish after this many seconds
    #[arg(long, value_name = "SECS")]
    pub open_group_ttl: Option<u64>,
}

impl Cli {
    /// Config file values, overridden by whatever was given on the command line.
    pub fn format_config(&self) -> Result<FormatConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => FormatConfig::default(),
        };

        if let Some(color) = self.color {
            config.color = color;
        }
        if self.utc {
            config.timezone = TimeZoneMode::Utc;
        }
        if let Some(grace_ms) = self.grace_ms {
            config.grace_ms = grace_ms;
        }
        if let Some(ttl) = self.open_group_ttl {
            config.open_group_ttl_secs = Some(ttl);
        }

        Ok(config)
    }
}
