use crate::logs::GRACE_WINDOW;
use clap::ValueEnum;
use serde::Deserialize;
use std::io::{self, IsTerminal};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub color: ColorMode,
    pub timezone: TimeZoneMode,
    /// How long a closed group keeps catching late children.
    pub grace_ms: u64,
    /// Discard groups that never finish after this long. Unset keeps them forever.
    pub open_group_ttl_secs: Option<u64>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            timezone: TimeZoneMode::default(),
            grace_ms: GRACE_WINDOW.as_millis() as u64,
            open_group_ttl_secs: None,
        }
    }
}

impl FormatConfig {
    pub fn grace_window(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn open_group_ttl(&self) -> Option<Duration> {
        self.open_group_ttl_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneMode {
    #[default]
    Local,
    Utc,
}
