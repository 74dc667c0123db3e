use crate::conf::error::ConfigError;
use crate::conf::types::FormatConfig;
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<FormatConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(path, &text)
}

/// Keys left out of the file keep their defaults.
pub fn parse_config(path: &Path, text: &str) -> Result<FormatConfig, ConfigError> {
    hcl::from_str(text).map_err(|e| ConfigError::parse(path, e))
}
