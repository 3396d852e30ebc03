//! Plugin configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::consts::{DEFAULT_UI_HEIGHT, DEFAULT_UI_WIDTH};
use crate::host::UiOptions;

pub const UI_WIDTH_VAR: &str = "RATIOLOCK_UI_WIDTH";
pub const UI_HEIGHT_VAR: &str = "RATIOLOCK_UI_HEIGHT";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidSize { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginConfig {
    pub ui: UiOptions,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self { ui: UiOptions { width: DEFAULT_UI_WIDTH, height: DEFAULT_UI_HEIGHT } }
    }
}

impl PluginConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `RATIOLOCK_UI_WIDTH`: panel width in pixels, default 350
    /// - `RATIOLOCK_UI_HEIGHT`: panel height in pixels, default 540
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if a variable is set but is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let width = env_parse_size(UI_WIDTH_VAR, DEFAULT_UI_WIDTH)?;
        let height = env_parse_size(UI_HEIGHT_VAR, DEFAULT_UI_HEIGHT)?;
        Ok(Self { ui: UiOptions { width, height } })
    }
}

fn env_parse_size(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_size(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_size(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidSize { var, value: raw.to_owned() }),
    }
}
