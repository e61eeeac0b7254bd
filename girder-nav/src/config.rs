//! Runtime configuration for the navigation controller.

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct NavConfig {
    /// Grace window after an anchor-targeted back during which the host's
    /// global scroll-to-top must stand down.
    pub scroll_suppress_ms: u64,
    /// Delay advertised in `ScrollFallback::RetryAfter`.
    pub anchor_retry_delay_ms: u64,
    /// Transition journal ring size. 0 disables the journal.
    pub trace_capacity: usize,
    /// Unknown page names passed to `navigate_named` error instead of
    /// degrading to Overview.
    pub strict_pages: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_suppress_ms: 1_200,
            anchor_retry_delay_ms: 250,
            trace_capacity: 64,
            strict_pages: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl NavConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: NavConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(250..=5_000).contains(&self.scroll_suppress_ms) {
            return Err(ConfigError::InvalidValue {
                field: "scroll_suppress_ms",
                reason: "must be between 250 and 5000".to_string(),
            });
        }
        if !(50..=2_000).contains(&self.anchor_retry_delay_ms) {
            return Err(ConfigError::InvalidValue {
                field: "anchor_retry_delay_ms",
                reason: "must be between 50 and 2000".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(NavConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = NavConfig::from_toml_str("strict_pages = true\n").unwrap();
        assert!(config.strict_pages);
        assert_eq!(config.scroll_suppress_ms, 1_200);
        assert_eq!(config.trace_capacity, 64);
    }

    #[test]
    fn unknown_fields_rejected() {
        let err = NavConfig::from_toml_str("scroll_delay = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn suppress_window_bounds() {
        let err = NavConfig::from_toml_str("scroll_suppress_ms = 100\n").unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => {
                assert_eq!(field, "scroll_suppress_ms");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(NavConfig::from_toml_str("scroll_suppress_ms = 6000\n").is_err());
    }

    #[test]
    fn retry_delay_bounds() {
        assert!(NavConfig::from_toml_str("anchor_retry_delay_ms = 10\n").is_err());
        assert!(NavConfig::from_toml_str("anchor_retry_delay_ms = 2000\n").is_ok());
    }
}
