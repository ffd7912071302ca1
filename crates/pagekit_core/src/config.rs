//! Runtime configuration for the widgets.
//!
//! # Invariants
//! - Missing JSON fields fall back to the documented defaults.
//! - `carousel.interval_ms` is never zero after `validate()`.

use crate::repo::contact_repo::DEFAULT_STORAGE_KEY;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub contacts: ContactsConfig,
    pub carousel: CarouselConfig,
}

/// Contact table settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactsConfig {
    /// Key the contact snapshot is stored under.
    pub storage_key: String,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Carousel settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between autoplay advances.
    pub interval_ms: u64,
    /// Whether autoplay starts enabled.
    pub autoplay: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            autoplay: true,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Configuration load failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contacts.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "contacts.storage_key must not be blank".to_string(),
            ));
        }
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "carousel.interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, DEFAULT_AUTOPLAY_INTERVAL_MS};
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.contacts.storage_key, "tableData");
        assert_eq!(config.carousel.interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
        assert!(config.carousel.autoplay);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = CoreConfig::from_json_str(r#"{"carousel":{"autoplay":false}}"#).unwrap();
        assert!(!config.carousel.autoplay);
        assert_eq!(config.carousel.interval(), Duration::from_millis(5000));
    }

    #[test]
    fn rejects_zero_interval_and_blank_key() {
        let zero = CoreConfig::from_json_str(r#"{"carousel":{"interval_ms":0}}"#);
        assert!(matches!(zero, Err(ConfigError::Invalid(_))));

        let blank = CoreConfig::from_json_str(r#"{"contacts":{"storage_key":"  "}}"#);
        assert!(matches!(blank, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn reports_parse_errors() {
        let err = CoreConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
