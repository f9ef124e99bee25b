use log::Level;
use serde::Deserialize;
use thiserror::Error;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose lock transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Name of the `<meta>` tag whose `content` overrides the scroll-lock defaults.
pub const SETTINGS_META_NAME: &str = "scroll-lock";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scroll-lock settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lock threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f64),
    #[error("sensitivity must be a positive number, got {0}")]
    InvalidSensitivity(f64),
}

/// Tunables for a scroll-driven section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollLockSettings {
    /// Fraction of the viewport height used as the trigger line.
    pub lock_threshold: f64,
    pub can_reverse_exit: bool,
    /// Progress gained per pixel of input delta.
    pub sensitivity: f64,
}

impl Default for ScrollLockSettings {
    fn default() -> Self {
        Self {
            lock_threshold: 0.3,
            can_reverse_exit: false,
            sensitivity: 0.0015,
        }
    }
}

impl ScrollLockSettings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: ScrollLockSettings = serde_json::from_str(raw)?;
        settings.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.lock_threshold.is_finite() || !(0.0..=1.0).contains(&self.lock_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.lock_threshold));
        }
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        Ok(self)
    }
}

/// Reads page-level overrides from `<meta name="scroll-lock" content="{...}">`.
/// Falls back to the defaults when the tag is missing or malformed.
pub fn page_settings() -> ScrollLockSettings {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector(&format!("meta[name=\"{}\"]", SETTINGS_META_NAME))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    match content {
        Some(raw) => ScrollLockSettings::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("Ignoring scroll-lock meta tag: {}", err);
            ScrollLockSettings::default()
        }),
        None => ScrollLockSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = ScrollLockSettings::from_json(r#"{"can_reverse_exit": true}"#).unwrap();
        assert!(settings.can_reverse_exit);
        assert_eq!(settings.lock_threshold, 0.3);
        assert_eq!(settings.sensitivity, 0.0015);
    }

    #[test]
    fn threshold_outside_viewport_is_rejected() {
        let err = ScrollLockSettings::from_json(r#"{"lock_threshold": 1.4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange(t) if t == 1.4));
    }

    #[test]
    fn non_positive_sensitivity_is_rejected() {
        let err = ScrollLockSettings::from_json(r#"{"sensitivity": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSensitivity(_)));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = ScrollLockSettings::from_json("{lock_threshold:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
