//! Controller configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration. The gesture tuning values have no device-specific
//! derivation; hosts that need different feel override them here.

use crate::constants::{
    DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_SUPPRESSION_DELAY_MS, DRAG_TOUCH_ACTION, GRABBING_CLASS,
    PASSED_CLASS, TITLE_HEIGHT_VARIABLE,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tuning constants and styling hook names for a carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Exclusive displacement threshold separating a click from a drag
    pub drag_threshold_px: f32,
    /// How long item clicks stay swallowed after a drag
    pub suppression_delay_ms: u64,
    /// Layout variable that receives the tallest title height
    pub title_height_variable: String,
    /// Class marking items before the current index
    pub passed_class: String,
    /// Class marking the content wrapper during a drag
    pub grabbing_class: String,
    /// Touch action applied to the root when a drag begins
    pub touch_action: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            suppression_delay_ms: DEFAULT_SUPPRESSION_DELAY_MS,
            title_height_variable: TITLE_HEIGHT_VARIABLE.to_string(),
            passed_class: PASSED_CLASS.to_string(),
            grabbing_class: GRABBING_CLASS.to_string(),
            touch_action: DRAG_TOUCH_ACTION.to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "Loaded carousel config");
        Ok(config)
    }

    /// Check that thresholds are usable and hook names are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.drag_threshold_px));
        }

        let hooks = [
            ("title_height_variable", &self.title_height_variable),
            ("passed_class", &self.passed_class),
            ("grabbing_class", &self.grabbing_class),
            ("touch_action", &self.touch_action),
        ];
        for (name, value) in hooks {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyHook(name));
            }
        }

        Ok(())
    }

    /// The suppression delay as a [`Duration`].
    pub fn suppression_delay(&self) -> Duration {
        Duration::from_millis(self.suppression_delay_ms)
    }
}
