//! Picker configuration loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{color::Component, error::ConfigError, format::Format, parse::parse_color};

/// Settings for a color picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Color the picker starts on.
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Format used when a color is shown as text.
    #[serde(default)]
    pub format: Format,

    /// Number of committed colors to remember.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Keyboard step sizes.
    #[serde(default)]
    pub steps: KeySteps,
}

fn default_seed() -> String {
    "#000000".to_string()
}

fn default_history_capacity() -> usize {
    10
}

/// How far a single key press moves a picker control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySteps {
    /// Step for hue, saturation and value.
    #[serde(default = "default_fine")]
    pub fine: Component,

    /// Step for hue, saturation and value with the modifier held.
    #[serde(default = "default_coarse")]
    pub coarse: Component,

    /// Step for alpha.
    #[serde(default = "default_alpha_fine")]
    pub alpha_fine: Component,

    /// Step for alpha with the modifier held.
    #[serde(default = "default_alpha_coarse")]
    pub alpha_coarse: Component,
}

fn default_fine() -> Component {
    1.0
}

fn default_coarse() -> Component {
    10.0
}

fn default_alpha_fine() -> Component {
    0.01
}

fn default_alpha_coarse() -> Component {
    0.1
}

impl Default for KeySteps {
    fn default() -> Self {
        Self {
            fine: default_fine(),
            coarse: default_coarse(),
            alpha_fine: default_alpha_fine(),
            alpha_coarse: default_alpha_coarse(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            format: Format::default(),
            history_capacity: default_history_capacity(),
            steps: KeySteps::default(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        tracing::info!(
            path = %path.display(),
            seed = %config.seed,
            format = %config.format,
            "Loaded picker configuration"
        );
        Ok(config)
    }

    /// Like [`PickerConfig::load`], but falls back to the defaults when the
    /// file is missing or invalid.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load picker config, using defaults");
                Self::default()
            }
        }
    }

    /// Check the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if parse_color(&self.seed).is_none() {
            return Err(crate::error::ParseColorError::new(&self.seed).into());
        }

        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistory);
        }

        for (name, value) in [
            ("fine", self.steps.fine),
            ("coarse", self.steps.coarse),
            ("alpha_fine", self.steps.alpha_fine),
            ("alpha_coarse", self.steps.alpha_coarse),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidStep {
                    name,
                    value: value as f64,
                });
            }
        }

        Ok(())
    }
}
