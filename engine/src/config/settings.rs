// Engine settings: display preferences and the dashboard's projection bounds.
use crate::error::EngineError;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub currency_symbol: String,
    pub display_decimals: usize,
    pub default_projection_years: u32,
    /// Upper bound applied to any requested projection horizon.
    pub max_projection_years: u32,
    /// Asset line counted as liquid reserve for the emergency-fund band.
    pub cash_asset_name: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            currency_symbol: "₹".to_string(),
            display_decimals: 2,
            default_projection_years: 5,
            max_projection_years: 20,
            cash_asset_name: "Cash & Savings".to_string(),
        }
    }
}

impl EngineSettings {
    /// Settings from the default.json bundled with the binary.
    pub fn load_default() -> Result<Self, EngineError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    /// Settings from a user file. Keys missing from the file keep their
    /// default values.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded settings file");
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let settings: EngineSettings = serde_json::from_str(raw)
            .map_err(|e| EngineError::ConfigError(format!("invalid settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_projection_years == 0 {
            return Err(EngineError::ConfigError(
                "max_projection_years must be at least 1".to_string(),
            ));
        }
        if self.default_projection_years == 0 || self.default_projection_years > self.max_projection_years {
            return Err(EngineError::ConfigError(format!(
                "default_projection_years must be between 1 and {}, got {}",
                self.max_projection_years, self.default_projection_years
            )));
        }
        Ok(())
    }
}
