//! Game settings
//!
//! Loaded from an optional JSON file; every field has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{CategoryInfo, CategoryScheme, SchemePreset};
use crate::consts::{MAX_NAME_LEN, SEAM_TOLERANCE};
use crate::error::ConfigurationError;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Built-in category names/colors
    pub scheme: SchemePreset,
    /// Custom category names/colors (overrides `scheme`, exactly six)
    pub categories: Option<Vec<CategoryInfo>>,

    /// Pointer angles this close below 2π snap to 0 (radians)
    pub seam_tolerance: f32,
    /// Player names are cut to this many characters
    pub max_name_len: usize,

    /// Die seed for reproducible sessions (random when unset)
    pub die_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scheme: SchemePreset::Standard,
            categories: None,
            seam_tolerance: SEAM_TOLERANCE,
            max_name_len: MAX_NAME_LEN,
            die_seed: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.seam_tolerance.is_finite()
            || self.seam_tolerance < 0.0
            || self.seam_tolerance >= std::f32::consts::PI
        {
            return Err(ConfigurationError::InvalidSetting {
                field: "seam_tolerance",
                reason: format!("{} is not in [0, π)", self.seam_tolerance),
            });
        }
        if self.max_name_len == 0 {
            return Err(ConfigurationError::InvalidSetting {
                field: "max_name_len",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(categories) = &self.categories {
            if categories.len() != crate::consts::CATEGORY_COUNT {
                return Err(ConfigurationError::CategoryCount(categories.len()));
            }
        }
        Ok(())
    }

    /// Select a built-in scheme by name
    pub fn set_scheme(&mut self, name: &str) -> Result<(), ConfigurationError> {
        self.scheme = SchemePreset::from_str(name)
            .ok_or_else(|| ConfigurationError::UnknownScheme(name.to_string()))?;
        self.categories = None;
        log::info!("Using {} category scheme", self.scheme.as_str());
        Ok(())
    }

    /// The category scheme these settings describe
    pub fn category_scheme(&self) -> Result<CategoryScheme, ConfigurationError> {
        match &self.categories {
            Some(custom) => CategoryScheme::from_infos(custom.clone())
                .ok_or(ConfigurationError::CategoryCount(custom.len())),
            None => Ok(self.scheme.scheme()),
        }
    }
}
