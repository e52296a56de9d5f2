//! Number display configuration

use serde::Deserialize;

use crate::format::DisplayMode;

/// Number display settings
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    /// Render big numbers as `1.2e6` instead of `1.2M`
    pub scientific_notation: bool,
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub scientific_notation: Option<bool>,
}

impl DisplayConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            scientific_notation: file.scientific_notation.unwrap_or(false),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_scientific(self.scientific_notation)
    }
}
