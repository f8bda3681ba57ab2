// ABOUTME: Grid configuration handling.
// ABOUTME: Defines grid parameters and loads/saves them as TOML.

use serde::{Deserialize, Serialize};

use crate::Alignment;

/// Parameters describing a fixed-column grid.
///
/// The layout divides available space by `columns` and by the resulting row
/// count, so a column count of zero produces non-finite cell sizes rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns per row; must be at least 1 for well-formed output
    pub columns: usize,

    /// Vertical placement of elements within a row
    pub column_alignment: Alignment,

    /// Fixed gap between columns; `None` means no gap
    pub column_spacing: Option<f32>,

    /// Horizontal placement of rows within the grid
    pub row_alignment: Alignment,

    /// Fixed gap between rows; `None` means no gap
    pub row_spacing: Option<f32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 1,
            column_alignment: Alignment::Center,
            column_spacing: None,
            row_alignment: Alignment::Center,
            row_spacing: None,
        }
    }
}

impl GridConfig {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn column_alignment(mut self, alignment: Alignment) -> Self {
        self.column_alignment = alignment;
        self
    }

    pub fn column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = Some(spacing);
        self
    }

    pub fn row_alignment(mut self, alignment: Alignment) -> Self {
        self.row_alignment = alignment;
        self
    }

    pub fn row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = Some(spacing);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl GridConfig {
    /// Load a grid configuration from a TOML file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration to a TOML file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
