//! Overlay configuration with documented defaults
//!
//! Read once at startup (usually from TOML) and passed by reference into
//! the renderer. Nothing here is reconfigured while a run is in progress.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{OverlayError, Result};
use super::types::OverlayCategory;
use crate::render::colors::{self, Color};

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 3600;

/// Per-category enable flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryPolicy {
    pub navigation: bool,
    pub order: bool,
    pub comet: bool,
    pub kite: bool,
    pub map: bool,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            navigation: true,
            order: true,
            comet: false,
            kite: false,
            map: true,
        }
    }
}

impl CategoryPolicy {
    /// Every category switched on
    pub fn all() -> Self {
        Self {
            navigation: true,
            order: true,
            comet: true,
            kite: true,
            map: true,
        }
    }

    /// Every category switched off
    pub fn none() -> Self {
        Self {
            navigation: false,
            order: false,
            comet: false,
            kite: false,
            map: false,
        }
    }

    pub fn is_enabled(&self, category: OverlayCategory) -> bool {
        match category {
            OverlayCategory::Navigation => self.navigation,
            OverlayCategory::Order => self.order,
            OverlayCategory::Comet => self.comet,
            OverlayCategory::Kite => self.kite,
            OverlayCategory::Map => self.map,
        }
    }

    pub fn set(&mut self, category: OverlayCategory, enabled: bool) {
        let flag = match category {
            OverlayCategory::Navigation => &mut self.navigation,
            OverlayCategory::Order => &mut self.order,
            OverlayCategory::Comet => &mut self.comet,
            OverlayCategory::Kite => &mut self.kite,
            OverlayCategory::Map => &mut self.map,
        };
        *flag = enabled;
    }
}

/// Global switch plus per-category flags.
///
/// Canvas presence is the third input to the gate and lives with the
/// renderer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayPolicy {
    pub enabled: bool,
    pub categories: CategoryPolicy,
}

impl OverlayPolicy {
    pub fn new(enabled: bool, categories: CategoryPolicy) -> Self {
        Self {
            enabled,
            categories,
        }
    }

    /// True when both the master switch and the category flag are on
    pub fn allows(&self, category: OverlayCategory) -> bool {
        self.enabled && self.categories.is_enabled(category)
    }
}

/// Where per-tick snapshots land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Output directory. Must exist before the first flush.
    pub dir: PathBuf,

    /// File extension, which also selects the image encoder
    pub extension: String,

    /// Zero-padding width for the tick number in file names.
    ///
    /// 0 leaves ticks unpadded (`7-12.png`); 6 gives `7-000012.png`, which
    /// sorts lexicographically by tick within a process.
    pub tick_width: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("thoughts"),
            extension: "png".to_string(),
            tick_width: 0,
        }
    }
}

/// Complete overlay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Master switch for all diagnostic drawing.
    ///
    /// Off by default so production runs pay nothing for the overlay.
    pub enabled: bool,

    /// Fixed canvas width in pixels; height follows the world aspect ratio
    pub canvas_width: u32,

    /// Colour the canvas is reset to after each flush
    pub background: Color,

    pub categories: CategoryPolicy,

    pub snapshots: SnapshotConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            background: colors::BACKGROUND,
            categories: CategoryPolicy::default(),
            snapshots: SnapshotConfig::default(),
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("Loaded overlay config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: OverlayConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 {
            return Err(OverlayError::ConfigInvalid(
                "canvas_width must be positive".into(),
            ));
        }

        let ext = &self.snapshots.extension;
        if ext.is_empty() || ext.contains('.') {
            return Err(OverlayError::ConfigInvalid(format!(
                "snapshot extension {:?} must be non-empty and carry no dot",
                ext
            )));
        }

        Ok(())
    }

    /// The gate inputs carried by this config
    pub fn policy(&self) -> OverlayPolicy {
        OverlayPolicy::new(self.enabled, self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_settings() {
        let config = OverlayConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.canvas_width, 3600);
        assert!(config.categories.navigation);
        assert!(config.categories.order);
        assert!(!config.categories.comet);
        assert!(!config.categories.kite);
        assert!(config.categories.map);
        assert_eq!(config.snapshots.extension, "png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            enabled = true
            canvas_width = 1200

            [categories]
            comet = true
            map = false

            [snapshots]
            dir = "out/frames"
            tick_width = 5
        "#;
        let config = OverlayConfig::from_toml_str(toml_str).unwrap();
        assert!(config.enabled);
        assert_eq!(config.canvas_width, 1200);
        assert!(config.categories.comet);
        assert!(!config.categories.map);
        // Unspecified keys keep their defaults
        assert!(config.categories.navigation);
        assert_eq!(config.snapshots.dir, PathBuf::from("out/frames"));
        assert_eq!(config.snapshots.extension, "png");
        assert_eq!(config.snapshots.tick_width, 5);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = OverlayConfig::from_toml_str("canvas_width = 0").unwrap_err();
        assert!(matches!(err, OverlayError::ConfigInvalid(_)));
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let err = OverlayConfig::from_toml_str("[snapshots]\nextension = \".png\"").unwrap_err();
        assert!(matches!(err, OverlayError::ConfigInvalid(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = OverlayConfig::from_toml_str("enabled = ").unwrap_err();
        assert!(matches!(err, OverlayError::ConfigParse(_)));
    }

    #[test]
    fn test_policy_requires_master_switch() {
        let mut config = OverlayConfig::default();
        assert!(!config.policy().allows(OverlayCategory::Map));
        config.enabled = true;
        assert!(config.policy().allows(OverlayCategory::Map));
        assert!(!config.policy().allows(OverlayCategory::Kite));
    }

    #[test]
    fn test_category_set_roundtrip() {
        let mut categories = CategoryPolicy::none();
        for category in OverlayCategory::ALL {
            assert!(!categories.is_enabled(category));
            categories.set(category, true);
            assert!(categories.is_enabled(category));
        }
        assert_eq!(categories, CategoryPolicy::all());
    }
}
