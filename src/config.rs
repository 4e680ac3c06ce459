//! Tab bar configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! lazy = true
//! layout_mode = "compact"
//! direction = "rtl"
//!
//! [colors]
//! active_tint = ["red", "blue"]
//! active_tint_default = "gray"
//!
//! [display]
//! unfocused = "icon_only"
//!
//! [spring]
//! stiffness = 400.0
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TabBarError;
use crate::theme::{PerTabColor, ThemeColor};
use crate::types::{DisplayMode, EdgeInsets, TabLayoutMode, WritingDirection};

// =============================================================================
// Nested sections
// =============================================================================

/// Tint and background colors, per tab or global.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabColors {
    pub active_tint: Option<PerTabColor>,
    pub inactive_tint: Option<PerTabColor>,
    pub active_background: Option<PerTabColor>,
    pub active_tint_default: ThemeColor,
    pub inactive_tint_default: ThemeColor,
    pub active_background_default: ThemeColor,
}

impl Default for TabColors {
    fn default() -> Self {
        Self {
            active_tint: None,
            inactive_tint: None,
            active_background: None,
            active_tint_default: ThemeColor::Ansi(12),
            inactive_tint_default: ThemeColor::Ansi(8),
            active_background_default: ThemeColor::Default,
        }
    }
}

/// What to show in each focus state. `None` means both icon and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DisplayModes {
    pub focused: Option<DisplayMode>,
    pub unfocused: Option<DisplayMode>,
}

/// Indicator shape.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub corner_radius: f32,
    /// Fixed indicator height. When unset the measured tab height is used.
    pub height: Option<f32>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            corner_radius: 8.0,
            height: None,
        }
    }
}

/// Damped spring parameters shared by all indicator axes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    /// 1.0 is critically damped; below 1.0 the spring overshoots.
    pub damping_ratio: f32,
    pub rest_displacement: f32,
    pub rest_velocity: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping_ratio: 1.0,
            rest_displacement: 0.05,
            rest_velocity: 0.05,
        }
    }
}

// =============================================================================
// TabBarConfig
// =============================================================================

/// Static configuration for a tab bar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabBarConfig {
    pub padding: EdgeInsets,
    pub background: ThemeColor,
    pub colors: TabColors,
    pub indicator: IndicatorConfig,
    pub display: DisplayModes,
    /// Defer mounting a screen until its tab is first focused.
    pub lazy: bool,
    pub layout_mode: TabLayoutMode,
    pub direction: WritingDirection,
    pub spring: SpringConfig,
    pub icon_size: f32,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            padding: EdgeInsets::ZERO,
            background: ThemeColor::Default,
            colors: TabColors::default(),
            indicator: IndicatorConfig::default(),
            display: DisplayModes::default(),
            lazy: true,
            layout_mode: TabLayoutMode::default(),
            direction: WritingDirection::default(),
            spring: SpringConfig::default(),
            icon_size: 1.0,
        }
    }
}

impl TabBarConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, TabBarError> {
        let config = toml::from_str(input)?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TabBarError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded tab bar config from {}", path.display());
        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================
