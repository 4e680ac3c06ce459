//! Theme colors for the tab bar.
//!
//! # Color Types
//!
//! - `ThemeColor::Default` - Uses the host's default color
//! - `ThemeColor::Ansi(n)` - ANSI palette index (0-255)
//! - `ThemeColor::Rgb(rgba)` - Explicit RGB color
//! - `ThemeColor::Str(s)` - String to be parsed (hex, name, keyword)
//!
//! Tint and background colors can be configured once for all tabs or per
//! tab index through [`PerTabColor`], and are always resolved through
//! [`resolve_tab_color`].
//!
//! # Example
//!
//! ```rust
//! use spark_tabs::theme::{resolve_tab_color, PerTabColor, ThemeColor};
//!
//! let active = PerTabColor::PerIndex(vec!["red".into(), "blue".into()]);
//! let fallback = ThemeColor::from("gray");
//!
//! assert_eq!(resolve_tab_color(Some(&active), 1, &fallback), ThemeColor::from("blue"));
//! assert_eq!(resolve_tab_color(Some(&active), 2, &fallback), fallback);
//! ```

use serde::Deserialize;

use crate::types::Rgba;

pub mod display;

pub use display::{decide, render_set, resolve_style, TabStyle};

// =============================================================================
// ThemeColor - A color that can be ANSI, RGB, or string
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawColor")]
pub enum ThemeColor {
    /// Use the host's default color.
    Default,
    /// ANSI palette index (0-255).
    Ansi(u8),
    /// Explicit RGB color.
    Rgb(Rgba),
    /// String to be parsed (hex, basic name, keyword).
    Str(String),
}

impl ThemeColor {
    /// Resolve to Rgba. Parses string if needed.
    ///
    /// `Str` values that fail to parse resolve to magenta so a typo in
    /// config stays visible instead of silently disappearing.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
            Self::Str(s) => Rgba::parse(s).unwrap_or(Rgba::MAGENTA),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

impl From<&str> for ThemeColor {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ThemeColor {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// Config representation: an ANSI index or a color string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Ansi(u8),
    Str(String),
}

impl From<RawColor> for ThemeColor {
    fn from(raw: RawColor) -> Self {
        match raw {
            RawColor::Ansi(index) => Self::Ansi(index),
            RawColor::Str(s) if s.eq_ignore_ascii_case("default") => Self::Default,
            RawColor::Str(s) => Self::Str(s),
        }
    }
}

// =============================================================================
// PerTabColor - One color for every tab, or one per tab index
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PerTabColor {
    /// One entry per tab index. Missing entries fall back to the default.
    PerIndex(Vec<ThemeColor>),
    /// Same color for every tab.
    Uniform(ThemeColor),
}

impl PerTabColor {
    /// Color configured for `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ThemeColor> {
        match self {
            Self::Uniform(color) => Some(color),
            Self::PerIndex(colors) => colors.get(index),
        }
    }
}

impl From<ThemeColor> for PerTabColor {
    fn from(color: ThemeColor) -> Self {
        Self::Uniform(color)
    }
}

impl From<Vec<ThemeColor>> for PerTabColor {
    fn from(colors: Vec<ThemeColor>) -> Self {
        Self::PerIndex(colors)
    }
}

/// Resolve the color for tab `index`.
///
/// Falls back to `fallback` when nothing is configured or the per-index
/// list has no entry for `index`.
pub fn resolve_tab_color(
    colors: Option<&PerTabColor>,
    index: usize,
    fallback: &ThemeColor,
) -> ThemeColor {
    colors
        .and_then(|colors| colors.get(index))
        .unwrap_or(fallback)
        .clone()
}

// =============================================================================
// Tests
// =============================================================================
