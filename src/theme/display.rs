//! Display Policy - which parts of a tab to draw and in which colors.
//!
//! | focused | mode              | result          |
//! |---------|-------------------|-----------------|
//! | any     | Both (or unset)   | ICON \| LABEL   |
//! | any     | LabelOnly         | LABEL           |
//! | any     | IconOnly          | ICON            |
//!
//! The focus state only selects which configured mode applies.

use crate::config::{DisplayModes, TabColors};
use crate::types::{DisplayMode, RenderSet};

use super::{resolve_tab_color, ThemeColor};

/// Parts to render for a resolved mode. Unset means `Both`.
pub fn render_set(mode: Option<DisplayMode>) -> RenderSet {
    match mode.unwrap_or_default() {
        DisplayMode::Both => RenderSet::ICON | RenderSet::LABEL,
        DisplayMode::LabelOnly => RenderSet::LABEL,
        DisplayMode::IconOnly => RenderSet::ICON,
    }
}

/// Parts to render for a tab in the given focus state.
pub fn decide(focused: bool, modes: &DisplayModes) -> RenderSet {
    let mode = if focused { modes.focused } else { modes.unfocused };
    render_set(mode)
}

/// Resolved colors for one tab button.
#[derive(Debug, Clone, PartialEq)]
pub struct TabStyle {
    pub tint: ThemeColor,
    pub background: ThemeColor,
}

/// Resolve tint and background for tab `index`.
///
/// Unfocused tabs never get a background; the indicator is the only
/// highlight behind them.
pub fn resolve_style(colors: &TabColors, index: usize, focused: bool) -> TabStyle {
    if focused {
        TabStyle {
            tint: resolve_tab_color(colors.active_tint.as_ref(), index, &colors.active_tint_default),
            background: resolve_tab_color(
                colors.active_background.as_ref(),
                index,
                &colors.active_background_default,
            ),
        }
    } else {
        TabStyle {
            tint: resolve_tab_color(
                colors.inactive_tint.as_ref(),
                index,
                &colors.inactive_tint_default,
            ),
            background: ThemeColor::Default,
        }
    }
}
