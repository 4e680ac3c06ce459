//! # spark-tabs
//!
//! Bottom tab navigation controller for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity, [Taffy](https://github.com/DioxusLabs/taffy) for
//! measuring the tab row and [crossterm](https://github.com/crossterm-rs/crossterm)
//! for the terminal host.
//!
//! ## Architecture
//!
//! An external navigation container owns the routes and the focused index.
//! The tab bar reads them, tracks which screens have been visited, records
//! each tab button's measured box, and animates an indicator toward the
//! focused tab with damped springs:
//!
//! ```text
//! NavigationState ─► TabBar ─► TabBarView (buttons, screens, indicator)
//!                      ▲
//! HostPlatform ────────┘ dimensions, back action, safe area
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, TabLayout, Dimensions, RenderSet, etc.)
//! - [`config`] - Typed configuration, loadable from TOML
//! - [`theme`] - Colors, per-tab color resolution, display policy
//! - [`navigation`] - Routes, labels, the `Navigator` contract
//! - [`state`] - Mount tracking, layouts, indicator animation, host listeners
//! - [`layout`] - Taffy tab row measurement
//! - [`primitives`] - The `TabBar` component

pub mod config;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod primitives;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{DisplayModes, IndicatorConfig, SpringConfig, TabBarConfig, TabColors};
pub use error::TabBarError;

pub use layout::{compute_tab_row, TabContentSize};

pub use navigation::{
    EventOutcome, IconProps, IconRenderer, Label, NavigationState, Navigator, RenderedContent,
    Route, RouteOptions, TabEvent, TabEventKind,
};

pub use primitives::{
    PressOutcome, ScreenPresence, ScreenSlot, TabBar, TabBarView, TabButtonView,
};

pub use state::{
    FrameClock, HostEvent, HostPlatform, IndicatorState, IndicatorTransform, ResyncHandle,
    TerminalHost,
};

pub use theme::{PerTabColor, ThemeColor};
