//! Error type for the construction and I/O boundaries.
//!
//! The controller operations themselves (focus changes, measurements,
//! retarget/resync, rendering) never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabBarError {
    #[error("navigation state has no routes")]
    EmptyRoutes,

    #[error("focused index {index} is out of range for {len} routes")]
    FocusOutOfRange { index: usize, len: usize },

    #[error("duplicate route key `{0}`")]
    DuplicateRouteKey(String),

    #[error("invalid tab bar config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read tab bar config: {0}")]
    Io(#[from] std::io::Error),

    #[error("tab row layout failed: {0}")]
    Layout(String),
}
