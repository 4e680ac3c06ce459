//! Layout Module
//!
//! Measures the tab row with [Taffy](https://github.com/DioxusLabs/taffy).
//! Hosts that measure tab buttons themselves can skip this and feed boxes
//! straight into [`TabBar::on_tab_layout`](crate::primitives::TabBar::on_tab_layout).

pub mod tab_row;

pub use tab_row::{compute_tab_row, content_size, label_width, TabContentSize};
