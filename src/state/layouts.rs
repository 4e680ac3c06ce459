//! Layout Registry - last measured box of each tab button.
//!
//! Entries are overwritten on every measurement and live for the session.

use std::collections::HashMap;

use crate::types::TabLayout;

#[derive(Debug, Default)]
pub struct LayoutRegistry {
    boxes: HashMap<usize, TabLayout>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the box for `index`. Returns true if it differs from the
    /// previously recorded one.
    pub fn record(&mut self, index: usize, layout: TabLayout) -> bool {
        self.boxes.insert(index, layout) != Some(layout)
    }

    pub fn get(&self, index: usize) -> Option<TabLayout> {
        self.boxes.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
