//! Lazy-Mount Tracker - which screens have been visited.
//!
//! A screen is mounted once its tab has been focused and stays mounted for
//! the rest of the session, so switching tabs never rebuilds it. Routes
//! flagged `unmount_on_blur` are the exception: they are mounted only while
//! focused.
//!
//! The visited set is a `ReactiveSet`, so deriveds that iterate it re-run
//! when a new tab is visited.

use spark_signals::ReactiveSet;

pub struct LazyMountTracker {
    visited: ReactiveSet<usize>,
    focused: usize,
    lazy: bool,
    unmount_on_blur: Vec<bool>,
}

impl LazyMountTracker {
    /// `unmount_on_blur[i]` is the override for route `i`.
    pub fn new(initial_focused: usize, lazy: bool, unmount_on_blur: Vec<bool>) -> Self {
        let mut visited = ReactiveSet::new();
        visited.insert(initial_focused);
        Self {
            visited,
            focused: initial_focused,
            lazy,
            unmount_on_blur,
        }
    }

    /// Record a focus change. The index joins the visited set before any
    /// mount decision is made for it.
    pub fn focus(&mut self, index: usize) {
        if !self.visited.contains(&index) {
            log::debug!("tab {index} visited for the first time");
        }
        self.visited.insert(index);
        self.focused = index;
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Visited indices in ascending order.
    pub fn visited(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.visited.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    fn unmounts_on_blur(&self, index: usize) -> bool {
        self.unmount_on_blur.get(index).copied().unwrap_or(false)
    }

    /// Whether the screen at `index` should be instantiated.
    pub fn should_mount(&self, index: usize) -> bool {
        if self.unmounts_on_blur(index) {
            return index == self.focused;
        }
        if !self.lazy {
            return true;
        }
        index == self.focused || self.visited.contains(&index)
    }
}

// =============================================================================
// Tests
// =============================================================================
