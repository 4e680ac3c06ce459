//! Orientation Watcher - resync the indicator when portrait/landscape flips.
//!
//! Every dimension-change notification is classified as portrait
//! (`height >= width`) or landscape. Only a change of that classification
//! requests a resync; plain resizes within the same orientation do not.

use spark_signals::{signal, Signal};

use crate::types::{Dimensions, Orientation};

use super::animate::ResyncHandle;

pub struct OrientationWatcher {
    portrait: Signal<bool>,
    dimensions: Dimensions,
    resync: ResyncHandle,
    flips: usize,
}

impl OrientationWatcher {
    pub fn new(initial: Dimensions, resync: ResyncHandle) -> Self {
        Self {
            portrait: signal(initial.is_portrait()),
            dimensions: initial,
            resync,
            flips: 0,
        }
    }

    /// Handle a dimension-change notification. Returns true if the
    /// orientation flipped (and a resync was requested).
    pub fn on_dimensions_change(&mut self, dimensions: Dimensions) -> bool {
        self.dimensions = dimensions;

        let portrait = dimensions.is_portrait();
        if portrait == self.portrait.get() {
            return false;
        }

        self.portrait.set(portrait);
        self.flips += 1;
        log::debug!(
            "orientation flipped to {:?} ({}x{})",
            dimensions.orientation(),
            dimensions.width,
            dimensions.height
        );
        self.resync.resync();
        true
    }

    pub fn orientation(&self) -> Orientation {
        if self.portrait.get() {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    pub fn is_portrait(&self) -> bool {
        self.portrait.get()
    }

    pub fn portrait_signal(&self) -> Signal<bool> {
        self.portrait.clone()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn flip_count(&self) -> usize {
        self.flips
    }
}
