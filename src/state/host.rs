//! Host platform contract and listener lifetime.
//!
//! The tab bar subscribes to dimension changes and (where the platform has
//! one) the system back action when it mounts. Each subscription hands back
//! a cleanup closure; [`ListenerGuard`] runs them all on unmount or drop,
//! whichever comes first.

use crate::types::{Dimensions, EdgeInsets};

/// Cleanup function returned by a subscription.
pub type Cleanup = Box<dyn FnOnce()>;

pub type DimensionListener = Box<dyn Fn(Dimensions)>;

/// Returns true if the listener handled the back action.
pub type BackActionListener = Box<dyn Fn() -> bool>;

pub trait HostPlatform {
    fn dimensions(&self) -> Dimensions;

    /// Used only to pad the bottom of the tab bar.
    fn safe_area_insets(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    fn subscribe_dimensions(&self, listener: DimensionListener) -> Cleanup;

    /// `None` means the platform has no back action.
    fn subscribe_back_action(&self, listener: BackActionListener) -> Option<Cleanup>;
}

/// Owns subscription cleanups and releases them exactly once.
#[derive(Default)]
pub struct ListenerGuard {
    cleanups: Vec<Cleanup>,
}

impl ListenerGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cleanup: Cleanup) {
        self.cleanups.push(cleanup);
    }

    pub fn len(&self) -> usize {
        self.cleanups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleanups.is_empty()
    }

    /// Run every cleanup now.
    pub fn release(&mut self) {
        let count = self.cleanups.len();
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        if count > 0 {
            log::debug!("released {count} host listeners");
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_cleanup(counter: &Rc<Cell<usize>>) -> Cleanup {
        let counter = counter.clone();
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn test_release_runs_each_cleanup_once() {
        let released = Rc::new(Cell::new(0));
        let mut guard = ListenerGuard::new();
        guard.push(counting_cleanup(&released));
        guard.push(counting_cleanup(&released));
        assert_eq!(guard.len(), 2);

        guard.release();
        assert_eq!(released.get(), 2);
        assert!(guard.is_empty());

        drop(guard);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn test_drop_releases() {
        let released = Rc::new(Cell::new(0));
        {
            let mut guard = ListenerGuard::new();
            guard.push(counting_cleanup(&released));
        }
        assert_eq!(released.get(), 1);
    }
}
