//! Terminal host - crossterm adapter for [`HostPlatform`].
//!
//! Maps crossterm events onto the host contract:
//! - `Resize(cols, rows)` becomes a dimension change
//! - a configurable key (Esc by default) becomes the back action
//!
//! Terminals have no hardware back key, so a host built with `back_key:
//! None` reports the back action as unsupported and the tab bar installs
//! no interceptor.
//!
//! # Example
//!
//! ```ignore
//! use spark_tabs::state::input::{HostEvent, TerminalHost};
//! use std::time::Duration;
//!
//! let host = TerminalHost::detect(Some(KeyCode::Esc))?;
//! loop {
//!     match host.poll_event(Duration::from_millis(16))? {
//!         Some(HostEvent::Back { handled: false }) => break,
//!         _ => {}
//!     }
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{poll, read, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

use crate::types::Dimensions;

use super::host::{BackActionListener, Cleanup, DimensionListener, HostPlatform};

// =============================================================================
// HOST EVENT
// =============================================================================

/// What a routed terminal event turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Resized(Dimensions),
    /// `handled` is true if any listener consumed the back action.
    Back { handled: bool },
    /// Any other key press, left for the application.
    Key(KeyEvent),
    Ignored,
}

// =============================================================================
// LISTENER LIST
// =============================================================================

struct ListenerList<T: ?Sized> {
    next_id: Cell<usize>,
    entries: RefCell<Vec<(usize, Rc<T>)>>,
}

impl<T: ?Sized + 'static> ListenerList<T> {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            next_id: Cell::new(0),
            entries: RefCell::new(Vec::new()),
        })
    }

    fn add(self: &Rc<Self>, listener: Rc<T>) -> Cleanup {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, listener));

        let list = Rc::downgrade(self);
        Box::new(move || {
            if let Some(list) = list.upgrade() {
                list.entries.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Snapshot so listeners may subscribe or unsubscribe while being called.
    fn snapshot(&self) -> Vec<Rc<T>> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

// =============================================================================
// TERMINAL HOST
// =============================================================================

pub struct TerminalHost {
    size: Cell<Dimensions>,
    back_key: Option<KeyCode>,
    dimension_listeners: Rc<ListenerList<dyn Fn(Dimensions)>>,
    back_listeners: Rc<ListenerList<dyn Fn() -> bool>>,
}

impl TerminalHost {
    pub fn new(size: Dimensions, back_key: Option<KeyCode>) -> Self {
        Self {
            size: Cell::new(size),
            back_key,
            dimension_listeners: ListenerList::new(),
            back_listeners: ListenerList::new(),
        }
    }

    /// Build a host sized to the current terminal.
    pub fn detect(back_key: Option<KeyCode>) -> io::Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok(Self::new(
            Dimensions::new(cols as f32, rows as f32),
            back_key,
        ))
    }

    /// Apply new dimensions and notify listeners.
    pub fn resize(&self, size: Dimensions) {
        self.size.set(size);
        for listener in self.dimension_listeners.snapshot() {
            listener(size);
        }
    }

    /// Deliver a back action. Returns true if any listener handled it.
    pub fn back(&self) -> bool {
        let mut handled = false;
        for listener in self.back_listeners.snapshot() {
            handled |= listener();
        }
        handled
    }

    /// Route one crossterm event.
    pub fn route_event(&self, event: CrosstermEvent) -> HostEvent {
        match event {
            CrosstermEvent::Resize(cols, rows) => {
                let size = Dimensions::new(cols as f32, rows as f32);
                self.resize(size);
                HostEvent::Resized(size)
            }
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if self.back_key == Some(key.code) {
                    HostEvent::Back {
                        handled: self.back(),
                    }
                } else {
                    HostEvent::Key(key)
                }
            }
            _ => HostEvent::Ignored,
        }
    }

    /// Poll for an event with timeout and route it.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<HostEvent>> {
        if poll(timeout)? {
            Ok(Some(self.route_event(read()?)))
        } else {
            Ok(None)
        }
    }

    pub fn dimension_listener_count(&self) -> usize {
        self.dimension_listeners.len()
    }

    pub fn back_listener_count(&self) -> usize {
        self.back_listeners.len()
    }
}

impl HostPlatform for TerminalHost {
    fn dimensions(&self) -> Dimensions {
        self.size.get()
    }

    fn subscribe_dimensions(&self, listener: DimensionListener) -> Cleanup {
        self.dimension_listeners.add(Rc::from(listener))
    }

    fn subscribe_back_action(&self, listener: BackActionListener) -> Option<Cleanup> {
        self.back_key?;
        Some(self.back_listeners.add(Rc::from(listener)))
    }
}

// =============================================================================
// TESTS
// =============================================================================
