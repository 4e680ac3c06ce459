//! Primitives - the tab bar component.
//!
//! [`TabBar`] wires navigation state, host listeners and the indicator
//! into a [`TabBarView`] the host draws each frame:
//!
//! ```text
//! measurement   -> LayoutRegistry      -> retarget
//! focus change  -> LazyMountTracker    -> screen slots
//! rotation/back -> ResyncHandle        -> resync
//! ```

mod tab_bar;

pub use tab_bar::{
    PressOutcome, ScreenPresence, ScreenSlot, TabBar, TabBarView, TabButtonView,
};
