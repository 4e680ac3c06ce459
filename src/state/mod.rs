//! State Module - Runtime state behind the tab bar
//!
//! - **Mounts** - visited set and lazy-mount decisions
//! - **Layouts** - last measured box per tab button
//! - **Animate** - spring-driven indicator, resync handle, frame clock
//! - **Orientation** - portrait/landscape flips trigger a resync
//! - **Back action** - system back triggers a resync, never navigation
//! - **Host** - host platform contract and listener cleanup
//! - **Input** - crossterm terminal host

pub mod animate;
pub mod back_action;
pub mod host;
pub mod input;
pub mod layouts;
pub mod mounts;
pub mod orientation;

pub use animate::{
    Axis, FrameClock, IndicatorController, IndicatorState, IndicatorTransform, Phase,
    ResyncHandle,
};
pub use back_action::BackActionInterceptor;
pub use host::{BackActionListener, Cleanup, DimensionListener, HostPlatform, ListenerGuard};
pub use input::{HostEvent, TerminalHost};
pub use layouts::LayoutRegistry;
pub use mounts::LazyMountTracker;
pub use orientation::OrientationWatcher;
