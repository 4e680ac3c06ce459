//! Indicator Animation - spring-driven position and size of the focus dot.
//!
//! The indicator has three independent axes (x position, width, height).
//! Each axis is a damped spring that is either Idle or Animating:
//!
//! ```text
//! Idle --retarget/resync--> Animating --settle--> Idle (previous_position_x updated)
//!                             |    ^
//!                             +----+ retarget/resync restarts from the live value
//! ```
//!
//! Springs are stepped with the closed-form solution of the damped
//! oscillator, so a step is exact for any frame duration.
//!
//! # Frame clock
//!
//! [`FrameClock`] counts frames on a background thread. Nothing else runs
//! there: the main thread drains the count and steps the springs itself,
//! so settle callbacks and all indicator state stay single-writer.
//!
//! # Example
//!
//! ```ignore
//! use spark_tabs::state::animate::{FrameClock, IndicatorController};
//!
//! let mut indicator = IndicatorController::default();
//! indicator.retarget(TabLayout::new(40.0, 0.0, 60.0, 30.0));
//!
//! let mut clock = FrameClock::start(60);
//! while indicator.tick(clock.take_elapsed()) {
//!     // draw indicator.transform()
//! }
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use spark_signals::{signal, Signal};

use crate::config::{IndicatorConfig, SpringConfig, TabBarConfig};
use crate::types::{TabLayout, WritingDirection};

// =============================================================================
// SPRING
// =============================================================================

/// Animation phase of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    phase: Phase,
}

impl Spring {
    fn new(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            phase: Phase::Idle,
        }
    }

    /// Start (or restart) a transition. Value and velocity carry over.
    fn start(&mut self, target: f32) {
        self.target = target;
        self.phase = Phase::Animating;
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
        self.phase = Phase::Idle;
    }

    /// Advance by `dt` seconds. Returns true if the spring settled during
    /// this step.
    fn step(&mut self, dt: f32, config: &SpringConfig) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }
        if config.stiffness <= 0.0 {
            self.snap();
            return true;
        }

        let (displacement, velocity) =
            oscillate(self.value - self.target, self.velocity, dt, config);
        self.value = self.target + displacement;
        self.velocity = velocity;

        if displacement.abs() <= config.rest_displacement
            && velocity.abs() <= config.rest_velocity
        {
            self.snap();
            return true;
        }
        false
    }
}

/// Closed-form damped oscillator: displacement and velocity after `t`
/// seconds, starting from displacement `x0` and velocity `v0`.
fn oscillate(x0: f32, v0: f32, t: f32, config: &SpringConfig) -> (f32, f32) {
    let (x0, v0, t) = (x0 as f64, v0 as f64, t as f64);
    let omega = (config.stiffness as f64).sqrt();
    let zeta = (config.damping_ratio as f64).max(0.0);

    let (x, v) = if (zeta - 1.0).abs() < 1e-4 {
        // Critically damped
        let decay = (-omega * t).exp();
        let c = v0 + omega * x0;
        (decay * (x0 + c * t), decay * (v0 - omega * c * t))
    } else if zeta < 1.0 {
        // Under-damped
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let b = (v0 + zeta * omega * x0) / omega_d;
        (
            decay * (x0 * cos + b * sin),
            decay * (v0 * cos - (zeta * omega * v0 + omega * omega * x0) / omega_d * sin),
        )
    } else {
        // Over-damped
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
    };

    (x as f32, v as f32)
}

// =============================================================================
// INDICATOR STATE
// =============================================================================

/// Animated indicator values, read by the renderer every frame.
///
/// `position_x` is always in the row's left-to-right space; mirroring for
/// right-to-left happens in [`IndicatorController::transform`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorState {
    pub position_x: f32,
    pub width: f32,
    pub height: f32,
    /// Start point of the next transition; updated on retarget and on settle.
    pub previous_position_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    PositionX,
    Width,
    Height,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::PositionX, Axis::Width, Axis::Height];
}

/// What the renderer applies to the indicator view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorTransform {
    pub translate_x: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

type SettleListener = Box<dyn Fn(Axis, f32)>;

// =============================================================================
// INDICATOR CONTROLLER
// =============================================================================

pub struct IndicatorController {
    x: Spring,
    width: Spring,
    height: Spring,
    previous_position_x: f32,
    spring: SpringConfig,
    direction: WritingDirection,
    indicator: IndicatorConfig,
    state: Signal<IndicatorState>,
    settle_listeners: Vec<SettleListener>,
    resyncs: usize,
}

impl IndicatorController {
    pub fn new(spring: SpringConfig, direction: WritingDirection, indicator: IndicatorConfig) -> Self {
        Self {
            x: Spring::new(0.0),
            width: Spring::new(0.0),
            height: Spring::new(0.0),
            previous_position_x: 0.0,
            spring,
            direction,
            indicator,
            state: signal(IndicatorState::default()),
            settle_listeners: Vec::new(),
            resyncs: 0,
        }
    }

    pub fn from_config(config: &TabBarConfig) -> Self {
        Self::new(config.spring, config.direction, config.indicator)
    }

    fn spring_mut(&mut self, axis: Axis) -> &mut Spring {
        match axis {
            Axis::PositionX => &mut self.x,
            Axis::Width => &mut self.width,
            Axis::Height => &mut self.height,
        }
    }

    fn spring(&self, axis: Axis) -> &Spring {
        match axis {
            Axis::PositionX => &self.x,
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }

    /// Animate toward the focused tab's box.
    ///
    /// Runs a transition even when `target` equals the current target, so
    /// settle bookkeeping is the same for every call.
    pub fn retarget(&mut self, target: TabLayout) {
        let height = self.indicator.height.unwrap_or(target.height);
        log::debug!(
            "indicator retarget: x {} -> {}, width {}, height {}",
            self.x.value,
            target.x,
            target.width,
            height
        );

        self.previous_position_x = self.x.value;
        self.x.start(target.x);
        self.width.start(target.width);
        self.height.start(height);
        self.publish();
    }

    /// Replay the transition toward the last known target, starting from
    /// the live values. Used when the host may have redrawn without a new
    /// measurement (rotation, back action).
    pub fn resync(&mut self) {
        self.resyncs += 1;
        log::debug!("indicator resync #{} at x {}", self.resyncs, self.x.value);

        for axis in Axis::ALL {
            let spring = self.spring_mut(axis);
            let target = spring.target;
            spring.start(target);
        }
        self.publish();
    }

    /// Advance all axes by `dt`. Returns true while any axis is animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let dt = dt.as_secs_f32();
        let config = self.spring;

        let mut settled: Vec<(Axis, f32)> = Vec::new();
        for axis in Axis::ALL {
            let spring = self.spring_mut(axis);
            if spring.step(dt, &config) {
                settled.push((axis, spring.value));
            }
        }

        for &(axis, value) in &settled {
            log::trace!("indicator {axis:?} settled at {value}");
            if axis == Axis::PositionX {
                self.previous_position_x = value;
            }
        }
        self.publish();

        for &(axis, value) in &settled {
            for listener in &self.settle_listeners {
                listener(axis, value);
            }
        }

        self.is_animating()
    }

    fn publish(&self) {
        self.state.set(self.state());
    }

    /// Register a callback fired on the main thread whenever an axis settles.
    pub fn on_settle(&mut self, listener: impl Fn(Axis, f32) + 'static) {
        self.settle_listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> IndicatorState {
        IndicatorState {
            position_x: self.x.value,
            width: self.width.value,
            height: self.height.value,
            previous_position_x: self.previous_position_x,
        }
    }

    /// Signal updated after every retarget, resync and tick.
    pub fn state_signal(&self) -> Signal<IndicatorState> {
        self.state.clone()
    }

    /// Current target as a box (y is always 0).
    pub fn target(&self) -> TabLayout {
        TabLayout::new(self.x.target, 0.0, self.width.target, self.height.target)
    }

    pub fn phase(&self, axis: Axis) -> Phase {
        self.spring(axis).phase
    }

    pub fn is_animating(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.phase(axis) == Phase::Animating)
    }

    pub fn resync_count(&self) -> usize {
        self.resyncs
    }

    pub fn direction(&self) -> WritingDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: WritingDirection) {
        self.direction = direction;
    }

    /// Render transform. Right-to-left negates the horizontal offset.
    pub fn transform(&self) -> IndicatorTransform {
        let translate_x = match self.direction {
            WritingDirection::Ltr => self.x.value,
            WritingDirection::Rtl => -self.x.value,
        };
        IndicatorTransform {
            translate_x,
            width: self.width.value,
            height: self.height.value,
            corner_radius: self.indicator.corner_radius,
        }
    }
}

impl Default for IndicatorController {
    fn default() -> Self {
        Self::new(
            SpringConfig::default(),
            WritingDirection::default(),
            IndicatorConfig::default(),
        )
    }
}

// =============================================================================
// RESYNC HANDLE
// =============================================================================

/// Weak handle used by orientation and back-action listeners.
///
/// Host subscriptions hold this rather than the indicator itself, so a
/// subscription that outlives the tab bar does nothing.
#[derive(Clone)]
pub struct ResyncHandle {
    indicator: Weak<RefCell<IndicatorController>>,
}

impl ResyncHandle {
    pub fn new(indicator: &Rc<RefCell<IndicatorController>>) -> Self {
        Self {
            indicator: Rc::downgrade(indicator),
        }
    }

    /// Returns false if the indicator is gone or currently borrowed.
    pub fn resync(&self) -> bool {
        let Some(indicator) = self.indicator.upgrade() else {
            log::warn!("resync requested after the tab bar was dropped");
            return false;
        };
        let Ok(mut indicator) = indicator.try_borrow_mut() else {
            log::warn!("resync requested while the indicator is busy");
            return false;
        };
        indicator.resync();
        true
    }
}

// =============================================================================
// FRAME CLOCK
// =============================================================================

/// Background frame counter.
///
/// The thread only increments a counter; [`take_elapsed`](Self::take_elapsed)
/// turns the frames seen since the last call into elapsed time on the
/// calling thread.
pub struct FrameClock {
    fps: u32,
    frames: Arc<AtomicU64>,
    consumed: u64,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameClock {
    /// Start a clock ticking at `fps`. 0 gives a stopped clock.
    pub fn start(fps: u32) -> Self {
        let frames = Arc::new(AtomicU64::new(0));
        let running = Arc::new(AtomicBool::new(fps > 0));

        let handle = if fps == 0 {
            None
        } else {
            let interval = Duration::from_secs_f64(1.0 / fps as f64);
            let frames = frames.clone();
            let running = running.clone();
            Some(thread::spawn(move || {
                while running.load(Ordering::SeqCst) {
                    thread::sleep(interval);
                    if running.load(Ordering::SeqCst) {
                        frames.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }))
        };

        Self {
            fps,
            frames,
            consumed: 0,
            running,
            handle,
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frame_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / self.fps as f64)
        }
    }

    /// Time covered by the frames counted since the previous call.
    pub fn take_elapsed(&mut self) -> Duration {
        let total = self.frames.load(Ordering::SeqCst);
        let pending = total.saturating_sub(self.consumed);
        self.consumed = total;
        self.frame_duration().mul_f64(pending as f64)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop counting. The thread exits after its current sleep; we don't
    /// join here to avoid blocking the caller.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.handle.take();
    }
}

impl Drop for FrameClock {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// TESTS
// =============================================================================
