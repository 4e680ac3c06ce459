//! End-to-end tests for the tab bar against fake hosts and containers.
//!
//! Covers:
//! - listener lifecycle (mount, unmount, drop)
//! - orientation flips and back actions reaching the indicator
//! - press -> navigate -> focus -> retarget round trip
//!
//! Run with: cargo test --test tab_bar

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use spark_tabs::state::{BackActionListener, Cleanup, DimensionListener};
use spark_tabs::{
    Dimensions, EdgeInsets, EventOutcome, HostEvent, HostPlatform, NavigationState, Navigator,
    Orientation, PressOutcome, Route, ScreenPresence, TabBar, TabBarConfig, TabEvent,
    TabLayout, TerminalHost,
};

const FRAME: Duration = Duration::from_micros(16_667);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// FAKE CONTAINER
// =============================================================================

/// Records events and holds the last requested route until the test
/// applies it.
#[derive(Default)]
struct FakeContainer {
    events: Vec<TabEvent>,
    pending: Option<String>,
}

impl Navigator for FakeContainer {
    fn emit(&mut self, event: TabEvent) -> EventOutcome {
        self.events.push(event);
        EventOutcome::default()
    }

    fn navigate(&mut self, key: &str) {
        self.pending = Some(key.to_string());
    }
}

// =============================================================================
// FAKE HOST
// =============================================================================

type Slots<T> = Rc<RefCell<Vec<Option<T>>>>;

fn add_slot<T: 'static>(slots: &Slots<T>, value: T) -> Cleanup {
    let id = {
        let mut slots = slots.borrow_mut();
        slots.push(Some(value));
        slots.len() - 1
    };
    let slots = slots.clone();
    Box::new(move || {
        slots.borrow_mut()[id] = None;
    })
}

struct FakeHost {
    size: Cell<Dimensions>,
    safe_area: EdgeInsets,
    has_back: bool,
    dimension_listeners: Slots<DimensionListener>,
    back_listeners: Slots<BackActionListener>,
}

impl FakeHost {
    fn new(width: f32, height: f32, has_back: bool) -> Self {
        Self {
            size: Cell::new(Dimensions::new(width, height)),
            safe_area: EdgeInsets::ZERO,
            has_back,
            dimension_listeners: Rc::new(RefCell::new(Vec::new())),
            back_listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn rotate_to(&self, width: f32, height: f32) {
        let size = Dimensions::new(width, height);
        self.size.set(size);
        for listener in self.dimension_listeners.borrow().iter().flatten() {
            listener(size);
        }
    }

    fn back(&self) -> bool {
        self.back_listeners
            .borrow()
            .iter()
            .flatten()
            .fold(false, |handled, listener| listener() || handled)
    }

    fn live_listeners(&self) -> usize {
        let dims = self.dimension_listeners.borrow().iter().flatten().count();
        let back = self.back_listeners.borrow().iter().flatten().count();
        dims + back
    }
}

impl HostPlatform for FakeHost {
    fn dimensions(&self) -> Dimensions {
        self.size.get()
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area
    }

    fn subscribe_dimensions(&self, listener: DimensionListener) -> Cleanup {
        add_slot(&self.dimension_listeners, listener)
    }

    fn subscribe_back_action(&self, listener: BackActionListener) -> Option<Cleanup> {
        if !self.has_back {
            return None;
        }
        Some(add_slot(&self.back_listeners, listener))
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn setup(config: TabBarConfig) -> TabBar<FakeContainer> {
    init_logging();
    let routes = vec![
        Route::new("home-1", "Home"),
        Route::new("inbox-2", "Inbox"),
        Route::new("settings-3", "Settings"),
    ];
    let state = NavigationState::new(routes, 0).unwrap();
    TabBar::new(state, config, FakeContainer::default())
}

fn settle(bar: &mut TabBar<FakeContainer>) {
    let mut frames = 0;
    while bar.tick(FRAME) {
        frames += 1;
        assert!(frames < 2_000, "indicator never settled");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn test_mount_and_unmount_release_listeners() {
    let host = FakeHost::new(40.0, 80.0, true);
    let mut bar = setup(TabBarConfig::default());

    bar.mount(&host);
    assert!(bar.is_mounted());
    assert_eq!(host.live_listeners(), 2);
    assert_eq!(bar.orientation(), Some(Orientation::Portrait));

    bar.unmount();
    assert!(!bar.is_mounted());
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(bar.orientation(), None);
}

#[test]
fn test_drop_releases_listeners() {
    let host = FakeHost::new(40.0, 80.0, true);
    {
        let mut bar = setup(TabBarConfig::default());
        bar.mount(&host);
        assert_eq!(host.live_listeners(), 2);
    }
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn test_host_without_back_action() {
    let host = FakeHost::new(40.0, 80.0, false);
    let mut bar = setup(TabBarConfig::default());
    bar.mount(&host);

    assert_eq!(host.live_listeners(), 1);
    assert!(!host.back());
    assert_eq!(bar.resync_count(), 0);
}

#[test]
fn test_orientation_flips_resync_exactly_twice() {
    let host = FakeHost::new(40.0, 80.0, true);
    let mut bar = setup(TabBarConfig::default());
    bar.mount(&host);

    host.rotate_to(80.0, 40.0); // landscape
    host.rotate_to(100.0, 40.0); // still landscape
    host.rotate_to(40.0, 80.0); // portrait

    assert_eq!(bar.resync_count(), 2);
    assert_eq!(bar.orientation(), Some(Orientation::Portrait));
}

#[test]
fn test_back_action_resyncs_without_navigation() {
    let host = FakeHost::new(40.0, 80.0, true);
    let mut bar = setup(TabBarConfig::default());
    bar.mount(&host);
    bar.measure_row(300.0).unwrap();
    settle(&mut bar);

    assert!(!host.back());
    assert_eq!(bar.resync_count(), 1);
    assert!(bar.navigator().events.is_empty());
    assert!(bar.navigator().pending.is_none());

    settle(&mut bar);
    assert_eq!(bar.indicator_state().position_x, 0.0);
    assert_eq!(bar.indicator_state().width, 100.0);
}

#[test]
fn test_press_navigate_focus_round_trip() {
    let host = FakeHost::new(300.0, 2.0, true);
    let mut bar = setup(TabBarConfig::default());
    bar.mount(&host);
    bar.measure_row(300.0).unwrap();
    settle(&mut bar);

    assert_eq!(bar.press(2), PressOutcome::Navigated);
    let key = bar.navigator_mut().pending.take().unwrap();
    assert_eq!(key, "settings-3");
    assert!(bar.set_focused_key(&key));

    let mut last = bar.indicator_state().position_x;
    while bar.tick(FRAME) {
        let x = bar.indicator_state().position_x;
        assert!(x >= last - 1e-4);
        last = x;
    }

    let state = bar.indicator_state();
    assert_eq!(state.position_x, 200.0);
    assert_eq!(state.previous_position_x, 200.0);
    assert_eq!(bar.visited(), vec![0, 2]);

    let view = bar.render();
    assert_eq!(view.focused_button().map(|b| b.index), Some(2));
    assert_eq!(view.screens[0].presence, ScreenPresence::Inactive);
    assert_eq!(view.screens[1].presence, ScreenPresence::Skipped);
    assert_eq!(view.screens[2].presence, ScreenPresence::Active);
}

#[test]
fn test_rtl_config_mirrors_indicator() {
    let config = TabBarConfig::from_toml_str(
        r#"
direction = "rtl"

[indicator]
corner_radius = 2.0
"#,
    )
    .unwrap();
    let mut bar = setup(config);
    bar.on_tab_layout(0, TabLayout::new(50.0, 0.0, 100.0, 2.0));
    settle(&mut bar);

    let transform = bar.render().indicator;
    assert_eq!(transform.translate_x, -50.0);
    assert_eq!(transform.corner_radius, 2.0);
    assert_eq!(bar.indicator_state().position_x, 50.0);
}

#[test]
fn test_safe_area_pads_bottom() {
    let mut host = FakeHost::new(40.0, 80.0, false);
    host.safe_area = EdgeInsets {
        top: 0.0,
        right: 0.0,
        bottom: 2.0,
        left: 0.0,
    };
    let mut bar = setup(TabBarConfig {
        padding: EdgeInsets::all(1.0),
        ..TabBarConfig::default()
    });
    bar.mount(&host);

    let padding = bar.render().padding;
    assert_eq!(padding.bottom, 3.0);
    assert_eq!(padding.top, 1.0);
}

#[test]
fn test_terminal_host_drives_tab_bar() {
    let host = TerminalHost::new(Dimensions::new(80.0, 24.0), Some(KeyCode::Esc));
    let mut bar = setup(TabBarConfig::default());
    bar.mount(&host);
    assert_eq!(host.dimension_listener_count(), 1);
    assert_eq!(host.back_listener_count(), 1);

    host.route_event(Event::Resize(24, 80));
    assert_eq!(bar.orientation(), Some(Orientation::Portrait));

    let esc = Event::Key(KeyEvent {
        code: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    });
    assert_eq!(host.route_event(esc), HostEvent::Back { handled: false });
    assert_eq!(bar.resync_count(), 2);

    drop(bar);
    assert_eq!(host.dimension_listener_count(), 0);
    assert_eq!(host.back_listener_count(), 0);
}
