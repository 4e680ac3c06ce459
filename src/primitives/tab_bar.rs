//! Tab Bar - composes routes, state and animation into a renderable view.
//!
//! `TabBar` owns the per-instance state (visited set, layout registry,
//! indicator) and exposes the host-facing callbacks:
//!
//! - [`TabBar::on_tab_layout`] - measurement callback for a tab button
//! - [`TabBar::press`] / [`TabBar::long_press`] - input handlers
//! - [`TabBar::set_focused_index`] - the container changed focus
//! - [`TabBar::tick`] / [`TabBar::pump`] - advance the indicator
//! - [`TabBar::render`] - snapshot of everything the host draws
//!
//! Orientation and back-action listeners are installed by
//! [`TabBar::mount`] and released by [`TabBar::unmount`] or on drop.
//!
//! # Example
//!
//! ```ignore
//! let state = NavigationState::new(routes, 0)?;
//! let mut bar = TabBar::new(state, TabBarConfig::default(), navigator);
//! bar.mount(&host);
//! bar.measure_row(80.0)?;
//!
//! if bar.press(2) == PressOutcome::Navigated {
//!     // container updates its state, then:
//!     bar.set_focused_index(2);
//! }
//! let view = bar.render();
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{signal, Signal};

use crate::config::TabBarConfig;
use crate::error::TabBarError;
use crate::layout::{compute_tab_row, content_size};
use crate::navigation::{
    IconProps, NavigationState, Navigator, RenderedContent, Route, TabEvent, TabEventKind,
};
use crate::state::animate::{
    Axis, FrameClock, IndicatorController, IndicatorState, IndicatorTransform, ResyncHandle,
};
use crate::state::back_action::BackActionInterceptor;
use crate::state::host::{HostPlatform, ListenerGuard};
use crate::state::layouts::LayoutRegistry;
use crate::state::mounts::LazyMountTracker;
use crate::state::orientation::OrientationWatcher;
use crate::theme::{decide, resolve_style, ThemeColor};
use crate::types::{Dimensions, EdgeInsets, Orientation, RenderSet, TabLayout};

// =============================================================================
// VIEW TYPES
// =============================================================================

/// Result of a tab press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Navigation to the pressed route was requested.
    Navigated,
    /// The pressed tab was already focused; only the event was emitted.
    AlreadyFocused,
    /// A listener prevented the default action.
    Prevented,
    /// No route at that index.
    Ignored,
}

/// How a screen takes part in the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPresence {
    /// Not instantiated.
    Skipped,
    /// Mounted, visible and interactive.
    Active,
    /// Mounted but hidden, non-interactive and hidden from accessibility.
    Inactive,
}

impl ScreenPresence {
    pub fn is_mounted(self) -> bool {
        self != Self::Skipped
    }

    pub fn is_interactive(self) -> bool {
        self == Self::Active
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSlot {
    pub index: usize,
    pub key: String,
    pub presence: ScreenPresence,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabButtonView {
    pub index: usize,
    pub key: String,
    pub focused: bool,
    pub parts: RenderSet,
    /// `None` when the icon is not shown or the route has no icon renderer.
    pub icon: Option<RenderedContent>,
    pub label: Option<RenderedContent>,
    pub tint: ThemeColor,
    pub background: ThemeColor,
    pub accessibility_label: Option<String>,
}

/// Everything the host draws for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TabBarView {
    /// False while the focused route hides the tab row.
    pub visible: bool,
    pub buttons: Vec<TabButtonView>,
    pub screens: Vec<ScreenSlot>,
    pub indicator: IndicatorTransform,
    pub background: ThemeColor,
    /// Configured padding with the safe-area bottom inset added.
    pub padding: EdgeInsets,
}

impl TabBarView {
    pub fn focused_button(&self) -> Option<&TabButtonView> {
        self.buttons.iter().find(|button| button.focused)
    }

    pub fn mounted_screens(&self) -> impl Iterator<Item = &ScreenSlot> {
        self.screens
            .iter()
            .filter(|screen| screen.presence.is_mounted())
    }
}

// =============================================================================
// TAB BAR
// =============================================================================

/// Deliver a dimension change to the watcher. Returns false if the watcher
/// was busy and the notification was dropped.
fn forward_dimensions(watcher: &RefCell<OrientationWatcher>, dimensions: Dimensions) -> bool {
    let Ok(mut watcher) = watcher.try_borrow_mut() else {
        log::warn!(
            "dropped dimension change to {}x{}: orientation watcher is busy",
            dimensions.width,
            dimensions.height
        );
        return false;
    };
    watcher.on_dimensions_change(dimensions);
    true
}

pub struct TabBar<N: Navigator> {
    state: NavigationState,
    focused: Signal<usize>,
    config: TabBarConfig,
    navigator: N,
    mounts: LazyMountTracker,
    layouts: LayoutRegistry,
    indicator: Rc<RefCell<IndicatorController>>,
    orientation: Option<Rc<RefCell<OrientationWatcher>>>,
    listeners: Option<ListenerGuard>,
    safe_area: EdgeInsets,
}

impl<N: Navigator> TabBar<N> {
    pub fn new(state: NavigationState, config: TabBarConfig, navigator: N) -> Self {
        let unmount_on_blur = state
            .routes()
            .iter()
            .map(|route| route.options.unmount_on_blur)
            .collect();
        let mounts = LazyMountTracker::new(state.index(), config.lazy, unmount_on_blur);
        let indicator = Rc::new(RefCell::new(IndicatorController::from_config(&config)));

        log::debug!(
            "tab bar created: {} routes, focused {}",
            state.len(),
            state.index()
        );

        Self {
            focused: signal(state.index()),
            state,
            config,
            navigator,
            mounts,
            layouts: LayoutRegistry::new(),
            indicator,
            orientation: None,
            listeners: None,
            safe_area: EdgeInsets::ZERO,
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Subscribe to the host's dimension changes and, if it has one, its
    /// back action. Mounting twice replaces the earlier subscriptions.
    pub fn mount(&mut self, host: &dyn HostPlatform) {
        if self.is_mounted() {
            self.unmount();
        }

        let mut guard = ListenerGuard::new();
        self.safe_area = host.safe_area_insets();

        let watcher = Rc::new(RefCell::new(OrientationWatcher::new(
            host.dimensions(),
            self.resync_handle(),
        )));
        let listener_watcher = watcher.clone();
        guard.push(host.subscribe_dimensions(Box::new(move |dimensions| {
            forward_dimensions(&listener_watcher, dimensions);
        })));

        let interceptor = BackActionInterceptor::new(self.resync_handle());
        match host.subscribe_back_action(Box::new(move || interceptor.handle_back_action())) {
            Some(cleanup) => guard.push(cleanup),
            None => log::debug!("host has no back action; interceptor not installed"),
        }

        log::debug!("tab bar mounted with {} host listeners", guard.len());
        self.orientation = Some(watcher);
        self.listeners = Some(guard);
    }

    /// Release every host subscription.
    pub fn unmount(&mut self) {
        if let Some(mut guard) = self.listeners.take() {
            guard.release();
        }
        self.orientation = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    // -------------------------------------------------------------------------
    // Container & host callbacks
    // -------------------------------------------------------------------------

    /// The container moved focus to `index`.
    ///
    /// The index joins the visited set first; the indicator then retargets
    /// if that tab has been measured, and otherwise stays where it is.
    pub fn set_focused_index(&mut self, index: usize) {
        if index == self.state.index() {
            return;
        }
        self.state.set_index(index);
        self.mounts.focus(index);
        self.focused.set(index);

        match self.layouts.get(index) {
            Some(layout) => self.indicator.borrow_mut().retarget(layout),
            None => log::debug!("tab {index} focused before it was measured"),
        }
    }

    /// Focus the route with `key`. Returns false for an unknown key.
    pub fn set_focused_key(&mut self, key: &str) -> bool {
        match self.state.position(key) {
            Some(index) => {
                self.set_focused_index(index);
                true
            }
            None => false,
        }
    }

    /// Measurement callback for tab `index`.
    pub fn on_tab_layout(&mut self, index: usize, layout: TabLayout) {
        if !self.layouts.record(index, layout) {
            log::trace!("tab {index} re-measured with an unchanged box");
        }
        if index == self.state.index() {
            self.indicator.borrow_mut().retarget(layout);
        }
    }

    /// Measure the tab row at `width` and report every box through
    /// [`on_tab_layout`](Self::on_tab_layout).
    pub fn measure_row(&mut self, width: f32) -> Result<Vec<TabLayout>, TabBarError> {
        let focused_index = self.state.index();
        let items: Vec<_> = self
            .state
            .routes()
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let focused = index == focused_index;
                let parts = decide(focused, &self.config.display);
                let tint = resolve_style(&self.config.colors, index, focused).tint;
                let label = route.label().render(focused, &tint);
                content_size(parts, Some(&label.text), self.config.icon_size)
            })
            .collect();

        let boxes = compute_tab_row(
            &items,
            width,
            &self.config.padding,
            self.config.layout_mode,
        )?;
        for (index, layout) in boxes.iter().enumerate() {
            self.on_tab_layout(index, *layout);
        }
        Ok(boxes)
    }

    /// Emit a cancelable tab press and, unless the tab is already focused
    /// or a listener prevented it, request navigation to that route.
    pub fn press(&mut self, index: usize) -> PressOutcome {
        let Some(route) = self.state.route(index) else {
            log::warn!("press on tab {index} with only {} routes", self.state.len());
            return PressOutcome::Ignored;
        };
        let key = route.key.clone();

        let outcome = self.navigator.emit(TabEvent {
            kind: TabEventKind::TabPress,
            target: key.clone(),
            can_prevent_default: true,
        });

        if index == self.state.index() {
            PressOutcome::AlreadyFocused
        } else if outcome.default_prevented {
            log::debug!("tab press on {key} prevented");
            PressOutcome::Prevented
        } else {
            log::debug!("navigating to {key}");
            self.navigator.navigate(&key);
            PressOutcome::Navigated
        }
    }

    /// Emit a tab long press. Never navigates.
    pub fn long_press(&mut self, index: usize) {
        let Some(route) = self.state.route(index) else {
            return;
        };
        let event = TabEvent {
            kind: TabEventKind::TabLongPress,
            target: route.key.clone(),
            can_prevent_default: false,
        };
        self.navigator.emit(event);
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    /// Advance the indicator. Returns true while it is still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.indicator.borrow_mut().tick(dt)
    }

    /// Step the indicator by whatever time `clock` has counted.
    pub fn pump(&mut self, clock: &mut FrameClock) -> bool {
        let elapsed = clock.take_elapsed();
        if elapsed.is_zero() {
            return self.is_animating();
        }
        self.tick(elapsed)
    }

    pub fn resync(&self) {
        self.indicator.borrow_mut().resync();
    }

    pub fn on_indicator_settle(&self, listener: impl Fn(Axis, f32) + 'static) {
        self.indicator.borrow_mut().on_settle(listener);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn render_button(&self, index: usize, route: &Route, focused: bool) -> TabButtonView {
        let parts = decide(focused, &self.config.display);
        let style = resolve_style(&self.config.colors, index, focused);
        let label = route.label();

        let icon = if parts.contains(RenderSet::ICON) {
            route.options.tab_bar_icon.as_ref().map(|render| {
                render(&IconProps {
                    focused,
                    color: style.tint.clone(),
                    size: self.config.icon_size,
                })
            })
        } else {
            None
        };
        let label_content = parts
            .contains(RenderSet::LABEL)
            .then(|| label.render(focused, &style.tint));

        let accessibility_label = route.options.accessibility_label.clone().or_else(|| {
            label
                .as_text()
                .map(|text| format!("{text}, tab, {} of {}", index + 1, self.state.len()))
        });

        TabButtonView {
            index,
            key: route.key.clone(),
            focused,
            parts,
            icon,
            label: label_content,
            tint: style.tint,
            background: style.background,
            accessibility_label,
        }
    }

    fn screen_presence(&self, index: usize) -> ScreenPresence {
        if !self.mounts.should_mount(index) {
            ScreenPresence::Skipped
        } else if index == self.state.index() {
            ScreenPresence::Active
        } else {
            ScreenPresence::Inactive
        }
    }

    pub fn render(&self) -> TabBarView {
        let focused_index = self.state.index();
        let routes = self.state.routes();

        let buttons = routes
            .iter()
            .enumerate()
            .map(|(index, route)| self.render_button(index, route, index == focused_index))
            .collect();
        let screens = routes
            .iter()
            .enumerate()
            .map(|(index, route)| ScreenSlot {
                index,
                key: route.key.clone(),
                presence: self.screen_presence(index),
            })
            .collect();

        let mut padding = self.config.padding;
        padding.bottom += self.safe_area.bottom;

        TabBarView {
            visible: self.state.focused_route().is_tab_bar_visible(),
            buttons,
            screens,
            indicator: self.indicator.borrow().transform(),
            background: self.config.background.clone(),
            padding,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn focused_index(&self) -> usize {
        self.state.index()
    }

    pub fn focused_signal(&self) -> Signal<usize> {
        self.focused.clone()
    }

    pub fn visited(&self) -> Vec<usize> {
        self.mounts.visited()
    }

    pub fn should_mount(&self, index: usize) -> bool {
        self.mounts.should_mount(index)
    }

    pub fn layout(&self, index: usize) -> Option<TabLayout> {
        self.layouts.get(index)
    }

    pub fn indicator_state(&self) -> IndicatorState {
        self.indicator.borrow().state()
    }

    pub fn indicator_signal(&self) -> Signal<IndicatorState> {
        self.indicator.borrow().state_signal()
    }

    pub fn indicator_target(&self) -> TabLayout {
        self.indicator.borrow().target()
    }

    pub fn resync_count(&self) -> usize {
        self.indicator.borrow().resync_count()
    }

    pub fn is_animating(&self) -> bool {
        self.indicator.borrow().is_animating()
    }

    pub fn resync_handle(&self) -> ResyncHandle {
        ResyncHandle::new(&self.indicator)
    }

    /// Current orientation, once mounted.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
            .as_ref()
            .map(|watcher| watcher.borrow().orientation())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayModes;
    use crate::navigation::{EventOutcome, IconRenderer, Label, RouteOptions};
    use crate::theme::PerTabColor;
    use crate::types::DisplayMode;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[derive(Default)]
    struct RecordingNavigator {
        events: Vec<TabEvent>,
        navigations: Vec<String>,
        prevent: bool,
    }

    impl Navigator for RecordingNavigator {
        fn emit(&mut self, event: TabEvent) -> EventOutcome {
            let default_prevented = self.prevent && event.can_prevent_default;
            self.events.push(event);
            EventOutcome { default_prevented }
        }

        fn navigate(&mut self, key: &str) {
            self.navigations.push(key.to_string());
        }
    }

    fn setup(config: TabBarConfig) -> TabBar<RecordingNavigator> {
        let routes = vec![
            Route::new("home-1", "Home"),
            Route::new("search-2", "Search"),
            Route::new("profile-3", "Profile"),
        ];
        let state = NavigationState::new(routes, 0).unwrap();
        TabBar::new(state, config, RecordingNavigator::default())
    }

    fn settle(bar: &mut TabBar<RecordingNavigator>) {
        let mut frames = 0;
        while bar.tick(FRAME) {
            frames += 1;
            assert!(frames < 2_000);
        }
    }

    #[test]
    fn test_press_unfocused_tab_navigates() {
        let mut bar = setup(TabBarConfig::default());
        assert_eq!(bar.press(1), PressOutcome::Navigated);

        let navigator = bar.navigator();
        assert_eq!(navigator.navigations, vec!["search-2".to_string()]);
        assert_eq!(navigator.events.len(), 1);
        assert_eq!(navigator.events[0].kind, TabEventKind::TabPress);
        assert!(navigator.events[0].can_prevent_default);
    }

    #[test]
    fn test_press_focused_tab_only_emits() {
        let mut bar = setup(TabBarConfig::default());
        assert_eq!(bar.press(0), PressOutcome::AlreadyFocused);
        assert_eq!(bar.navigator().events.len(), 1);
        assert!(bar.navigator().navigations.is_empty());
    }

    #[test]
    fn test_prevented_press_does_not_navigate() {
        let mut bar = setup(TabBarConfig::default());
        bar.navigator_mut().prevent = true;
        assert_eq!(bar.press(2), PressOutcome::Prevented);
        assert!(bar.navigator().navigations.is_empty());
        assert_eq!(bar.press(7), PressOutcome::Ignored);
    }

    #[test]
    fn test_long_press_emits_without_navigating() {
        let mut bar = setup(TabBarConfig::default());
        bar.long_press(2);
        let events = &bar.navigator().events;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, TabEventKind::TabLongPress);
        assert_eq!(events[0].target, "profile-3");
        assert!(!events[0].can_prevent_default);
        assert!(bar.navigator().navigations.is_empty());
    }

    #[test]
    fn test_focused_measurement_retargets() {
        let mut bar = setup(TabBarConfig::default());
        bar.on_tab_layout(1, TabLayout::new(100.0, 0.0, 100.0, 2.0));
        assert!(!bar.is_animating());

        bar.on_tab_layout(0, TabLayout::new(0.0, 0.0, 100.0, 2.0));
        assert!(bar.is_animating());
        assert_eq!(bar.indicator_target(), TabLayout::new(0.0, 0.0, 100.0, 2.0));
    }

    #[test]
    fn test_unchanged_measurement_still_retargets() {
        let mut bar = setup(TabBarConfig::default());
        let layout = TabLayout::new(0.0, 0.0, 100.0, 2.0);
        bar.on_tab_layout(0, layout);
        settle(&mut bar);

        bar.on_tab_layout(0, layout);
        assert!(bar.is_animating());
        assert_eq!(bar.layout(0), Some(layout));
        settle(&mut bar);
        assert_eq!(bar.indicator_state().width, 100.0);
    }

    #[test]
    fn test_busy_watcher_drops_dimension_change() {
        let indicator = Rc::new(RefCell::new(IndicatorController::default()));
        let watcher = RefCell::new(OrientationWatcher::new(
            Dimensions::new(40.0, 80.0),
            ResyncHandle::new(&indicator),
        ));

        {
            let _busy = watcher.borrow_mut();
            assert!(!forward_dimensions(&watcher, Dimensions::new(80.0, 40.0)));
        }
        assert!(watcher.borrow().is_portrait());
        assert_eq!(indicator.borrow().resync_count(), 0);

        assert!(forward_dimensions(&watcher, Dimensions::new(80.0, 40.0)));
        assert!(!watcher.borrow().is_portrait());
        assert_eq!(indicator.borrow().resync_count(), 1);
    }

    #[test]
    fn test_focus_change_uses_registry() {
        let mut bar = setup(TabBarConfig::default());
        bar.on_tab_layout(0, TabLayout::new(0.0, 0.0, 100.0, 2.0));
        bar.on_tab_layout(1, TabLayout::new(100.0, 0.0, 100.0, 2.0));
        settle(&mut bar);

        bar.set_focused_index(1);
        assert_eq!(bar.focused_signal().get(), 1);
        settle(&mut bar);
        assert_eq!(bar.indicator_state().position_x, 100.0);
        assert_eq!(bar.indicator_state().previous_position_x, 100.0);
    }

    #[test]
    fn test_unmeasured_focus_leaves_indicator() {
        let mut bar = setup(TabBarConfig::default());
        bar.on_tab_layout(0, TabLayout::new(0.0, 0.0, 100.0, 2.0));
        settle(&mut bar);

        bar.set_focused_index(2);
        assert!(!bar.is_animating());
        assert_eq!(bar.indicator_state().position_x, 0.0);
    }

    #[test]
    fn test_measure_row_stretch() {
        let mut bar = setup(TabBarConfig::default());
        let boxes = bar.measure_row(300.0).unwrap();
        assert_eq!(boxes.len(), 3);
        assert_eq!(bar.layout(2).map(|b| b.x), Some(200.0));
        assert_eq!(bar.indicator_target().width, 100.0);
    }

    #[test]
    fn test_render_buttons_and_accessibility() {
        let routes = vec![
            Route::new("home-1", "Home").with_options(RouteOptions {
                tab_bar_icon: Some(Rc::new(|props: &IconProps| {
                    RenderedContent::new(if props.focused { "●" } else { "○" }, props.color.clone())
                }) as IconRenderer),
                ..Default::default()
            }),
            Route::new("search-2", "Search").with_options(RouteOptions {
                accessibility_label: Some("Find things".into()),
                ..Default::default()
            }),
            Route::new("custom-3", "Custom").with_options(RouteOptions {
                tab_bar_label: Some(Label::custom(|_, color| {
                    RenderedContent::new("*", color.clone())
                })),
                ..Default::default()
            }),
        ];
        let state = NavigationState::new(routes, 0).unwrap();
        let bar = TabBar::new(state, TabBarConfig::default(), RecordingNavigator::default());
        let view = bar.render();

        let home = &view.buttons[0];
        assert!(home.focused);
        assert_eq!(home.parts, RenderSet::ICON | RenderSet::LABEL);
        assert_eq!(home.icon.as_ref().map(|icon| icon.text.as_str()), Some("●"));
        assert_eq!(home.label.as_ref().map(|l| l.text.as_str()), Some("Home"));
        assert_eq!(home.accessibility_label.as_deref(), Some("Home, tab, 1 of 3"));

        assert!(view.buttons[1].icon.is_none());
        assert_eq!(
            view.buttons[1].accessibility_label.as_deref(),
            Some("Find things")
        );
        assert_eq!(view.buttons[2].accessibility_label, None);
        assert_eq!(view.buttons[2].label.as_ref().map(|l| l.text.as_str()), Some("*"));
    }

    #[test]
    fn test_render_colors_and_display_modes() {
        let mut config = TabBarConfig::default();
        config.colors.active_tint = Some(PerTabColor::from(vec![
            ThemeColor::from("red"),
            ThemeColor::from("blue"),
        ]));
        config.colors.active_tint_default = ThemeColor::from("gray");
        config.display = DisplayModes {
            focused: Some(DisplayMode::LabelOnly),
            unfocused: Some(DisplayMode::IconOnly),
        };
        let mut bar = setup(config);

        let view = bar.render();
        assert_eq!(view.buttons[0].tint, ThemeColor::from("red"));
        assert_eq!(view.buttons[0].parts, RenderSet::LABEL);
        assert_eq!(view.buttons[1].parts, RenderSet::ICON);
        assert!(view.buttons[1].label.is_none());
        assert_eq!(view.buttons[1].background, ThemeColor::Default);

        bar.set_focused_index(2);
        assert_eq!(bar.render().buttons[2].tint, ThemeColor::from("gray"));
        bar.set_focused_index(1);
        assert_eq!(bar.render().buttons[1].tint, ThemeColor::from("blue"));
    }

    #[test]
    fn test_screens_follow_mount_gating() {
        let mut bar = setup(TabBarConfig::default());
        let presence = |bar: &TabBar<RecordingNavigator>| -> Vec<ScreenPresence> {
            bar.render().screens.iter().map(|s| s.presence).collect()
        };

        assert_eq!(
            presence(&bar),
            vec![ScreenPresence::Active, ScreenPresence::Skipped, ScreenPresence::Skipped]
        );

        bar.set_focused_index(2);
        assert_eq!(
            presence(&bar),
            vec![ScreenPresence::Inactive, ScreenPresence::Skipped, ScreenPresence::Active]
        );
        assert_eq!(bar.visited(), vec![0, 2]);
        assert_eq!(bar.render().mounted_screens().count(), 2);
    }

    #[test]
    fn test_eager_mode_mounts_everything() {
        let bar = setup(TabBarConfig {
            lazy: false,
            ..TabBarConfig::default()
        });
        assert!(bar.render().screens.iter().all(|s| s.presence.is_mounted()));
        assert_eq!(
            bar.render().screens.iter().filter(|s| s.presence.is_interactive()).count(),
            1
        );
    }

    #[test]
    fn test_hidden_tab_bar_route() {
        let routes = vec![
            Route::new("home-1", "Home"),
            Route::new("player-2", "Player").with_options(RouteOptions {
                tab_bar_visible: Some(false),
                ..Default::default()
            }),
        ];
        let state = NavigationState::new(routes, 0).unwrap();
        let mut bar = TabBar::new(state, TabBarConfig::default(), RecordingNavigator::default());
        assert!(bar.render().visible);

        bar.set_focused_index(1);
        assert!(!bar.render().visible);
        assert_eq!(bar.render().screens[1].presence, ScreenPresence::Active);
    }
}
