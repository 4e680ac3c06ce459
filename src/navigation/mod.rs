//! Navigation - the contract with the external navigation container.
//!
//! The container owns the ordered route list and the focused index. The
//! tab bar only reads them, emits tab events through [`Navigator::emit`]
//! and asks for route changes through [`Navigator::navigate`]. A route's
//! screen content never passes through here; hosts map route keys to
//! their own screens.

use std::fmt;
use std::rc::Rc;

use crate::error::TabBarError;
use crate::theme::ThemeColor;

// =============================================================================
// Rendered content
// =============================================================================

/// Output of an icon renderer or a custom label.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedContent {
    pub text: String,
    pub color: ThemeColor,
}

impl RenderedContent {
    pub fn new(text: impl Into<String>, color: ThemeColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Arguments passed to an icon renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct IconProps {
    pub focused: bool,
    pub color: ThemeColor,
    pub size: f32,
}

pub type IconRenderer = Rc<dyn Fn(&IconProps) -> RenderedContent>;

pub type LabelRenderer = Rc<dyn Fn(bool, &ThemeColor) -> RenderedContent>;

/// A tab label: plain text, or a function of focus state and tint.
#[derive(Clone)]
pub enum Label {
    Text(String),
    Custom(LabelRenderer),
}

impl Label {
    pub fn custom(render: impl Fn(bool, &ThemeColor) -> RenderedContent + 'static) -> Self {
        Self::Custom(Rc::new(render))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Custom(_) => None,
        }
    }

    /// Render for the given focus state and tint.
    pub fn render(&self, focused: bool, tint: &ThemeColor) -> RenderedContent {
        match self {
            Self::Text(text) => RenderedContent::new(text.clone(), tint.clone()),
            Self::Custom(render) => render(focused, tint),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Per-route options.
#[derive(Clone, Default)]
pub struct RouteOptions {
    pub title: Option<String>,
    pub tab_bar_label: Option<Label>,
    pub tab_bar_icon: Option<IconRenderer>,
    /// `Some(false)` hides the tab row while this route is focused.
    pub tab_bar_visible: Option<bool>,
    /// Drop the screen whenever it loses focus instead of keeping it mounted.
    pub unmount_on_blur: bool,
    pub accessibility_label: Option<String>,
}

impl fmt::Debug for RouteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteOptions")
            .field("title", &self.title)
            .field("tab_bar_label", &self.tab_bar_label)
            .field("tab_bar_icon", &self.tab_bar_icon.as_ref().map(|_| ".."))
            .field("tab_bar_visible", &self.tab_bar_visible)
            .field("unmount_on_blur", &self.unmount_on_blur)
            .field("accessibility_label", &self.accessibility_label)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    /// Unique, opaque identifier.
    pub key: String,
    /// Route name, used as the label of last resort.
    pub name: String,
    pub options: RouteOptions,
}

impl Route {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            options: RouteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Explicit label, else title, else route name.
    pub fn label(&self) -> Label {
        if let Some(label) = &self.options.tab_bar_label {
            return label.clone();
        }
        match &self.options.title {
            Some(title) => Label::Text(title.clone()),
            None => Label::Text(self.name.clone()),
        }
    }

    pub fn is_tab_bar_visible(&self) -> bool {
        self.options.tab_bar_visible.unwrap_or(true)
    }
}

/// Ordered routes plus the focused index.
#[derive(Debug, Clone)]
pub struct NavigationState {
    routes: Vec<Route>,
    index: usize,
}

impl NavigationState {
    pub fn new(routes: Vec<Route>, index: usize) -> Result<Self, TabBarError> {
        if routes.is_empty() {
            return Err(TabBarError::EmptyRoutes);
        }
        if index >= routes.len() {
            return Err(TabBarError::FocusOutOfRange {
                index,
                len: routes.len(),
            });
        }
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|other| other.key == route.key) {
                return Err(TabBarError::DuplicateRouteKey(route.key.clone()));
            }
        }
        Ok(Self { routes, index })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn focused_route(&self) -> &Route {
        &self.routes[self.index]
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.routes.iter().position(|route| route.key == key)
    }

    /// Out-of-range indices are a container bug; only checked in debug builds.
    pub(crate) fn set_index(&mut self, index: usize) {
        debug_assert!(
            index < self.routes.len(),
            "focused index {index} out of range for {} routes",
            self.routes.len()
        );
        self.index = index;
    }
}

// =============================================================================
// Events & Navigator
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEventKind {
    TabPress,
    TabLongPress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEvent {
    pub kind: TabEventKind,
    /// Key of the route whose tab was pressed.
    pub target: String,
    pub can_prevent_default: bool,
}

/// What listeners did with an emitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

/// The external navigation container's emit/dispatch primitives.
pub trait Navigator {
    /// Emit an event for a route and report whether a listener prevented it.
    fn emit(&mut self, event: TabEvent) -> EventOutcome;

    /// Ask the container to focus the route with this key.
    fn navigate(&mut self, key: &str);
}

// =============================================================================
// Tests
// =============================================================================
