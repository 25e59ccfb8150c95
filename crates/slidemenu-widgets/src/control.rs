//! Page-level control dispatch and event fan-out.
//!
//! A control element is any node flagged `CONTROL` carrying a
//! `data-action` attribute naming one of the four public methods, plus an
//! optional `data-target` naming a specific menu root's `id`. An absent
//! target (or the literal `"this"`) means "the nearest enclosing menu".
//! Injected back links are controls with action `back` and no target.
//!
//! Dispatch is an explicit action-to-method match, not string-keyed method
//! lookup. Unknown actions, missing targets, and unregistered menus are
//! silent no-ops.

use slidemenu_core::{Event, HostSurface, NodeFlags, NodeId, Outcome};
use tracing::debug;

use crate::menu::SlideMenu;

/// Remote-control actions addressable from markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Open,
    Close,
    Toggle,
    Back,
}

impl ControlAction {
    /// Parse a `data-action` value. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open" => Some(Self::Open),
            "close" => Some(Self::Close),
            "toggle" => Some(Self::Toggle),
            "back" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Routes page events to registered menu instances.
///
/// Holds its own surface handle for control resolution; the menus keep
/// their own handles. Key and completion events fan out to every menu,
/// control clicks dispatch to exactly one.
#[derive(Debug)]
pub struct MenuRegistry<S: HostSurface> {
    surface: S,
    menus: Vec<SlideMenu<S>>,
}

impl<S: HostSurface> MenuRegistry<S> {
    /// Create a registry over the given surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            menus: Vec::new(),
        }
    }

    /// Register a menu instance.
    pub fn register(&mut self, menu: SlideMenu<S>) {
        self.menus.push(menu);
    }

    /// The menu bound to `root`, if registered.
    #[must_use]
    pub fn menu(&self, root: NodeId) -> Option<&SlideMenu<S>> {
        self.menus.iter().find(|menu| menu.root() == root)
    }

    /// Mutable access to the menu bound to `root`.
    pub fn menu_mut(&mut self, root: NodeId) -> Option<&mut SlideMenu<S>> {
        self.menus.iter_mut().find(|menu| menu.root() == root)
    }

    /// Feed one page event to the registry.
    ///
    /// Clicks on control elements are dispatched and consumed here; every
    /// other event fans out to all registered menus, reporting `Handled`
    /// if any menu consumed it.
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        if let Event::Click { target } = *event
            && self.surface.has_flag(target, NodeFlags::CONTROL)
        {
            return self.dispatch(target);
        }

        let mut outcome = Outcome::Passed;
        for menu in &mut self.menus {
            if menu.handle_event(event).is_handled() {
                outcome = Outcome::Handled;
            }
        }
        outcome
    }

    fn dispatch(&mut self, control: NodeId) -> Outcome {
        let name = self.surface.attr(control, "data-action").unwrap_or_default();
        let Some(action) = ControlAction::from_name(&name) else {
            debug!(control = %control, action = %name, "unknown control action ignored");
            return Outcome::Passed;
        };

        let root = match self.surface.attr(control, "data-target") {
            Some(ref id) if id != "this" => self.surface.find_by_id(id),
            _ => self
                .surface
                .ancestors(control)
                .into_iter()
                .find(|&node| self.surface.has_flag(node, NodeFlags::MENU_ROOT)),
        };
        let Some(root) = root else {
            debug!(control = %control, "control target not found");
            return Outcome::Passed;
        };
        let Some(menu) = self.menus.iter_mut().find(|menu| menu.root() == root) else {
            debug!(root = %root, "no menu registered for control target");
            return Outcome::Passed;
        };

        match action {
            ControlAction::Open => menu.open(true),
            ControlAction::Close => menu.close(true),
            ControlAction::Toggle => menu.toggle(),
            ControlAction::Back => menu.back(),
        }
        Outcome::Handled
    }
}
