//! The per-root menu controller: navigation state machine and animation
//! sequencing.
//!
//! # State
//! - `level`: current submenu depth, 0 = root menu visible.
//! - `is_open`: whether the panel is slid into view. Independent of
//!   `level`; closing does not reset the depth.
//! - `is_animating`: true from the moment a transform is issued until the
//!   host delivers a completion signal. While true, navigation commands
//!   are dropped, not queued.
//!
//! # Invariants
//! 1. `level` never goes negative or past the deepest submenu: forward
//!    from a leaf and back from the root are no-ops.
//! 2. Exactly the lists along the current root-to-level path carry
//!    `ACTIVE`.
//! 3. `is_animating` is cleared only by a completion signal or by a
//!    non-animated open/close, never by `slide_to` itself.
//!
//! # Failure Modes
//! If the host never delivers `TransitionEnd` (zero-duration transition,
//! node detached mid-flight), `is_animating` stays true forever and all
//! further navigation is locked out. Pinned by a test; recovery is the
//! host's responsibility.

use std::fmt;

use slidemenu_core::{Edge, Event, HostSurface, KeyCode, NodeFlags, NodeId, NodeKind, Offset, Outcome};
use tracing::{debug, trace};

use crate::decorate;
use crate::options::SlideMenuOptions;

/// Construction-time errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The root node contains no top-level list.
    MissingTopLevelList,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTopLevelList => write!(f, "menu root contains no top-level list"),
        }
    }
}

impl std::error::Error for MenuError {}

/// Navigation direction: one level deeper or one level back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Back,
}

impl Direction {
    pub(crate) const fn delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Back => -1,
        }
    }
}

/// A hierarchical slide menu bound to one root node of a host tree.
#[derive(Debug)]
pub struct SlideMenu<S: HostSurface> {
    surface: S,
    root: NodeId,
    slider: NodeId,
    top_list: NodeId,
    /// Links captured at construction, before back links are injected.
    /// Injected back controls are never part of this set; they reach the
    /// menu through the control dispatcher instead.
    anchors: Vec<NodeId>,
    options: SlideMenuOptions,
    level: u32,
    is_open: bool,
    is_animating: bool,
    has_items: bool,
}

impl<S: HostSurface> SlideMenu<S> {
    /// Bind a menu to `root`, which must contain one top-level list.
    ///
    /// Wraps the list in a slider container (unless already wrapped),
    /// moves the root to its off-screen rest position without animating,
    /// and decorates submenus when any link exists.
    pub fn new(mut surface: S, root: NodeId, options: SlideMenuOptions) -> Result<Self, MenuError> {
        let top_list = surface
            .descendants(root)
            .into_iter()
            .find(|&node| surface.kind(node) == NodeKind::List)
            .ok_or(MenuError::MissingTopLevelList)?;

        let slider = match surface
            .parent(top_list)
            .filter(|&parent| surface.has_flag(parent, NodeFlags::SLIDER))
        {
            Some(existing) => existing,
            None => {
                let wrapper = surface.create(NodeKind::Block);
                surface.insert_flags(wrapper, NodeFlags::SLIDER);
                surface.wrap(top_list, wrapper);
                wrapper
            }
        };
        surface.insert_flags(root, NodeFlags::MENU_ROOT);

        let anchors: Vec<NodeId> = surface
            .descendants(root)
            .into_iter()
            .filter(|&node| surface.kind(node) == NodeKind::Link)
            .collect();
        let has_items = !anchors.is_empty();

        let mut menu = Self {
            surface,
            root,
            slider,
            top_list,
            anchors,
            options,
            level: 0,
            is_open: false,
            is_animating: false,
            has_items,
        };

        menu.rest_position();
        if menu.has_items {
            decorate::decorate_submenus(&mut menu.surface, &menu.anchors, &menu.options);
        }

        debug!(root = %root, items = menu.anchors.len(), "menu constructed");
        Ok(menu)
    }

    // ── Public state ──────────────────────────────────────────────────

    /// Current submenu depth; 0 is the root menu.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether the panel is slid into view.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Whether any clickable item exists.
    #[must_use]
    pub fn has_items(&self) -> bool {
        self.has_items
    }

    /// The menu root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The slider container receiving depth translation.
    #[must_use]
    pub fn slider(&self) -> NodeId {
        self.slider
    }

    /// The host surface this menu drives.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // ── Open / close / toggle ─────────────────────────────────────────

    /// Open if closed, close if open (animated). Delegates; never itself
    /// changes state.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close(true);
        } else {
            self.open(true);
        }
    }

    /// Slide the panel into view.
    pub fn open(&mut self, animate: bool) {
        self.set_open(true, animate);
    }

    /// Slide the panel off screen. Does not reset the depth.
    pub fn close(&mut self, animate: bool) {
        self.set_open(false, animate);
    }

    /// Navigate one menu hierarchy back if possible.
    pub fn back(&mut self) {
        self.navigate(None, Direction::Back);
    }

    // Deliberately unguarded: unlike navigation, open/close never checks
    // `is_animating`. Rapid repeated calls re-issue the transform.
    fn set_open(&mut self, open: bool, animate: bool) {
        let offset = if open {
            Offset::ZERO
        } else {
            match self.options.position.resting_edge() {
                Edge::Left => Offset::percent(-100),
                Edge::Right => Offset::percent(100),
            }
        };
        self.is_open = open;
        debug!(open, animate, "menu open state");

        if animate {
            self.slide_to(self.root, offset);
        } else {
            let root = self.root;
            pause_transitions(&mut self.surface, root, |surface| {
                surface.set_translate_x(root, offset);
            });
            // No completion signal ever fires for a suppressed change.
            self.is_animating = false;
        }
    }

    // ── Event handling ────────────────────────────────────────────────

    /// Feed one host event to the menu.
    ///
    /// Returns [`Outcome::Handled`] when the host must suppress the
    /// input's default behavior (a matched shortcut key, or a click on an
    /// item that owns a submenu).
    pub fn handle_event(&mut self, event: &Event) -> Outcome {
        match *event {
            // Coarse on purpose: any completion signal clears the flag,
            // regardless of which node or property finished.
            Event::TransitionEnd { node } => {
                if self.is_animating {
                    trace!(node = %node, "transition complete");
                }
                self.is_animating = false;
                Outcome::Passed
            }
            Event::Key(code) => self.handle_key(code),
            Event::Click { target } => self.handle_click(target),
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> Outcome {
        if code == self.options.keycode_close {
            self.close(true);
            Outcome::Handled
        } else if self.options.keycode_open == Some(code) {
            self.open(true);
            Outcome::Handled
        } else {
            Outcome::Passed
        }
    }

    fn handle_click(&mut self, target: NodeId) -> Outcome {
        if !self.anchors.contains(&target) {
            return Outcome::Passed;
        }
        // Items with a submenu have their default activation intercepted
        // even while a transition is in flight; leaf links stay ordinary.
        let owns_submenu = self.surface.next_sibling_list(target).is_some();
        self.navigate(Some(target), Direction::Forward);
        if owns_submenu {
            Outcome::Handled
        } else {
            Outcome::Passed
        }
    }

    // ── Navigation ────────────────────────────────────────────────────

    /// Slide the menu one step deeper or back.
    ///
    /// Commands issued while a transition is in flight are dropped.
    pub(crate) fn navigate(&mut self, anchor: Option<NodeId>, dir: Direction) {
        if self.is_animating {
            trace!(?dir, "navigation dropped: transition in flight");
            return;
        }

        let offset = Offset::percent((self.level as i32 + dir.delta()) * -100);

        match dir {
            Direction::Forward => {
                let Some(anchor) = anchor else { return };
                let Some(submenu) = self.surface.next_sibling_list(anchor) else {
                    return; // leaf item
                };
                self.surface.insert_flags(submenu, NodeFlags::ACTIVE);
                self.surface.remove_flags(submenu, NodeFlags::HIDDEN);
            }
            Direction::Back => {
                if self.level == 0 {
                    return;
                }
                if let Some(list) = self.active_list_at_depth(self.level) {
                    self.surface.remove_flags(list, NodeFlags::ACTIVE);
                    self.surface.insert_flags(list, NodeFlags::HIDDEN);
                }
            }
        }

        self.level = (self.level as i32 + dir.delta()) as u32;
        debug!(level = self.level, "menu level");
        self.slide_to(self.slider, offset);
    }

    /// Descend the ACTIVE chain from the top list `depth` times.
    fn active_list_at_depth(&self, depth: u32) -> Option<NodeId> {
        let mut current = self.top_list;
        for _ in 0..depth {
            current = self
                .surface
                .descendants(current)
                .into_iter()
                .find(|&node| {
                    self.surface.kind(node) == NodeKind::List
                        && self.surface.has_flag(node, NodeFlags::ACTIVE)
                })?;
        }
        Some(current)
    }

    // ── Animation ─────────────────────────────────────────────────────

    /// Issue an animated transform. Never clears `is_animating`; only the
    /// completion signal or the non-animated path does.
    fn slide_to(&mut self, node: NodeId, offset: Offset) {
        self.surface.set_translate_x(node, offset);
        self.is_animating = true;
    }

    /// Move the root to its off-screen rest position, without animating.
    fn rest_position(&mut self) {
        let root = self.root;
        let edge = self.options.position.resting_edge();
        pause_transitions(&mut self.surface, root, |surface| match edge {
            Edge::Left => {
                surface.pin_edge(root, Edge::Left);
                surface.set_translate_x(root, Offset::percent(-100));
            }
            Edge::Right => {
                // Off screen via the root's own box, no transform needed.
                surface.pin_edge(root, Edge::Right);
            }
        });
    }
}

/// Run `work` with transitions suppressed on `root`, forcing a reflow so
/// the style change lands instantaneously. The marker flag is never left
/// set.
pub(crate) fn pause_transitions<S: HostSurface>(
    surface: &mut S,
    root: NodeId,
    work: impl FnOnce(&mut S),
) {
    surface.insert_flags(root, NodeFlags::NO_TRANSITION);
    work(surface);
    surface.force_reflow(root);
    surface.remove_flags(root, NodeFlags::NO_TRANSITION);
}
