//! Node handles, kinds, state flags, and typed style values.

use std::fmt;

use bitflags::bitflags;

/// Opaque handle to a node in the host tree.
///
/// Handles are only meaningful for the surface that issued them; they are
/// never invalidated (the widget does not remove nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw index, for debug output and host implementations.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Construct a handle from a raw index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural role of a node in the menu tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Generic container (menu root, slider wrapper).
    Block,
    /// A submenu level: a list of items.
    List,
    /// One entry of a list.
    Item,
    /// A clickable item.
    Link,
}

bitflags! {
    /// Per-node state markers.
    ///
    /// The markup style contract, expressed as typed flags instead of
    /// class-name strings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NodeFlags: u8 {
        /// Submenu on the current navigation path (visible level chain).
        const ACTIVE = 1 << 0;
        /// Not visible. Fade mechanics are the host's concern.
        const HIDDEN = 1 << 1;
        /// Transition suppression: style writes apply instantaneously
        /// while set. Toggled around any non-animated change.
        const NO_TRANSITION = 1 << 2;
        /// Root node of a menu instance.
        const MENU_ROOT = 1 << 3;
        /// The inner container that receives depth translation.
        const SLIDER = 1 << 4;
        /// Remote-control element carrying a `data-action` attribute.
        const CONTROL = 1 << 5;
    }
}

/// Horizontal translation, in percent of one panel width.
///
/// Bare integers coerce via [`From`] and always read as percent; a
/// unit-less offset never reaches the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset(i32);

impl Offset {
    /// The on-screen rest position.
    pub const ZERO: Self = Self(0);

    /// An offset of `value` percent.
    #[must_use]
    pub const fn percent(value: i32) -> Self {
        Self(value)
    }

    /// The offset in percent.
    #[must_use]
    pub const fn as_percent(self) -> i32 {
        self.0
    }
}

impl From<i32> for Offset {
    fn from(value: i32) -> Self {
        Self::percent(value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Horizontal edge a menu root is pinned to while at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    /// Returns the opposite edge.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
