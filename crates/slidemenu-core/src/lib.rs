#![forbid(unsafe_code)]

//! Core: node handles, state flags, typed style operations, and events for
//! the slide-menu widget.
//!
//! # Role in the workspace
//! `slidemenu-core` is the host layer. It owns the capability trait the
//! widget drives ([`HostSurface`]), the value types flowing through it
//! ([`NodeId`], [`NodeFlags`], [`Offset`]), and the input/completion events
//! the widget consumes ([`Event`]).
//!
//! # Primary responsibilities
//! - **HostSurface**: minimal tree/style/attribute capability interface.
//! - **Event**: canonical input events (clicks, keys, transition
//!   completion).
//! - **MemoryHost**: in-memory reference surface for tests and headless
//!   embedders.
//!
//! # How it fits in the system
//! The widget crate (`slidemenu-widgets`) mutates a host tree exclusively
//! through [`HostSurface`], so the navigation state machine is testable
//! without a real rendering surface. A real host (DOM bridge, retained UI
//! tree) implements the same trait.

pub mod event;
pub mod memory;
pub mod node;
pub mod surface;

pub use event::{Event, KeyCode, Outcome};
pub use memory::MemoryHost;
pub use node::{Edge, NodeFlags, NodeId, NodeKind, Offset};
pub use surface::HostSurface;
