#![forbid(unsafe_code)]

//! Hierarchical slide-menu navigation widget.
//!
//! A nested list of links becomes a sliding panel menu: activating an item
//! with children slides the panel one level deeper, a back control returns
//! up a level, and the whole menu toggles on and off screen. All host
//! interaction goes through the [`HostSurface`](slidemenu_core::HostSurface)
//! capability trait, so the navigation state machine runs headless.
//!
//! # Pieces
//! - [`SlideMenu`]: the per-root controller (depth, open state, in-flight
//!   animation, navigation).
//! - [`SlideMenuOptions`]: construction-time configuration.
//! - [`MenuRegistry`]: page-level fan-out and remote-control dispatch.
//!
//! # Event model
//! The embedder feeds [`Event`](slidemenu_core::Event) values to
//! [`SlideMenu::handle_event`] (or to a registry). Transition completion is
//! an event too: the widget marks itself animating when it issues a
//! transform and stays locked for navigation until the host reports the
//! transition finished.

pub mod control;
pub mod menu;
pub mod options;

mod decorate;

pub use control::{ControlAction, MenuRegistry};
pub use menu::{MenuError, SlideMenu};
pub use options::{Position, SlideMenuOptions};
