//! Input and completion events the widget consumes.
//!
//! The widget owns no event loop. The embedder translates host input into
//! [`Event`] values and feeds them to the menu (or to a registry fanning
//! out to several menus). Transition completion is just another event:
//! the host reports that a style transition finished, and the widget uses
//! that as its animation-sequencing signal.
//!
//! # Invariants
//! 1. Events are delivered one at a time on a single thread; the widget is
//!    never re-entered while handling an event.
//! 2. A `TransitionEnd` may arrive at any time, including when no
//!    animation is in flight (stray completions from unrelated
//!    transitions). Handlers must tolerate this.

use crate::node::NodeId;

/// A key identifier, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape. The default close key.
    Escape,
    Enter,
    /// A printable character.
    Char(char),
    /// Any key the host reports only as a raw code.
    Other(u32),
}

/// An event delivered to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed. Delivered regardless of focus; the menu decides
    /// whether the key matches one of its configured shortcuts.
    Key(KeyCode),
    /// A node was activated (click or tap).
    Click { target: NodeId },
    /// A style transition on `node` finished. The completion signal.
    TransitionEnd { node: NodeId },
}

/// Whether a handler consumed an event.
///
/// `Handled` means the host must suppress the default behavior for the
/// input (the `preventDefault` contract); `Passed` means the event flows
/// on untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    Passed,
}

impl Outcome {
    /// True if the event was consumed.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_is_handled() {
        assert!(Outcome::Handled.is_handled());
        assert!(!Outcome::Passed.is_handled());
    }

    #[test]
    fn key_codes_compare() {
        assert_eq!(KeyCode::Escape, KeyCode::Escape);
        assert_ne!(KeyCode::Char('a'), KeyCode::Char('b'));
        assert_ne!(KeyCode::Other(27), KeyCode::Other(13));
    }
}
