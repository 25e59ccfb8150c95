//! Construction-time configuration for a menu instance.

use slidemenu_core::{Edge, KeyCode};

/// Which side of the viewport the menu slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    Left,
    #[default]
    Right,
}

impl Position {
    /// The edge the menu root is pinned to while at rest.
    #[must_use]
    pub const fn resting_edge(self) -> Edge {
        match self {
            Self::Left => Edge::Left,
            Self::Right => Edge::Right,
        }
    }
}

/// Menu configuration. Immutable after construction.
///
/// All fields have defaults: right-positioned, Escape closes, no open
/// key, back links shown, empty decoration fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideMenuOptions {
    /// Resting edge and closed-state offset sign.
    pub position: Position,
    /// Key that opens the menu. Unbound by default.
    pub keycode_open: Option<KeyCode>,
    /// Key that closes the menu.
    pub keycode_close: KeyCode,
    /// Inject a back control as the first entry of every submenu.
    pub show_back_link: bool,
    /// Text spliced before the label of every item that owns a submenu.
    pub submenu_link_before: String,
    /// Text spliced after the label of every item that owns a submenu.
    pub submenu_link_after: String,
    /// Text spliced before the label of every injected back control.
    pub back_link_before: String,
    /// Text spliced after the label of every injected back control.
    pub back_link_after: String,
}

impl Default for SlideMenuOptions {
    fn default() -> Self {
        Self {
            position: Position::Right,
            keycode_open: None,
            keycode_close: KeyCode::Escape,
            show_back_link: true,
            submenu_link_before: String::new(),
            submenu_link_after: String::new(),
            back_link_before: String::new(),
            back_link_after: String::new(),
        }
    }
}

impl SlideMenuOptions {
    /// Defaults, identical to [`Default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resting position.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Bind (or unbind) the open key.
    #[must_use]
    pub fn keycode_open(mut self, code: Option<KeyCode>) -> Self {
        self.keycode_open = code;
        self
    }

    /// Bind the close key.
    #[must_use]
    pub fn keycode_close(mut self, code: KeyCode) -> Self {
        self.keycode_close = code;
        self
    }

    /// Enable or disable back-link injection.
    #[must_use]
    pub fn show_back_link(mut self, show: bool) -> Self {
        self.show_back_link = show;
        self
    }

    /// Set the submenu-link leading fragment.
    #[must_use]
    pub fn submenu_link_before(mut self, text: impl Into<String>) -> Self {
        self.submenu_link_before = text.into();
        self
    }

    /// Set the submenu-link trailing fragment.
    #[must_use]
    pub fn submenu_link_after(mut self, text: impl Into<String>) -> Self {
        self.submenu_link_after = text.into();
        self
    }

    /// Set the back-link leading fragment.
    #[must_use]
    pub fn back_link_before(mut self, text: impl Into<String>) -> Self {
        self.back_link_before = text.into();
        self
    }

    /// Set the back-link trailing fragment.
    #[must_use]
    pub fn back_link_after(mut self, text: impl Into<String>) -> Self {
        self.back_link_after = text.into();
        self
    }
}
