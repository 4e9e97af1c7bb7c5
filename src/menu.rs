use tracing::debug;

/// SVG path for the hamburger icon shown while the menu is closed
pub const OPEN_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";
/// SVG path for the close icon shown while the menu is open
pub const CLOSE_ICON_PATH: &str = "M6 18L18 6M6 6l12 12";
/// Accessible name of the toggle button, independent of state
pub const TOGGLE_ARIA_LABEL: &str = "Main menu";

/// Visibility of the mobile overlay menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Clicks that affect the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ToggleClicked,
    NavLinkClicked,
    SignInClicked,
    CreateAccountClicked,
    BackdropClicked,
}

/// The two placeholder auth buttons, rendered in both the desktop bar and
/// the mobile overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    CreateAccount,
}

impl AuthAction {
    pub const ALL: [AuthAction; 2] = [AuthAction::SignIn, AuthAction::CreateAccount];

    /// Event the mobile copy of this button feeds to the menu
    pub fn menu_event(&self) -> MenuEvent {
        match self {
            AuthAction::SignIn => MenuEvent::SignInClicked,
            AuthAction::CreateAccount => MenuEvent::CreateAccountClicked,
        }
    }
}

/// Which glyph the toggle button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Hamburger,
    Close,
}

impl ToggleIcon {
    pub fn path(&self) -> &'static str {
        match self {
            ToggleIcon::Hamburger => OPEN_ICON_PATH,
            ToggleIcon::Close => CLOSE_ICON_PATH,
        }
    }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state after `event`.
    ///
    /// Only the toggle can open the menu. Every other event closes it, and is
    /// a no-op when the menu is already closed.
    pub fn transition(self, event: MenuEvent) -> MenuState {
        let next = match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleClicked) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        };
        if next != self {
            debug!("Menu {:?} -> {:?} on {:?}", self, next, event);
        }
        next
    }

    pub fn toggle_icon(&self) -> ToggleIcon {
        match self {
            MenuState::Closed => ToggleIcon::Hamburger,
            MenuState::Open => ToggleIcon::Close,
        }
    }

    /// Screen-reader text inside the toggle button
    pub fn toggle_label(&self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }

    /// Value for the toggle's `aria-expanded`
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}
