//! Render model for the header.
//!
//! Everything conditional in the markup (shadow, highlighted link, open menu)
//! is decided here from plain state, so the Dioxus components only read
//! fields and never branch on raw state themselves.

use crate::menu::{MenuState, ToggleIcon};
use crate::navigation::{active_entry, NavigationEntry};
use crate::scroll::ScrollState;

const HEADER_BASE_CLASS: &str = "bg-white sticky top-0 z-50 transition-all duration-300 w-full";
const HEADER_SCROLLED_CLASS: &str = "shadow-md";

const DESKTOP_LINK_BASE: &str = "px-2 py-2 text-sm font-medium font-inter whitespace-nowrap";
const DESKTOP_LINK_ACTIVE: &str = "text-[#1A906B]";
const DESKTOP_LINK_INACTIVE: &str = "text-[#101828] hover:text-[#1A906B] transition-colors";

const MOBILE_LINK_BASE: &str = "block px-3 py-4 rounded-md text-base font-medium font-inter transition-colors";
const MOBILE_LINK_ACTIVE: &str = "bg-[#F2FFFB] text-[#1A906B]";
const MOBILE_LINK_INACTIVE: &str = "text-[#101828] hover:bg-gray-50 hover:text-[#1A906B]";

/// Where a link list is rendered; the two lists share entries but not styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlacement {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkView {
    pub display_name: &'static str,
    pub path: &'static str,
    pub is_active: bool,
    pub class: String,
}

impl NavLinkView {
    fn new(entry: &NavigationEntry, is_active: bool, placement: NavPlacement) -> Self {
        let (base, state) = match (placement, is_active) {
            (NavPlacement::Desktop, true) => (DESKTOP_LINK_BASE, DESKTOP_LINK_ACTIVE),
            (NavPlacement::Desktop, false) => (DESKTOP_LINK_BASE, DESKTOP_LINK_INACTIVE),
            (NavPlacement::Mobile, true) => (MOBILE_LINK_BASE, MOBILE_LINK_ACTIVE),
            (NavPlacement::Mobile, false) => (MOBILE_LINK_BASE, MOBILE_LINK_INACTIVE),
        };

        Self {
            display_name: entry.display_name,
            path: entry.path,
            is_active,
            class: format!("{} {}", base, state),
        }
    }
}

/// State of the mobile toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub state: MenuState,
    pub label: &'static str,
    pub aria_expanded: &'static str,
    pub icon: ToggleIcon,
}

impl From<MenuState> for MenuView {
    fn from(state: MenuState) -> Self {
        Self {
            state,
            label: state.toggle_label(),
            aria_expanded: state.aria_expanded(),
            icon: state.toggle_icon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub header_class: String,
    /// Path of the highlighted entry, if the current page is in the table
    pub active_path: Option<&'static str>,
    pub desktop_links: Vec<NavLinkView>,
    pub mobile_links: Vec<NavLinkView>,
    pub menu: MenuView,
    pub show_overlay: bool,
    pub show_backdrop: bool,
}

impl HeaderView {
    pub fn derive(
        scroll: ScrollState,
        menu: MenuState,
        current_path: &str,
        entries: &[NavigationEntry],
    ) -> Self {
        let header_class = if scroll.is_scrolled() {
            format!("{} {}", HEADER_BASE_CLASS, HEADER_SCROLLED_CLASS)
        } else {
            HEADER_BASE_CLASS.to_string()
        };

        let active_path = active_entry(entries, current_path).map(|entry| entry.path);
        let links = |placement| {
            entries
                .iter()
                .map(|entry| NavLinkView::new(entry, active_path == Some(entry.path), placement))
                .collect::<Vec<_>>()
        };

        Self {
            header_class,
            active_path,
            desktop_links: links(NavPlacement::Desktop),
            mobile_links: links(NavPlacement::Mobile),
            menu: MenuView::from(menu),
            show_overlay: menu.is_open(),
            show_backdrop: menu.is_open(),
        }
    }

    pub fn has_shadow(&self) -> bool {
        self.header_class.split_whitespace().any(|c| c == HEADER_SCROLLED_CLASS)
    }

    pub fn links(&self, placement: NavPlacement) -> &[NavLinkView] {
        match placement {
            NavPlacement::Desktop => &self.desktop_links,
            NavPlacement::Mobile => &self.mobile_links,
        }
    }

    /// Display names of highlighted links in one list
    pub fn active_names(&self, placement: NavPlacement) -> Vec<&'static str> {
        self.links(placement)
            .iter()
            .filter(|link| link.is_active)
            .map(|link| link.display_name)
            .collect()
    }
}
