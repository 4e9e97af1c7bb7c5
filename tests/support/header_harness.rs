#![allow(dead_code)] // Not every test binary uses every helper

use std::cell::RefCell;
use std::rc::Rc;

use navbar::config::HeaderConfig;
use navbar::menu::{MenuEvent, MenuState};
use navbar::navigation::NAV_ENTRIES;
use navbar::scroll::{ScrollState, ScrollWatcher};
use navbar::test_support::ManualScrollSource;
use navbar::view::HeaderView;

/// Header state wired the same way the component wires it, minus the DOM.
///
/// The viewport is a [`ManualScrollSource`]; clicks go through `click`;
/// `view` renders the current state.
pub struct HeaderHarness {
    pub viewport: ManualScrollSource,
    watcher: Option<ScrollWatcher>,
    menu: MenuState,
    current_path: String,
    scroll_changes: Rc<RefCell<Vec<bool>>>,
}

impl HeaderHarness {
    pub fn mount(current_path: &str) -> Self {
        let config = HeaderConfig::default();
        let viewport = ManualScrollSource::new();
        let scroll_changes = Rc::new(RefCell::new(Vec::new()));
        let sink = scroll_changes.clone();
        let watcher = ScrollWatcher::attach(&viewport, config.scroll_threshold, move |state| {
            sink.borrow_mut().push(state.is_scrolled());
        });

        Self {
            viewport,
            watcher: Some(watcher),
            menu: MenuState::default(),
            current_path: current_path.to_string(),
            scroll_changes,
        }
    }

    pub fn unmount(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.detach();
        }
    }

    pub fn navigate(&mut self, path: &str) {
        self.current_path = path.to_string();
    }

    pub fn click(&mut self, event: MenuEvent) {
        self.menu = self.menu.transition(event);
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.watcher
            .as_ref()
            .map(|watcher| watcher.state())
            .unwrap_or_default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll_state().is_scrolled()
    }

    /// Every flip the watcher reported, in order
    pub fn scroll_changes(&self) -> Vec<bool> {
        self.scroll_changes.borrow().clone()
    }

    pub fn view(&self) -> HeaderView {
        HeaderView::derive(self.scroll_state(), self.menu, &self.current_path, NAV_ENTRIES)
    }
}
