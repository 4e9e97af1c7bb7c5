// Test support utilities for both unit and integration tests

use crate::scroll::{ScrollListener, ScrollSource, ScrollSubscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, ScrollListener)>,
    offset: f64,
}

/// Manual scroll source for testing
///
/// Stands in for the browser window. Tests drive it with `scroll_to` and can
/// check how many listeners are still registered.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    registry: Rc<RefCell<Registry>>,
}

impl ManualScrollSource {
    /// Create a new manual scroll source at offset 0
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the viewport and notify every registered listener
    pub fn scroll_to(&self, offset: f64) {
        let mut registry = self.registry.borrow_mut();
        registry.offset = offset;
        for (_, listener) in registry.listeners.iter_mut() {
            listener(offset);
        }
    }

    pub fn offset(&self) -> f64 {
        self.registry.borrow().offset
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl ScrollSource for ManualScrollSource {
    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, listener));
            id
        };

        let registry: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        ScrollSubscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}
