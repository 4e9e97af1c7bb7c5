//! Scroll tracking for the header shadow.
//!
//! The viewport pushes vertical offsets into a [`ScrollSource`]. A
//! [`ScrollWatcher`] turns those offsets into a [`ScrollState`] and holds the
//! [`ScrollSubscription`] for as long as the header is mounted. Releasing the
//! subscription (explicitly or by drop) unregisters the listener, so nothing
//! fires after unmount.

use std::cell::Cell;
use std::rc::Rc;

use serde::Deserialize;
use tracing::debug;

use crate::config::DEFAULT_SCROLL_THRESHOLD;
use crate::error::NavbarError;

/// Callback invoked with the vertical scroll offset in pixels
pub type ScrollListener = Box<dyn FnMut(f64)>;

/// Anything that can push scroll offsets to a listener.
pub trait ScrollSource {
    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription;
}

/// Registration handle returned by [`ScrollSource::subscribe`].
///
/// The release hook runs exactly once: on the first `release()` call or on
/// drop, whichever comes first.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Whether the page has scrolled past the shadow threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    is_scrolled: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        // NaN compares false, which keeps the default
        Self {
            is_scrolled: offset > threshold,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }
}

/// `true` iff `offset` is past the default 10px threshold
pub fn is_scrolled(offset: f64) -> bool {
    ScrollState::from_offset(offset, DEFAULT_SCROLL_THRESHOLD).is_scrolled()
}

/// One sample posted by the window scroll listener: `{ "y": window.scrollY }`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScrollSample {
    pub y: f64,
}

impl ScrollSample {
    /// Decode one message from the listener into a vertical offset
    pub fn decode(message: serde_json::Value) -> Result<f64, NavbarError> {
        serde_json::from_value::<ScrollSample>(message)
            .map(|sample| sample.y)
            .map_err(|e| NavbarError::ScrollSample(e.to_string()))
    }
}

/// Derives [`ScrollState`] from a [`ScrollSource`] for the lifetime of the watcher.
pub struct ScrollWatcher {
    state: Rc<Cell<ScrollState>>,
    subscription: ScrollSubscription,
}

impl ScrollWatcher {
    /// Subscribe to `source`. `on_change` runs only when the derived state flips.
    pub fn attach<S>(
        source: &S,
        threshold: f64,
        mut on_change: impl FnMut(ScrollState) + 'static,
    ) -> Self
    where
        S: ScrollSource + ?Sized,
    {
        let state = Rc::new(Cell::new(ScrollState::default()));
        let listener_state = state.clone();

        let subscription = source.subscribe(Box::new(move |offset| {
            let next = ScrollState::from_offset(offset, threshold);
            if listener_state.replace(next) != next {
                debug!("Scroll state changed: is_scrolled={}", next.is_scrolled());
                on_change(next);
            }
        }));

        Self {
            state,
            subscription,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state.get()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn detach(&mut self) {
        self.subscription.release();
    }
}
