use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::NavbarError;
use crate::scroll::{
    ScrollListener, ScrollSample, ScrollSource, ScrollState, ScrollSubscription, ScrollWatcher,
};
use dioxus::prelude::*;
use tracing::{debug, warn};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(0);

/// Scroll source backed by `window` in the browser or webview.
///
/// Each instance installs its own handler under a unique key on `window`, so
/// several headers can be mounted without stepping on each other.
pub struct WindowScrollSource {
    key: String,
}

impl Default for WindowScrollSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowScrollSource {
    pub fn new() -> Self {
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            key: format!("__navbarScroll{}", id),
        }
    }

    fn attach_script(&self) -> String {
        format!(
            r#"
            const handler = () => dioxus.send({{ y: window.scrollY }});
            window["{key}"] = handler;
            window.addEventListener("scroll", handler, {{ passive: true }});
            await new Promise(() => {{}});
            "#,
            key = self.key
        )
    }

    fn detach_script(&self) -> String {
        format!(
            r#"
            const handler = window["{key}"];
            if (handler) {{
                window.removeEventListener("scroll", handler);
                delete window["{key}"];
            }}
            "#,
            key = self.key
        )
    }
}

impl ScrollSource for WindowScrollSource {
    fn subscribe(&self, mut listener: ScrollListener) -> ScrollSubscription {
        let attach = self.attach_script();
        let detach = self.detach_script();
        let key = self.key.clone();

        let task = spawn(async move {
            let mut eval = document::eval(&attach);
            loop {
                // Decode ourselves so one bad sample does not close the channel
                match eval.recv::<serde_json::Value>().await {
                    Ok(message) => match ScrollSample::decode(message) {
                        Ok(offset) => listener(offset),
                        Err(e) => warn!("{}", e),
                    },
                    Err(e) => {
                        warn!("{}", NavbarError::ScrollSignal(format!("{:?}", e)));
                        break;
                    }
                }
            }
        });

        debug!("Attached window scroll listener {}", key);
        ScrollSubscription::new(move || {
            task.cancel();
            let _ = document::eval(&detach);
            debug!("Detached window scroll listener {}", key);
        })
    }
}

/// Hook tracking whether the window has scrolled past `threshold`.
///
/// The listener is attached on first render and released when the calling
/// component unmounts.
pub fn use_scroll_state(threshold: f64) -> Signal<ScrollState> {
    let state = use_signal(ScrollState::default);

    let watcher = use_hook(move || {
        let mut state = state;
        let source = WindowScrollSource::new();
        let watcher = ScrollWatcher::attach(&source, threshold, move |next| state.set(next));
        Rc::new(RefCell::new(Some(watcher)))
    });

    use_drop(move || {
        if let Some(mut watcher) = watcher.borrow_mut().take() {
            watcher.detach();
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_waits_for_first_scroll() {
        let source = WindowScrollSource::new();
        let script = source.attach_script();

        assert!(script.contains("addEventListener(\"scroll\", handler"));
        // No sample is sent until the user scrolls
        assert!(!script.contains("handler();"));
        assert_eq!(script.matches("dioxus.send").count(), 1);
    }

    #[test]
    fn test_sources_use_distinct_window_keys() {
        let first = WindowScrollSource::new();
        let second = WindowScrollSource::new();

        assert_ne!(first.key, second.key);
        let slot = |source: &WindowScrollSource| format!("window[\"{}\"]", source.key);
        assert!(second.detach_script().contains(&slot(&second)));
        assert!(!second.detach_script().contains(&slot(&first)));
    }
}
