// Library exports for integration tests and reusable components

pub mod config;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod scroll;
pub mod ui;
pub mod view;

pub use config::HeaderConfig;
pub use error::NavbarError;
pub use menu::{AuthAction, MenuEvent, MenuState};
pub use navigation::{NavigationEntry, NAV_ENTRIES};
pub use scroll::{ScrollSource, ScrollState, ScrollSubscription, ScrollWatcher};
pub use ui::{HeaderBar, SiteHeader};
pub use view::{HeaderView, NavPlacement};

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
