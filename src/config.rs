use crate::error::NavbarError;
use dioxus::prelude::*;
use tracing::warn;

/// Vertical offset, in pixels, past which the header gets its shadow.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 10.0;

/// Height of the collapsed header bar on small screens. The mobile overlay
/// and backdrop start right below it.
pub const DEFAULT_OVERLAY_TOP_PX: u32 = 64;

/// Header configuration
///
/// Everything here is presentation: the scroll threshold, where the mobile
/// overlay starts, and the copy on the inert controls. Defaults match the
/// production site.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderConfig {
    /// Header is "scrolled" when the offset is strictly greater than this
    pub scroll_threshold: f64,
    /// Top offset for the mobile overlay and its backdrop
    pub overlay_top_px: u32,
    pub desktop_search_placeholder: String,
    pub mobile_search_placeholder: String,
    pub explore_label: String,
    pub sign_in_label: String,
    pub create_account_label: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            overlay_top_px: DEFAULT_OVERLAY_TOP_PX,
            desktop_search_placeholder: "Want to learn?".to_string(),
            mobile_search_placeholder: "Want to learn...".to_string(),
            explore_label: "Explore".to_string(),
            sign_in_label: "Sign in".to_string(),
            create_account_label: "Create an account".to_string(),
        }
    }
}

impl HeaderConfig {
    /// Reject thresholds that would make the scroll rule meaningless.
    pub fn validate(&self) -> Result<(), NavbarError> {
        if !self.scroll_threshold.is_finite() {
            return Err(NavbarError::Config(format!(
                "scroll threshold must be finite, got {}",
                self.scroll_threshold
            )));
        }
        if self.scroll_threshold < 0.0 {
            return Err(NavbarError::Config(format!(
                "scroll threshold must not be negative, got {}",
                self.scroll_threshold
            )));
        }
        Ok(())
    }

    /// This config if it validates, otherwise the defaults.
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("{}, falling back to defaults", e);
                Self::default()
            }
        }
    }

    /// Inline style placing the overlay and backdrop below the header bar
    pub fn overlay_style(&self) -> String {
        format!("top: {}px;", self.overlay_top_px)
    }
}

/// Hook to access the header configuration.
///
/// Falls back to the defaults when no ancestor provided one, or when the
/// provided one does not validate.
pub fn use_header_config() -> HeaderConfig {
    try_use_context::<HeaderConfig>()
        .map(HeaderConfig::or_default_if_invalid)
        .unwrap_or_default()
}
