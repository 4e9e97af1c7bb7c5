use thiserror::Error;

/// Failures on the header's degraded paths.
///
/// None of these reach the user. The header keeps its default state
/// (not scrolled, nothing highlighted) and the error is logged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavbarError {
    #[error("Scroll signal unavailable: {0}")]
    ScrollSignal(String),
    #[error("Invalid scroll sample: {0}")]
    ScrollSample(String),
    #[error("Invalid header configuration: {0}")]
    Config(String),
}
