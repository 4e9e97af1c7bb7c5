use dioxus::prelude::*;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Site routes. Every page renders under the [`Navbar`] layout, including
/// unknown paths, which show the header with no link highlighted.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/blog")]
    Blog {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
pub fn make_config() -> dioxus::desktop::Config {
    dioxus::desktop::Config::default().with_window(make_window())
}

#[cfg(feature = "desktop")]
fn make_window() -> dioxus::desktop::WindowBuilder {
    dioxus::desktop::WindowBuilder::new()
        .with_title("navbar")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
