use crate::config::HeaderConfig;
use crate::ui::{Route, MAIN_CSS, TAILWIND_CSS};
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    use_context_provider(HeaderConfig::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
