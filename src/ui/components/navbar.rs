use crate::ui::Route;
use dioxus::prelude::*;

use super::Logo;
use super::SiteHeader;

/// Layout component: site header on top of the routed page
#[component]
pub fn Navbar() -> Element {
    let current_route = use_route::<Route>();

    rsx! {
        SiteHeader {
            current_path: current_route.to_string(),
            logo: rsx! { Logo {} },
        }
        main { class: "min-h-screen", Outlet::<Route> {} }
    }
}
