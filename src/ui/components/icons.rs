use crate::menu::ToggleIcon;
use dioxus::prelude::*;

#[component]
pub fn SearchIcon() -> Element {
    rsx! {
        svg {
            class: "h-5 w-5 text-gray-400",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                d: "M21 21l-4-4m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
            }
        }
    }
}

#[component]
pub fn ChevronDownIcon() -> Element {
    rsx! {
        svg {
            class: "ml-1 h-4 w-4",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                d: "M19 9l-7 7-7-7",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
            }
        }
    }
}

/// Hamburger or close glyph for the mobile menu button
#[component]
pub fn MenuToggleIcon(icon: ToggleIcon) -> Element {
    rsx! {
        svg {
            class: "block h-6 w-6",
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                d: icon.path(),
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
            }
        }
    }
}
