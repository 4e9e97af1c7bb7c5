use crate::view::NavPlacement;
use dioxus::prelude::*;

use super::icons::{ChevronDownIcon, SearchIcon};

const DESKTOP_INPUT_CLASS: &str = "block w-full pl-10 pr-24 py-2 border border-gray-300 rounded-lg bg-white text-[#667085] placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-[#20B486] focus:border-transparent text-sm transition-all";
const MOBILE_INPUT_CLASS: &str = "block w-full pl-10 pr-12 py-3 border border-gray-300 rounded-lg bg-white text-[#667085] placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-[#20B486] focus:border-transparent text-base";

/// Wrapper, input and button classes for one placement
fn classes(placement: NavPlacement) -> (&'static str, &'static str, &'static str) {
    match placement {
        NavPlacement::Desktop => (
            "relative w-full",
            DESKTOP_INPUT_CLASS,
            "px-3 h-full flex items-center text-sm font-inter text-[#20B486] bg-[#20B486]/4 rounded-r-lg",
        ),
        NavPlacement::Mobile => (
            "relative my-4",
            MOBILE_INPUT_CLASS,
            "px-3 h-full flex items-center text-sm font-medium text-[#20B486] bg-[#20B486]/4 rounded-r-lg",
        ),
    }
}

/// Search field with a trailing "Explore" button.
///
/// Visual only: typing does nothing, and the button forwards to `on_explore`
/// when one is supplied.
#[component]
pub fn SearchBox(
    placement: NavPlacement,
    placeholder: String,
    explore_label: String,
    on_explore: Option<EventHandler<MouseEvent>>,
) -> Element {
    let (wrapper_class, input_class, button_class) = classes(placement);

    rsx! {
        div { class: wrapper_class,
            div { class: "absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none",
                SearchIcon {}
            }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                class: input_class,
            }
            div { class: "absolute inset-y-0 right-0 flex items-center",
                button {
                    r#type: "button",
                    class: button_class,
                    onclick: move |evt| {
                        if let Some(handler) = on_explore {
                            handler.call(evt);
                        }
                    },
                    "{explore_label}"
                    ChevronDownIcon {}
                }
            }
        }
    }
}
