use crate::ui::Route;
use dioxus::prelude::*;

/// Stand-in brand mark; the header takes any element as its logo.
#[component]
pub fn Logo() -> Element {
    rsx! {
        Link {
            to: Route::Home {},
            class: "flex items-center gap-2 text-xl font-bold font-inter text-[#101828]",
            span { class: "inline-block h-8 w-8 rounded-lg bg-[#20B486]" }
            "Learn"
        }
    }
}
