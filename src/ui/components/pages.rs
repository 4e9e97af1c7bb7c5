use crate::ui::Route;
use dioxus::prelude::*;

/// Shared shell for the placeholder pages behind each navigation link
#[component]
fn PlaceholderPage(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
            h1 { class: "text-3xl font-bold font-inter text-[#101828] mb-4", "{title}" }
            p { class: "text-[#667085]", "{body}" }
            // Tall enough to scroll past the header shadow threshold
            div { class: "h-[150vh]" }
        }
    }
}

/// Home page
#[component]
pub fn Home() -> Element {
    rsx! {
        PlaceholderPage { title: "Home", body: "Find something new to learn." }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        PlaceholderPage { title: "About us", body: "Who we are and what we teach." }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        PlaceholderPage { title: "How it works", body: "Pick a course, learn at your pace, get certified." }
    }
}

#[component]
pub fn Blog() -> Element {
    rsx! {
        PlaceholderPage { title: "Contact us", body: "Reach the team." }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        PlaceholderPage { title: "FAQ's", body: "Answers to common questions." }
    }
}

/// Fallback for paths outside the navigation table
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12",
            h1 { class: "text-3xl font-bold font-inter text-[#101828] mb-4", "Page not found" }
            p { class: "text-[#667085] mb-6", "Nothing lives at {path}." }
            Link {
                to: Route::Home {},
                class: "text-[#1A906B] hover:underline",
                "Back to home"
            }
        }
    }
}
