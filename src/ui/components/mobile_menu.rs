use crate::config::HeaderConfig;
use crate::menu::{AuthAction, MenuEvent};
use crate::view::{NavLinkView, NavPlacement};
use dioxus::prelude::*;

use super::SearchBox;

/// Full-width overlay shown below the header bar while the mobile menu is open.
///
/// Every link and auth button reports its click through `on_close`, which
/// closes the menu, before any placeholder handler runs.
#[component]
pub fn MobileMenu(
    links: Vec<NavLinkView>,
    config: HeaderConfig,
    on_close: EventHandler<MenuEvent>,
    on_explore: Option<EventHandler<MouseEvent>>,
    on_sign_in: Option<EventHandler<MouseEvent>>,
    on_create_account: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div {
            id: "mobile-menu",
            class: "lg:hidden fixed inset-0 z-50 bg-white overflow-y-auto",
            style: config.overlay_style(),
            div { class: "px-4 py-4 space-y-1 sm:px-6 max-h-screen",
                SearchBox {
                    placement: NavPlacement::Mobile,
                    placeholder: config.mobile_search_placeholder.clone(),
                    explore_label: config.explore_label.clone(),
                    on_explore,
                }

                div { class: "border-t border-gray-200 pt-4",
                    for link in links.iter() {
                        Link {
                            key: "{link.path}",
                            to: link.path,
                            class: "{link.class}",
                            onclick: move |_| on_close.call(MenuEvent::NavLinkClicked),
                            "{link.display_name}"
                        }
                    }
                }

                div { class: "border-t border-gray-200 pt-6 pb-4 space-y-4 mt-4",
                    button {
                        class: "w-full px-4 py-3 text-base font-inter font-medium text-[#101828] border border-gray-300 hover:bg-gray-50 rounded-lg transition-colors",
                        onclick: move |evt| {
                            on_close.call(AuthAction::SignIn.menu_event());
                            if let Some(handler) = on_sign_in {
                                handler.call(evt);
                            }
                        },
                        "{config.sign_in_label}"
                    }
                    button {
                        class: "w-full px-4 py-3 text-base font-inter font-medium text-white bg-[#20B486] rounded-lg hover:bg-[#1A906B] transition-colors shadow-sm",
                        onclick: move |evt| {
                            on_close.call(AuthAction::CreateAccount.menu_event());
                            if let Some(handler) = on_create_account {
                                handler.call(evt);
                            }
                        },
                        "{config.create_account_label}"
                    }
                }
            }
        }
    }
}
