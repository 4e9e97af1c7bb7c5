use crate::config::{use_header_config, HeaderConfig};
use crate::menu::{MenuEvent, MenuState, TOGGLE_ARIA_LABEL};
use crate::navigation::NAV_ENTRIES;
use crate::view::{HeaderView, NavPlacement};
use dioxus::prelude::*;
use tracing::debug;

use super::icons::MenuToggleIcon;
use super::scroll_hooks::use_scroll_state;
use super::{MobileMenu, SearchBox};

fn dispatch(mut menu: Signal<MenuState>, event: MenuEvent) {
    let current = *menu.peek();
    let next = current.transition(event);
    if next != current {
        menu.set(next);
    }
}

/// Sticky site header: logo, search, navigation, auth buttons and the
/// collapsible mobile menu.
///
/// `current_path` comes from the router and drives link highlighting.
/// Search, sign-in and create-account are placeholders; their handlers are
/// optional and nothing happens when they are absent.
#[component]
pub fn SiteHeader(
    current_path: String,
    logo: Element,
    on_explore: Option<EventHandler<MouseEvent>>,
    on_sign_in: Option<EventHandler<MouseEvent>>,
    on_create_account: Option<EventHandler<MouseEvent>>,
) -> Element {
    let config = use_header_config();
    let scroll = use_scroll_state(config.scroll_threshold);
    let menu = use_signal(MenuState::default);

    let view = HeaderView::derive(scroll(), menu(), &current_path, NAV_ENTRIES);
    debug!(
        "Rendering header: path={} scrolled={} menu={:?}",
        current_path,
        view.has_shadow(),
        view.menu.state
    );

    rsx! {
        HeaderBar {
            view,
            logo,
            config,
            on_menu_event: move |event: MenuEvent| dispatch(menu, event),
            on_explore,
            on_sign_in,
            on_create_account,
        }
    }
}

/// Markup for one [`HeaderView`]. Holds no state: menu clicks go out
/// through `on_menu_event`.
#[component]
pub fn HeaderBar(
    view: HeaderView,
    logo: Element,
    config: HeaderConfig,
    on_menu_event: EventHandler<MenuEvent>,
    on_explore: Option<EventHandler<MouseEvent>>,
    on_sign_in: Option<EventHandler<MouseEvent>>,
    on_create_account: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        header { class: "{view.header_class}",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center h-16 md:h-20",
                    div { class: "flex items-center", {logo} }

                    div { class: "hidden lg:flex flex-1 mx-4 xl:mx-6 max-w-xl",
                        SearchBox {
                            placement: NavPlacement::Desktop,
                            placeholder: config.desktop_search_placeholder.clone(),
                            explore_label: config.explore_label.clone(),
                            on_explore,
                        }
                    }

                    nav { class: "hidden lg:flex items-center space-x-1 xl:space-x-4",
                        for link in view.desktop_links.iter() {
                            Link {
                                key: "{link.path}",
                                to: link.path,
                                class: "{link.class}",
                                "{link.display_name}"
                            }
                        }
                    }

                    div { class: "hidden lg:flex items-center ml-2 xl:ml-4 whitespace-nowrap",
                        button {
                            class: "mr-2 px-3 py-2 text-sm font-inter font-bold text-[#101828] hover:text-[#1A906B] transition-colors",
                            onclick: move |evt| {
                                if let Some(handler) = on_sign_in {
                                    handler.call(evt);
                                }
                            },
                            "{config.sign_in_label}"
                        }
                        button {
                            class: "px-3 py-2 text-sm font-inter font-medium text-white bg-[#20B486] rounded-lg hover:bg-[#1A906B] transition-colors shadow-sm",
                            onclick: move |evt| {
                                if let Some(handler) = on_create_account {
                                    handler.call(evt);
                                }
                            },
                            "{config.create_account_label}"
                        }
                    }

                    div { class: "lg:hidden flex items-center",
                        button {
                            class: "inline-flex items-center justify-center p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-[#20B486] transition-all",
                            "aria-expanded": view.menu.aria_expanded,
                            "aria-label": TOGGLE_ARIA_LABEL,
                            onclick: move |_| on_menu_event.call(MenuEvent::ToggleClicked),
                            span { class: "sr-only", "{view.menu.label}" }
                            MenuToggleIcon { icon: view.menu.icon }
                        }
                    }
                }
            }

            if view.show_overlay {
                MobileMenu {
                    links: view.mobile_links.clone(),
                    config: config.clone(),
                    on_close: on_menu_event,
                    on_explore,
                    on_sign_in,
                    on_create_account,
                }
            }

            if view.show_backdrop {
                div {
                    class: "lg:hidden fixed inset-0 bg-black/25 z-40",
                    style: config.overlay_style(),
                    onclick: move |_| on_menu_event.call(MenuEvent::BackdropClicked),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollState;
    use crate::ui::Route;
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;

    fn provide_history(path: &str) {
        let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
        provide_context(history);
    }

    fn render(mut dom: VirtualDom) -> String {
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn count(html: &str, class: &str) -> usize {
        html.matches(&format!("class=\"{}\"", class)).count()
    }

    /// The whole app, routed to `path`
    #[component]
    fn SiteAt(path: String, config: Option<HeaderConfig>) -> Element {
        use_hook(|| {
            provide_history(&path);
            if let Some(config) = config.clone() {
                provide_context(config);
            }
        });
        rsx! { Router::<Route> {} }
    }

    fn render_site(path: &str, config: Option<HeaderConfig>) -> String {
        render(VirtualDom::new_with_props(
            SiteAt,
            SiteAtProps {
                path: path.to_string(),
                config,
            },
        ))
    }

    #[derive(Debug, Clone, Routable, PartialEq)]
    #[rustfmt::skip]
    enum OpenMenuRoute {
        #[layout(OpenHeader)]
            #[route("/about")]
            OpenAtAbout {},
    }

    #[component]
    fn OpenHeader() -> Element {
        let route = use_route::<OpenMenuRoute>();
        let view = HeaderView::derive(
            ScrollState::default(),
            MenuState::Open,
            &route.to_string(),
            NAV_ENTRIES,
        );
        rsx! {
            HeaderBar {
                view,
                logo: rsx! {},
                config: HeaderConfig::default(),
                on_menu_event: move |_: MenuEvent| {},
            }
            Outlet::<OpenMenuRoute> {}
        }
    }

    #[component]
    fn OpenAtAbout() -> Element {
        rsx! {}
    }

    #[component]
    fn OpenMenuApp() -> Element {
        use_hook(|| provide_history("/about"));
        rsx! { Router::<OpenMenuRoute> {} }
    }

    #[test]
    fn test_closed_header_at_about() {
        let html = render_site("/about", None);
        let view =
            HeaderView::derive(ScrollState::default(), MenuState::Closed, "/about", NAV_ENTRIES);

        assert!(html.contains(">About us</a>"));
        assert_eq!(count(&html, &view.desktop_links[1].class), 1);
        assert_eq!(count(&html, &view.desktop_links[0].class), 4);

        // Overlay and backdrop only exist while the menu is open
        assert!(!html.contains("id=\"mobile-menu\""));
        assert!(!html.contains("fixed inset-0 bg-black"));
        assert!(!html.contains("aria-controls"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("Open menu"));
    }

    #[test]
    fn test_unknown_page_highlights_nothing() {
        let html = render_site("/pricing", None);
        let view =
            HeaderView::derive(ScrollState::default(), MenuState::Closed, "/pricing", NAV_ENTRIES);

        assert_eq!(count(&html, &view.desktop_links[0].class), 5);
    }

    #[test]
    fn test_open_header_at_about() {
        let html = render(VirtualDom::new(OpenMenuApp));
        let view =
            HeaderView::derive(ScrollState::default(), MenuState::Open, "/about", NAV_ENTRIES);

        assert!(html.contains("id=\"mobile-menu\""));
        assert!(html.contains("lg:hidden fixed inset-0 bg-black"));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("Close menu"));

        // One highlighted link per list
        assert_eq!(count(&html, &view.desktop_links[1].class), 1);
        assert_eq!(count(&html, &view.mobile_links[1].class), 1);
        assert_eq!(count(&html, &view.mobile_links[0].class), 4);
        assert_eq!(html.matches(">About us</a>").count(), 2);
    }

    #[test]
    fn test_invalid_config_renders_default_copy() {
        let config = HeaderConfig {
            scroll_threshold: f64::NAN,
            sign_in_label: "Log in".to_string(),
            ..HeaderConfig::default()
        };
        let html = render_site("/", Some(config));

        assert!(html.contains(">Sign in</button>"));
        assert!(!html.contains("Log in"));
    }

    #[test]
    fn test_valid_config_copy_is_rendered() {
        let config = HeaderConfig {
            sign_in_label: "Log in".to_string(),
            ..HeaderConfig::default()
        };
        let html = render_site("/", Some(config));

        assert!(html.contains(">Log in</button>"));
    }
}
