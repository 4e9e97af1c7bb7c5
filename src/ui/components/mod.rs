pub mod app;
pub mod icons;
pub mod logo;
pub mod mobile_menu;
pub mod navbar;
pub mod pages;
pub mod scroll_hooks;
pub mod search_box;
pub mod site_header;

pub use app::App;
pub use logo::Logo;
pub use mobile_menu::MobileMenu;
pub use navbar::Navbar;
pub use pages::{About, Blog, Contact, Home, PageNotFound, Services};
pub use scroll_hooks::use_scroll_state;
pub use search_box::SearchBox;
pub use site_header::{HeaderBar, SiteHeader};
