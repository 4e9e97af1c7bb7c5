use navbar::ui::App;
use tracing::info;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    // Dev mode: pick up RUST_LOG from a local .env if present
    #[cfg(debug_assertions)]
    let _ = dotenvy::dotenv();

    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

fn main() {
    init_tracing();
    info!("Starting navbar site");

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(navbar::ui::make_config())
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
