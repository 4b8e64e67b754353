use dioxus::prelude::*;

use ui::core::host;
use ui::views::Dashboard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Handshake with the Telegram container before anything renders.
    host::ready();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Dashboard {}
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Err means a logger is already installed (hot reload); keep going.
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}
