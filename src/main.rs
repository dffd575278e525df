#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod slots;
mod utils;

use components::SlotMachine;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting emoji slot machine");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Read once; the slot count is fixed for the life of the widget
    let config = use_hook(config::load_config);

    rsx! {
        main {
            class: "min-h-screen flex items-center justify-center",
            SlotMachine { config }
        }
    }
}
