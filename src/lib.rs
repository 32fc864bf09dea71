#![recursion_limit = "256"]

pub mod anchor;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod logging;
pub mod motion;
pub mod particles;
pub mod profile;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    logging::init_browser_logging();
    leptos::mount::hydrate_body(App);
}
