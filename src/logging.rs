//! Log setup for the two halves of the site.
//!
//! Shared code logs through the `log` facade. In the browser that goes to the
//! devtools console via `console_log`; on the server `tracing-subscriber`
//! picks the records up alongside the server's own `tracing` events.

#[cfg(feature = "ssr")]
const DEFAULT_FILTER: &str = "portfolio_site=info,tower_http=info";

#[cfg(feature = "ssr")]
pub fn init_server_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // a second hydrate call in the same page keeps the first logger
    let _ = console_log::init_with_level(level);
}
