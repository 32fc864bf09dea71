mod browser;
mod hero;
mod navbar;
mod overlay;
mod particle_field;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_mouse_with_options, UseMouseCoordType, UseMouseOptions, UseMouseReturn};
use std::convert::Infallible;

use crate::theme::ThemeCycle;
use hero::Hero;
use navbar::Navbar;
use overlay::{CustomCursor, ScrollProgress};

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Theme pointer shared between the hero (which rotates it) and the overlays
/// (which tint themselves with it).
#[derive(Debug, Clone, Copy)]
pub struct ActiveTheme(pub RwSignal<ThemeCycle>);

pub fn use_active_theme() -> RwSignal<ThemeCycle> {
    use_context::<ActiveTheme>()
        .map(|t| t.0)
        .unwrap_or_else(|| RwSignal::new(ThemeCycle::new()))
}

/// Pointer position in viewport coordinates, the space `fixed` overlays and
/// window-sized measurements live in.
pub fn use_viewport_mouse() -> UseMouseReturn {
    use_mouse_with_options(UseMouseOptions::default().coord_type(viewport_coords()))
}

fn viewport_coords() -> UseMouseCoordType<Infallible> {
    UseMouseCoordType::Client
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=BUILD_TIME />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased md:cursor-none">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let name = crate::profile::profile().name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    provide_context(ActiveTheme(RwSignal::new(ThemeCycle::new())));

    view! {
        <Title text="Portfolio" />
        <ScrollProgress />
        <CustomCursor />
        <Navbar />
        <main id="home" class="relative">
            <Hero />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_tracks_viewport_not_page() {
        assert!(matches!(viewport_coords(), UseMouseCoordType::Client));
    }

    #[test]
    fn test_active_theme_falls_back_outside_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_active_theme().get_untracked().current().id, "cosmic");
        });
    }
}
