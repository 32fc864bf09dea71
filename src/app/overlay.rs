use leptos::{ev::scroll, prelude::*};
use leptos_use::{use_event_listener, use_window, UseMouseReturn, UseMouseSourceType};

use super::browser::scroll_metrics;
use super::{use_active_theme, use_viewport_mouse};

/// Ring plus dot that follow the pointer, tinted with the active theme.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let theme = use_active_theme();
    let UseMouseReturn {
        x, y, source_type, ..
    } = use_viewport_mouse();

    // nothing to follow until the mouse has moved at least once
    let visibility = move || {
        if matches!(source_type.get(), UseMouseSourceType::Mouse) {
            "opacity-100"
        } else {
            "opacity-0"
        }
    };

    let ring_style = move || {
        format!(
            "transform: translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%); border-color: {}",
            x.get(),
            y.get(),
            theme.get().current().accent
        )
    };
    let dot_style = move || {
        format!(
            "transform: translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%); background-color: {}",
            x.get(),
            y.get(),
            theme.get().current().accent
        )
    };

    view! {
        <div
            class=move || {
                format!(
                    "pointer-events-none fixed top-0 left-0 z-[100] hidden md:block w-8 h-8 rounded-full border-2 transition-[transform,opacity,border-color] duration-150 ease-out {}",
                    visibility(),
                )
            }
            style=ring_style
            aria-hidden="true"
        ></div>
        <div
            class=move || {
                format!(
                    "pointer-events-none fixed top-0 left-0 z-[100] hidden md:block w-1.5 h-1.5 rounded-full {}",
                    visibility(),
                )
            }
            style=dot_style
            aria-hidden="true"
        ></div>
    }
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let theme = use_active_theme();
    let (progress, set_progress) = signal(0.0_f64);

    let sync = move || set_progress.set(scroll_metrics().progress());
    let _ = use_event_listener(use_window(), scroll, move |_| sync());
    // a page restored mid-scroll fires no scroll event until the user moves
    Effect::new(move |_| sync());

    view! {
        <div
            class=move || {
                format!(
                    "fixed top-0 left-0 h-1 z-[60] bg-gradient-to-r {} transition-[width] duration-100",
                    theme.get().current().gradient,
                )
            }
            style=move || format!("width: {:.2}%", progress.get() * 100.0)
            role="progressbar"
            aria-label="Page scroll progress"
        ></div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::prelude::*;

    #[test]
    fn test_overlays_render_hidden() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <ScrollProgress />
                <CustomCursor />
            }
            .to_html()
        });
        assert!(html.contains("width: 0.00%"));
        assert!(html.contains("opacity-0"));
    }
}
