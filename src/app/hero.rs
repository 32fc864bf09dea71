use leptos::{ev::scroll, prelude::*};
use chrono::{NaiveDate, Utc};
use leptos_use::{
    use_event_listener, use_interval_fn, use_window, use_window_size, UseMouseReturn,
    UseWindowSizeReturn,
};

use crate::anchor::{CONTACT_SECTION, PROJECTS_SECTION};
use crate::motion::{pointer_parallax, scroll_parallax};
use crate::particles::{hero_particle_count, scatter, Particle};
use crate::profile::profile;
use crate::theme::{THEMES, THEME_TICK_MS};
use crate::typewriter::{Typewriter, TICK_MS};

use super::browser::{scroll_metrics, smooth_scroll_to};
use super::particle_field::ParticleField;
use super::{use_active_theme, use_viewport_mouse};

const CARD_TILT_DEG: f64 = 12.0;
const PARTICLE_DRIFT_PX: f64 = 30.0;
// the scroll hint is fully faded after this many pixels
const SCROLL_HINT_FADE_PX: f64 = 300.0;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = profile();
    let theme = use_active_theme();
    let typewriter = RwSignal::new(Typewriter::new(profile.roles.clone()));
    let (is_visible, set_is_visible) = signal(false);
    let (particles, set_particles) = signal(Vec::<Particle>::new());
    let (scroll_y, set_scroll_y) = signal(0.0_f64);
    let (interactions, set_interactions) = signal(0_u32);
    // unknown on the server, so the experience stat only appears after mount
    let (today, set_today) = signal(None::<NaiveDate>);

    let UseWindowSizeReturn { width, height, .. } = use_window_size();
    let UseMouseReturn { x, y, .. } = use_viewport_mouse();

    use_interval_fn(
        move || theme.update(|c| c.tick(THEME_TICK_MS)),
        THEME_TICK_MS,
    );
    use_interval_fn(
        move || typewriter.update(|t| t.tick(TICK_MS)),
        TICK_MS as u64,
    );

    let sync_scroll = move || set_scroll_y.set(scroll_metrics().scroll_y);
    let _ = use_event_listener(use_window(), scroll, move |_| sync_scroll());

    Effect::new(move |_| {
        sync_scroll();
        set_today.set(Some(Utc::now().date_naive()));
        set_is_visible.set(true);
    });

    Effect::new(move |_| {
        height.track();
        let count = hero_particle_count(width.get());
        set_particles.set(scatter(&mut rand::thread_rng(), count, PARTICLE_DRIFT_PX));
    });

    let count_interaction = move || set_interactions.update(|n| *n += 1);

    let reveal = move |extra: &'static str| {
        move || {
            let state = if is_visible.get() {
                "translate-y-0 opacity-100"
            } else {
                "translate-y-10 opacity-0"
            };
            format!("transition-all duration-1000 transform {extra} {state}")
        }
    };

    let card_tilt = move || {
        // neutral until mounted so the server HTML matches the first client render
        if !is_visible.get() {
            return "transform: perspective(1000px) rotateX(0deg) rotateY(0deg)".to_string();
        }
        let (dx, dy) = pointer_parallax(x.get(), y.get(), width.get(), height.get(), CARD_TILT_DEG);
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            -dy, dx
        )
    };

    let blob_shift = move |rate: f64| {
        move || {
            format!(
                "transform: translateY({:.1}px)",
                scroll_parallax(scroll_y.get(), rate)
            )
        }
    };

    let scroll_hint_opacity = move || {
        let faded = scroll_parallax(scroll_y.get(), 1.0 / SCROLL_HINT_FADE_PX).min(1.0);
        format!("opacity: {:.2}", 1.0 - faded)
    };

    let gradient_text = move || {
        format!(
            "bg-gradient-to-r {} bg-clip-text text-transparent transition-all duration-1000",
            theme.get().current().gradient
        )
    };

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-gray-900 via-black to-gray-900 pt-16">
            <div class="absolute inset-0 overflow-hidden">
                <div
                    class="absolute -top-40 -right-40 w-80 h-80 bg-blue-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob"
                    style=blob_shift(0.3)
                ></div>
                <div
                    class="absolute -bottom-40 -left-40 w-80 h-80 bg-purple-500 rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob animation-delay-2000"
                    style=blob_shift(0.15)
                ></div>
                <div
                    class=move || {
                        format!(
                            "absolute top-1/2 left-1/2 w-80 h-80 {} rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob animation-delay-4000 transition-colors duration-1000",
                            theme.get().current().glow,
                        )
                    }
                    style=blob_shift(0.45)
                ></div>
                <div class="absolute inset-0 opacity-5 bg-grid"></div>
                <ParticleField
                    particles=particles
                    dot_class=Signal::derive(move || theme.get().current().glow)
                    class="absolute inset-0"
                />
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=reveal("space-y-8")>
                        <div class="inline-flex items-center gap-2 px-4 py-2 bg-gradient-to-r from-blue-500/10 to-purple-500/10 border border-blue-500/30 rounded-full">
                            <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                            <span class=move || format!("text-sm font-medium {}", gradient_text())>
                                {profile.badge.clone()}
                            </span>
                            <Show when=move || { interactions.get() > 0 }>
                                <span
                                    class="ml-1 text-xs text-gray-500"
                                    title="Interactions this visit"
                                >
                                    {move || format!("✦ {}", interactions.get())}
                                </span>
                            </Show>
                        </div>

                        <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-tight">
                            <span class="block">{profile.greeting.clone()}</span>
                            <span class=gradient_text>{profile.name.clone()}</span>
                        </h1>

                        <div class="h-20 sm:h-24">
                            <div class="text-2xl sm:text-3xl md:text-4xl font-bold text-gray-300">
                                {move || typewriter.with(|t| t.text().to_string())}
                                <span class="inline-block w-[3px] h-[1em] ml-1 align-middle bg-gray-300 animate-blink"></span>
                            </div>
                        </div>

                        <p class="text-lg text-gray-400 max-w-2xl leading-relaxed">
                            {profile.bio.clone()}
                        </p>

                        <div class="flex flex-wrap gap-4 pt-4">
                            <button
                                class="group relative px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 rounded-full font-semibold text-lg overflow-hidden transition-all duration-300 hover:shadow-2xl hover:shadow-blue-500/30"
                                on:click=move |_| {
                                    count_interaction();
                                    smooth_scroll_to(CONTACT_SECTION);
                                }
                            >
                                <span class="relative z-10 flex items-center gap-2">
                                    "Get In Touch"
                                    <span class="group-hover:translate-x-1 transition-transform">
                                        "→"
                                    </span>
                                </span>
                                <div class="absolute inset-0 bg-gradient-to-r from-purple-600 to-pink-600 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                            </button>

                            <button
                                class="group px-8 py-4 border-2 border-gray-700 rounded-full font-semibold text-lg hover:border-blue-500 transition-all duration-300 hover:bg-blue-500/10"
                                on:click=move |_| {
                                    count_interaction();
                                    smooth_scroll_to(PROJECTS_SECTION);
                                }
                            >
                                <span class="flex items-center gap-2">
                                    <span class="group-hover:animate-bounce">"⬇"</span>
                                    "View Projects"
                                </span>
                            </button>
                        </div>

                        <div class="pt-8">
                            <p class="text-gray-500 mb-4">"Connect with me"</p>
                            <div class="flex gap-4">
                                {profile
                                    .social
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.url.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class=format!(
                                                    "p-3 bg-gray-800/50 backdrop-blur-sm rounded-xl border border-gray-700 hover:border-blue-500 transition-all duration-300 {} hover:scale-110",
                                                    link.hover,
                                                )
                                                aria-label=link.label.clone()
                                                on:click=move |_| count_interaction()
                                            >
                                                <i class=format!("text-xl {}", link.icon)></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=reveal("relative delay-300")>
                        <div class="relative mx-auto lg:mx-0 max-w-lg">
                            <div
                                class="relative bg-gradient-to-br from-blue-500/20 to-purple-500/20 rounded-3xl p-8 backdrop-blur-sm border border-gray-700/50 transition-transform duration-200 ease-out"
                                style=card_tilt
                            >
                                <div class="relative">
                                    <div class=move || {
                                        format!(
                                            "w-64 h-64 mx-auto rounded-full bg-gradient-to-br {} p-1 animate-gradient-xy",
                                            theme.get().current().gradient,
                                        )
                                    }>
                                        <div class="w-full h-full rounded-full bg-gray-900 flex items-center justify-center overflow-hidden">
                                            <div class="text-7xl">"👨‍💻"</div>
                                        </div>
                                    </div>

                                    {move || {
                                        profile
                                            .stats_as_of(today.get())
                                            .into_iter()
                                            .enumerate()
                                            .map(|(i, stat)| {
                                                let corner = if i % 2 == 0 {
                                                    "-top-4 -right-4"
                                                } else {
                                                    "-bottom-4 -left-4"
                                                };
                                                view! {
                                                    <div class=format!(
                                                        "absolute {corner} bg-gray-900/80 backdrop-blur-sm p-4 rounded-2xl border border-gray-700 shadow-2xl animate-float",
                                                    )>
                                                        <div class="text-center">
                                                            <div class="text-2xl font-bold text-white">
                                                                {stat.value}
                                                            </div>
                                                            <div class="text-sm text-gray-400">{stat.label}</div>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>

                                <div class="mt-12">
                                    <h3 class="text-lg font-semibold text-center mb-4 text-gray-300">
                                        "Tech Stack"
                                    </h3>
                                    <div class="flex justify-center flex-wrap gap-3">
                                        {profile
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class=format!(
                                                        "px-4 py-2 bg-gray-800/50 border border-gray-700 rounded-full text-sm transition-colors duration-300 {}",
                                                        tech.hint,
                                                    )>{tech.label.clone()}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </div>

                            <div class="absolute -z-10 top-10 -left-10 w-32 h-32 bg-blue-500/10 rounded-full animate-float"></div>
                            <div class="absolute -z-10 bottom-10 -right-10 w-40 h-40 bg-purple-500/10 rounded-full animate-float animation-delay-2000"></div>
                        </div>
                    </div>
                </div>

                <div class="mt-12 flex justify-center gap-2" role="group" aria-label="Color theme">
                    {THEMES
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <button
                                    title=t.label
                                    aria-label=format!("{} theme", t.label)
                                    class=move || {
                                        if theme.get().index() == i {
                                            "w-6 h-2 rounded-full bg-white/80 transition-all"
                                        } else {
                                            "w-2 h-2 rounded-full bg-white/30 hover:bg-white/60 transition-all"
                                        }
                                    }
                                    on:click=move |_| {
                                        theme
                                            .update(|c| {
                                                c.select(t.id);
                                            })
                                    }
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>

                <div
                    class="absolute bottom-8 left-1/2 -translate-x-1/2"
                    style=scroll_hint_opacity
                >
                    <div class="flex flex-col items-center gap-2 animate-bounce">
                        <span class="text-sm text-gray-500">"Scroll down"</span>
                        <div class="w-6 h-10 border-2 border-gray-600 rounded-full flex justify-center">
                            <div class="w-1 h-3 bg-gradient-to-b from-blue-400 to-purple-400 rounded-full mt-2 animate-scroll"></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::prelude::*;

    #[test]
    fn test_hero_renders_profile() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Hero /> }.to_html());
        assert!(html.contains("Alex Johnson"));
        assert!(html.contains("Get In Touch"));
        assert!(html.contains("View Projects"));
        assert!(html.contains("TypeScript"));
        assert!(html.contains("50+"));
    }

    #[test]
    fn test_experience_stat_waits_for_client_clock() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Hero /> }.to_html());
        assert!(!html.contains("Years Exp"));
    }

    #[test]
    fn test_hero_starts_hidden_on_first_render() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Hero /> }.to_html());
        assert!(html.contains("translate-y-10 opacity-0"));
    }
}
