use leptos::{either::Either, prelude::*};

use crate::particles::{scatter, Particle, NAV_PARTICLES};
use crate::profile::{profile, SocialLink};

use super::browser::download_file;
use super::particle_field::ParticleField;

const PARTICLE_DRIFT_PX: f64 = 40.0;

/// Whether the small-viewport menu is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

fn download_resume() {
    let resume = &profile().resume;
    if let Err(e) = download_file(&resume.href, &resume.filename) {
        log::warn!("resume download failed: {e}");
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let profile = profile();
    let menu = RwSignal::new(MenuState::default());
    let (hovered, set_hovered) = signal(None::<String>);
    let (particles, set_particles) = signal(Vec::<Particle>::new());

    // browser only, so the server HTML and the first client render agree
    Effect::new(move |_| {
        set_particles.set(scatter(
            &mut rand::thread_rng(),
            NAV_PARTICLES,
            PARTICLE_DRIFT_PX,
        ));
    });

    let nav_links = profile
        .nav
        .iter()
        .map(|item| {
            let id = item.id.clone();
            let enter_id = item.id.clone();
            view! {
                <a
                    href=item.href()
                    class="relative text-gray-300 hover:text-white transition-all duration-200 hover:-translate-y-0.5"
                    on:mouseenter=move |_| set_hovered.set(Some(enter_id.clone()))
                    on:mouseleave=move |_| set_hovered.set(None)
                >
                    <Show when=move || hovered.get().as_deref() == Some(id.as_str())>
                        <span class="absolute -inset-2 bg-gradient-to-r from-purple-500/20 to-blue-500/20 rounded-lg animate-fade-in"></span>
                    </Show>
                    <span class="relative z-10">{item.label.clone()}</span>
                </a>
            }
        })
        .collect_view();

    let social_icons = profile
        .social
        .iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                <SocialIcon
                    link=link
                    class="relative p-2 rounded-full bg-gray-800/50 transition-all hover:scale-125 hover:rotate-6 active:scale-90 animate-fade-in"
                    delay={0.1 * i as f64}
                />
            }
        })
        .collect_view();

    view! {
        <ParticleField
            particles=particles
            dot_class=Signal::stored("bg-purple-500")
            class="fixed top-0 left-0 w-full h-20 -z-10"
        />
        <nav class="fixed top-4 left-1/2 -translate-x-1/2 w-[95%] max-w-6xl z-50 animate-slide-down">
            <div class="relative">
                <div class="absolute inset-0 bg-gradient-to-r from-purple-900/20 via-gray-900/30 to-blue-900/20 backdrop-blur-xl rounded-2xl border border-white/10 shadow-2xl animate-fade-in"></div>
                <div class="absolute inset-0 bg-gradient-to-r from-purple-500/10 via-transparent to-blue-500/10 rounded-2xl blur-xl"></div>

                <div class="relative px-6 py-4 flex items-center justify-between">
                    <Brand brand=profile.brand.clone() />

                    <div class="hidden lg:flex items-center space-x-8">
                        <div class="flex items-center space-x-8">{nav_links}</div>
                        <div class="flex items-center space-x-4">{social_icons}</div>
                        <button
                            class="group relative px-6 py-2 overflow-hidden rounded-full bg-gradient-to-r from-purple-600 to-blue-600 transition-transform hover:scale-105 active:scale-95 animate-fade-in"
                            style="animation-delay: 0.3s"
                            on:click=move |_| download_resume()
                        >
                            <span class="relative z-10 flex items-center space-x-2 text-white font-semibold">
                                <span aria-hidden="true">"⬇"</span>
                                <span>"Resume"</span>
                            </span>
                            <span class="absolute inset-0 bg-gradient-to-r from-blue-600 to-purple-600 translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
                        </button>
                    </div>

                    <button
                        class="lg:hidden relative p-2 rounded-lg bg-gray-800/50 transition-transform hover:scale-110 active:scale-90"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        {move || {
                            if menu.get().is_open() {
                                Either::Left(
                                    view! {
                                        <span class="block w-6 h-6 text-white text-center animate-spin-in">
                                            "✕"
                                        </span>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <span class="block w-6 h-6 text-white text-center animate-spin-in">
                                            "☰"
                                        </span>
                                    },
                                )
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.get().is_open()>
                <MobileMenu menu=menu />
            </Show>
        </nav>
    }
}

#[component]
fn Brand(brand: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 transition-transform hover:scale-105">
            <div class="relative">
                <div class="absolute -inset-1 bg-gradient-to-r from-purple-600 to-blue-600 rounded-full blur opacity-30 animate-pulse-ring"></div>
                <div class="relative w-10 h-10 bg-gradient-to-br from-purple-600 to-blue-600 rounded-full flex items-center justify-center text-white">
                    "👤"
                </div>
            </div>
            <div class="relative">
                <h1
                    class="text-2xl font-bold bg-gradient-to-r from-purple-400 via-white to-blue-400 bg-clip-text text-transparent animate-fade-in"
                    style="animation-delay: 0.2s"
                >
                    {brand}
                </h1>
                <div class="absolute -bottom-1 left-0 h-0.5 bg-gradient-to-r from-purple-500 to-blue-500 animate-underline"></div>
            </div>
            <span class="text-yellow-400 animate-spin-slow" aria-hidden="true">
                "✦"
            </span>
        </div>
    }
}

#[component]
fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let profile = profile();
    view! {
        <div class="lg:hidden absolute top-full left-0 right-0 mt-2 animate-fade-in">
            <div class="bg-gray-900/95 backdrop-blur-xl rounded-2xl border border-white/10 shadow-2xl overflow-hidden">
                <div class="p-4 space-y-2">
                    {profile
                        .nav
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! {
                                <a
                                    href=item.href()
                                    class="block p-3 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800/50 transition-all animate-fade-in"
                                    style=format!("animation-delay: {:.1}s", 0.1 * i as f64)
                                    on:click=move |_| menu.update(MenuState::close)
                                >
                                    {item.label.clone()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="p-4 border-t border-white/10">
                    <div class="flex justify-center space-x-6">
                        {profile
                            .social
                            .iter()
                            .enumerate()
                            .map(|(i, link)| {
                                view! {
                                    <SocialIcon
                                        link=link
                                        class="p-3 rounded-full bg-gray-800/50 hover:scale-125 transition-transform animate-fade-in"
                                        delay={0.5 + 0.1 * i as f64}
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="p-4 border-t border-white/10">
                    <button
                        class="w-full py-3 rounded-full bg-gradient-to-r from-purple-600 to-blue-600 text-white font-semibold transition-transform hover:scale-[1.02] active:scale-[0.98] animate-fade-in"
                        style="animation-delay: 0.8s"
                        on:click=move |_| {
                            download_resume();
                            menu.update(MenuState::close);
                        }
                    >
                        <span class="flex items-center justify-center space-x-2">
                            <span aria-hidden="true">"⬇"</span>
                            <span>"Download Resume"</span>
                        </span>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SocialIcon(link: &'static SocialLink, class: &'static str, delay: f64) -> impl IntoView {
    view! {
        <a
            href=link.url.clone()
            target="_blank"
            rel="noopener noreferrer"
            class=format!("{class} {}", link.hover)
            style=format!("animation-delay: {:.1}s", delay)
            aria-label=link.label.clone()
        >
            <i class=link.icon.clone()></i>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_flips_once_per_press() {
        let mut menu = MenuState::default();
        let mut states = vec![];
        for _ in 0..4 {
            menu.toggle();
            states.push(menu.is_open());
        }
        assert_eq!(states, vec![true, false, true, false]);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_navbar_renders() {
        use leptos::prelude::*;

        let owner = Owner::new();
        let html = owner.with(|| view! { <Navbar /> }.to_html());
        assert!(html.contains("ALEX"));
        assert!(html.contains("href=\"#projects\""));
        assert!(html.contains("Resume"));
        // the mobile menu is closed on first render
        assert!(!html.contains("Download Resume"));
    }
}
