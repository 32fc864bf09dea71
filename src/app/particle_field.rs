use leptos::prelude::*;

use crate::particles::Particle;

#[component]
pub fn ParticleField(
    #[prop(into)] particles: Signal<Vec<Particle>>,
    dot_class: Signal<&'static str>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("overflow-hidden pointer-events-none {class}")
            aria-hidden="true"
        >
            {move || {
                let dot = dot_class.get();
                particles
                    .get()
                    .into_iter()
                    .map(|p| {
                        view! {
                            <span
                                class=format!(
                                    "absolute rounded-full opacity-30 animate-drift transition-colors duration-1000 {dot}",
                                )
                                style=p.style()
                            ></span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
