use rand::Rng;

pub const NAV_PARTICLES: usize = 20;

const MIN_HERO_PARTICLES: usize = 12;
const MAX_HERO_PARTICLES: usize = 60;
const PX_PER_PARTICLE: f64 = 24.0;

/// A decorative dot. `x`/`y` are percentages of the containing box so the
/// same list renders at any size; `dx`/`dy` is the drift in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub dx: f64,
    pub dy: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; --dx: {:.1}px; --dy: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.x, self.y, self.size, self.size, self.dx, self.dy, self.duration, self.delay
        )
    }
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize, spread: f64) -> Vec<Particle> {
    let spread = if spread.is_finite() { spread.abs() } else { 0.0 };
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..4.0),
            dx: rng.gen_range(-spread..=spread),
            dy: rng.gen_range(-spread..=spread),
            duration: rng.gen_range(2.0..5.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

pub fn hero_particle_count(viewport_width: f64) -> usize {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return MIN_HERO_PARTICLES;
    }
    ((viewport_width / PX_PER_PARTICLE) as usize).clamp(MIN_HERO_PARTICLES, MAX_HERO_PARTICLES)
}
