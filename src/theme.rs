/// How long each palette stays on screen before the hero rotates to the next.
pub const THEME_INTERVAL_MS: u64 = 5000;
/// Granularity of the rotation clock driving [`ThemeCycle::tick`].
pub const THEME_TICK_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub label: &'static str,
    /// Gradient stops as utility classes, used with `bg-gradient-to-*`
    pub gradient: &'static str,
    pub glow: &'static str,
    pub accent: &'static str,
}

pub static THEMES: [Theme; 4] = [
    Theme {
        id: "cosmic",
        label: "Cosmic",
        gradient: "from-blue-400 via-purple-400 to-pink-400",
        glow: "bg-purple-500",
        accent: "#a78bfa",
    },
    Theme {
        id: "sunset",
        label: "Sunset",
        gradient: "from-orange-400 via-rose-400 to-amber-300",
        glow: "bg-rose-500",
        accent: "#fb7185",
    },
    Theme {
        id: "ocean",
        label: "Ocean",
        gradient: "from-cyan-400 via-sky-400 to-teal-300",
        glow: "bg-sky-500",
        accent: "#38bdf8",
    },
    Theme {
        id: "forest",
        label: "Forest",
        gradient: "from-emerald-400 via-lime-400 to-green-300",
        glow: "bg-emerald-500",
        accent: "#34d399",
    },
];

/// Round-robin pointer into [`THEMES`]. Picking a theme by hand restarts
/// the rotation clock so the choice stays up for a full interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeCycle {
    index: usize,
    elapsed: u64,
}

impl ThemeCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static Theme {
        &THEMES[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % THEMES.len();
        self.elapsed = 0;
    }

    /// Advances once `THEME_INTERVAL_MS` has built up since the last change.
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.elapsed = self.elapsed.saturating_add(elapsed_ms);
        if self.elapsed >= THEME_INTERVAL_MS {
            self.advance();
        }
    }

    pub fn select(&mut self, id: &str) -> bool {
        match THEMES.iter().position(|t| t.id == id) {
            Some(i) => {
                self.index = i;
                self.elapsed = 0;
                true
            }
            None => false,
        }
    }
}
