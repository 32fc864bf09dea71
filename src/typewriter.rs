pub const TICK_MS: u32 = 40;
pub const TYPE_MS: u32 = 80;
pub const DELETE_MS: u32 = 40;
pub const HOLD_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types a phrase out, holds it, deletes it, then moves on to the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    wait: u32,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            wait: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        let phrase = match self.phrases.get(self.index) {
            Some(p) => p,
            None => return "",
        };
        match phrase.char_indices().nth(self.shown) {
            Some((i, _)) => &phrase[..i],
            None => phrase,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.phrases.is_empty() {
            return;
        }
        self.wait = self.wait.saturating_sub(elapsed_ms);
        if self.wait > 0 {
            return;
        }
        let len = self.phrases[self.index].chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    self.wait = HOLD_MS;
                } else {
                    self.wait = TYPE_MS;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.wait = DELETE_MS;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.wait = 0;
                } else {
                    self.wait = DELETE_MS;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tw(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    // Ticks until the phase changes, bounded so a stuck machine fails the test.
    fn run_until(t: &mut Typewriter, phase: Phase) {
        for _ in 0..10_000 {
            if t.phase() == phase {
                return;
            }
            t.tick(TICK_MS);
        }
        panic!("never reached {:?}", phase);
    }

    #[test]
    fn test_types_one_char_per_step() {
        let mut t = tw(&["abc"]);
        assert_eq!(t.text(), "");
        t.tick(TICK_MS);
        assert_eq!(t.text(), "a");
        // not enough time has passed for the next char
        t.tick(TICK_MS);
        assert_eq!(t.text(), "a");
        t.tick(TICK_MS);
        assert_eq!(t.text(), "ab");
    }

    #[test]
    fn test_holds_then_deletes_then_advances() {
        let mut t = tw(&["hi", "yo"]);
        run_until(&mut t, Phase::Holding);
        assert_eq!(t.text(), "hi");
        t.tick(HOLD_MS - TICK_MS);
        assert_eq!(t.phase(), Phase::Holding);
        run_until(&mut t, Phase::Deleting);
        assert_eq!(t.text(), "hi");
        run_until(&mut t, Phase::Typing);
        assert_eq!(t.phrase_index(), 1);
        assert_eq!(t.text(), "");
        run_until(&mut t, Phase::Holding);
        assert_eq!(t.text(), "yo");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut t = tw(&["a", "b"]);
        for expected in [0, 1, 0] {
            run_until(&mut t, Phase::Holding);
            assert_eq!(t.phrase_index(), expected);
            run_until(&mut t, Phase::Typing);
        }
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut t = tw(&["héllo"]);
        t.tick(TICK_MS);
        t.tick(TYPE_MS);
        assert_eq!(t.text(), "hé");
    }

    #[test]
    fn test_no_phrases() {
        let mut t = tw(&[]);
        t.tick(TICK_MS);
        assert_eq!(t.text(), "");
        assert_eq!(t.phase(), Phase::Typing);
    }
}
