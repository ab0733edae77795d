//! Decorative animations: the hero typewriter and one-shot section reveals.
//!
//! Both are driven from outside: the typewriter by the `Typewriter` timer,
//! the reveals by the same layout pass that feeds the scroll spy.

use tracing::debug;

use crate::config::TypewriterConfig;
use crate::context::Ctx;
use crate::effects::Effect;
use crate::navigation::SectionRect;
use crate::timers::TimerKey;

// ── Typewriter ─────────────────────────────────────────────────────────────

/// Types each phrase, pauses, deletes it and moves on to the next, forever.
#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    running: bool,
    config: TypewriterConfig,
}

impl Typewriter {
    pub fn new<S: AsRef<str>>(phrases: &[S], config: &TypewriterConfig) -> Self {
        Self {
            phrases: phrases
                .iter()
                .map(|p| p.as_ref().chars().collect::<Vec<_>>())
                .filter(|p| !p.is_empty())
                .collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            running: false,
            config: config.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p[..self.char_index].iter().collect())
            .unwrap_or_default()
    }

    pub fn start(&mut self, ctx: &mut Ctx) {
        if self.phrases.is_empty() || self.running {
            return;
        }
        self.running = true;
        ctx.set_timeout(TimerKey::Typewriter, self.config.start_delay_ms);
    }

    /// Cancel the next keystroke and rewind to the start of the first phrase.
    pub fn stop(&mut self, ctx: &mut Ctx) {
        self.running = false;
        self.phrase_index = 0;
        self.char_index = 0;
        self.deleting = false;
        ctx.clear_timer(TimerKey::Typewriter);
    }

    /// One keystroke; arms the next one.
    pub fn on_timer(&mut self, ctx: &mut Ctx) {
        if !self.running {
            return;
        }
        let len = self.phrases[self.phrase_index].len();
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        ctx.emit(Effect::SetTypewriterText { text: self.text() });

        let delay = if !self.deleting && self.char_index == len {
            self.deleting = true;
            self.config.pause_ms
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.config.initial_delay_ms
        } else if self.deleting {
            self.config.delete_speed_ms
        } else {
            self.config.speed_ms
        };
        ctx.set_timeout(TimerKey::Typewriter, delay);
    }
}

// ── Scroll reveal ──────────────────────────────────────────────────────────

/// Fraction of a section that must be inside the reveal band.
const REVEAL_THRESHOLD: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
struct RevealTarget {
    id: String,
    /// Bottom inset of the reveal band, as a percentage of the viewport.
    bottom_margin_percent: f64,
    revealed: bool,
}

#[derive(Debug)]
pub struct ScrollReveal {
    targets: Vec<RevealTarget>,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new(&[("about", 15.0), ("skills", 10.0), ("projects", 10.0), ("contact", 15.0)])
    }
}

impl ScrollReveal {
    pub fn new(targets: &[(&str, f64)]) -> Self {
        Self {
            targets: targets
                .iter()
                .map(|(id, margin)| RevealTarget {
                    id: id.to_string(),
                    bottom_margin_percent: *margin,
                    revealed: false,
                })
                .collect(),
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.targets.iter().any(|t| t.id == id && t.revealed)
    }

    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| !t.revealed).count()
    }

    /// Reveal every pending section that entered its band. Revealed sections
    /// are never reported again.
    pub fn update(&mut self, rects: &[SectionRect], viewport_height: f64, ctx: &mut Ctx) {
        for target in self.targets.iter_mut().filter(|t| !t.revealed) {
            let Some(rect) = rects.iter().find(|r| r.id == target.id) else {
                continue;
            };
            let band_bottom = viewport_height * (1.0 - target.bottom_margin_percent / 100.0);
            let height = rect.bottom - rect.top;
            let inside = rect.bottom.min(band_bottom) - rect.top.max(0.0);
            if height > 0.0 && inside > 0.0 && inside / height >= REVEAL_THRESHOLD {
                target.revealed = true;
                debug!(id = %target.id, "section revealed");
                ctx.emit(Effect::RevealSection {
                    id: target.id.clone(),
                });
            }
        }
    }

    /// Reveal everything at once (fallback mode shows static content).
    pub fn reveal_all(&mut self, ctx: &mut Ctx) {
        for target in self.targets.iter_mut().filter(|t| !t.revealed) {
            target.revealed = true;
            ctx.emit(Effect::RevealSection {
                id: target.id.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectQueue;
    use crate::timers::TimerRegistry;

    fn texts(fx: &EffectQueue) -> Vec<String> {
        fx.iter()
            .filter_map(|e| match e {
                Effect::SetTypewriterText { text } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_typewriter_cycle() {
        let mut timers = TimerRegistry::new();
        let mut fx = EffectQueue::new();
        let mut tw = Typewriter::new(&["ab", "c"], &TypewriterConfig::default());

        let mut ctx = Ctx::new(0.0, &mut timers, &mut fx);
        tw.start(&mut ctx);
        assert_eq!(ctx.timers.deadline(TimerKey::Typewriter), Some(1000.0));

        let mut now = 0.0;
        for _ in 0..7 {
            now = timers.deadline(TimerKey::Typewriter).unwrap();
            timers.pop_due(now);
            let mut ctx = Ctx::new(now, &mut timers, &mut fx);
            tw.on_timer(&mut ctx);
        }
        assert_eq!(texts(&fx), ["a", "ab", "a", "", "c", "", "a"]);
        // start, type, pause, delete, next phrase, pause, next phrase
        assert_eq!(now, 1000.0 + 100.0 + 1500.0 + 50.0 + 300.0 + 1500.0 + 300.0);
    }

    #[test]
    fn test_typewriter_stop() {
        let mut timers = TimerRegistry::new();
        let mut fx = EffectQueue::new();
        let mut ctx = Ctx::new(0.0, &mut timers, &mut fx);
        let mut tw = Typewriter::new(&["hello"], &TypewriterConfig::default());
        tw.start(&mut ctx);
        ctx.now_ms = 1000.0;
        tw.on_timer(&mut ctx);
        assert_eq!(tw.text(), "h");
        tw.stop(&mut ctx);
        assert!(!tw.is_running());
        assert_eq!(tw.text(), "");
        assert!(timers.is_empty());
    }

    #[test]
    fn test_typewriter_without_phrases_never_starts() {
        let mut timers = TimerRegistry::new();
        let mut fx = EffectQueue::new();
        let mut ctx = Ctx::new(0.0, &mut timers, &mut fx);
        let mut tw = Typewriter::new::<&str>(&[], &TypewriterConfig::default());
        tw.start(&mut ctx);
        assert!(!tw.is_running());
        assert!(timers.is_empty());
    }

    #[test]
    fn test_reveal_once() {
        let mut timers = TimerRegistry::new();
        let mut fx = EffectQueue::new();
        let mut reveal = ScrollReveal::default();
        let below = SectionRect {
            id: "about".into(),
            top: 900.0,
            bottom: 1800.0,
        };
        let mut ctx = Ctx::new(0.0, &mut timers, &mut fx);
        // Top of the section sits inside the 15% bottom inset.
        reveal.update(&[below], 1000.0, &mut ctx);
        assert!(!reveal.is_revealed("about"));

        let entered = SectionRect {
            id: "about".into(),
            top: 500.0,
            bottom: 1400.0,
        };
        reveal.update(&[entered.clone()], 1000.0, &mut ctx);
        reveal.update(&[entered], 1000.0, &mut ctx);
        assert!(reveal.is_revealed("about"));
        assert_eq!(reveal.pending(), 3);
        let count = fx
            .iter()
            .filter(|e| matches!(e, Effect::RevealSection { .. }))
            .count();
        assert_eq!(count, 1);
    }
}
