//! Per-call application context.
//!
//! Controllers don't hold the clock, the timer registry or the effect queue.
//! The engine lends them a `Ctx` for the duration of one operation, so every
//! mutation reads the latest shared state and tests can build a context from
//! plain locals.

use crate::effects::{Effect, EffectQueue};
use crate::timers::{TimerKey, TimerRegistry};

pub struct Ctx<'a> {
    pub now_ms: f64,
    pub timers: &'a mut TimerRegistry,
    pub fx: &'a mut EffectQueue,
}

impl<'a> Ctx<'a> {
    pub fn new(now_ms: f64, timers: &'a mut TimerRegistry, fx: &'a mut EffectQueue) -> Self {
        Self { now_ms, timers, fx }
    }

    pub fn emit(&mut self, effect: Effect) {
        self.fx.push(effect);
    }

    pub fn set_timeout(&mut self, key: TimerKey, delay_ms: f64) {
        self.timers.set_timeout(key, self.now_ms, delay_ms);
    }

    pub fn set_interval(&mut self, key: TimerKey, period_ms: f64) {
        self.timers.set_interval(key, self.now_ms, period_ms);
    }

    pub fn clear_timer(&mut self, key: TimerKey) -> bool {
        self.timers.clear(key)
    }
}
