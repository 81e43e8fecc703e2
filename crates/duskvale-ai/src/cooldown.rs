//! Countdown timers for cooldowns and action durations.

use duskvale_core::constants::TIMER_EPSILON;

/// A countdown that is "ready" once it reaches zero.
///
/// `remaining` never goes negative; anything within [`TIMER_EPSILON`] of zero
/// snaps to zero so f32 accumulation does not add a stray tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CooldownTimer {
    remaining: f32,
}

impl CooldownTimer {
    pub fn new(remaining: f32) -> Self {
        let mut timer = Self::default();
        timer.start(remaining);
        timer
    }

    pub fn start(&mut self, duration: f32) {
        self.remaining = if duration > TIMER_EPSILON { duration } else { 0.0 };
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining <= 0.0 {
            return;
        }
        self.remaining -= dt.max(0.0);
        if self.remaining <= TIMER_EPSILON {
            self.remaining = 0.0;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Multiply the remaining time.
    pub fn scale(&mut self, factor: f32) {
        self.remaining = (self.remaining * factor.max(0.0)).max(0.0);
    }
}

/// A fixed set of named timers, all advanced together once per tick.
#[derive(Debug, Clone)]
pub struct CooldownSet<K> {
    timers: Vec<(K, CooldownTimer)>,
}

impl<K: Copy + PartialEq> CooldownSet<K> {
    pub fn new(keys: &[K]) -> Self {
        Self {
            timers: keys.iter().map(|&k| (k, CooldownTimer::default())).collect(),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        for (_, timer) in &mut self.timers {
            timer.tick(dt);
        }
    }

    /// Start `key`, adding it if it is not yet tracked.
    pub fn start(&mut self, key: K, duration: f32) {
        match self.timers.iter_mut().find(|(k, _)| *k == key) {
            Some((_, timer)) => timer.start(duration),
            None => self.timers.push((key, CooldownTimer::new(duration))),
        }
    }

    /// Untracked keys count as ready.
    pub fn is_ready(&self, key: K) -> bool {
        self.get(key).map_or(true, CooldownTimer::is_ready)
    }

    pub fn remaining(&self, key: K) -> f32 {
        self.get(key).map_or(0.0, CooldownTimer::remaining)
    }

    pub fn get(&self, key: K) -> Option<&CooldownTimer> {
        self.timers.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut CooldownTimer> {
        self.timers
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, t)| t)
    }
}
