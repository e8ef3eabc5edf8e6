//! Cooldown timers
//!
//! A cooldown tracks a minimum interval since its last reset. Screens never read a
//! clock directly; they ask a [`TimerFactory`] for cooldowns so the clock source can be
//! swapped (wall clock in the game, [`ManualClock`] in tests).

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Rate limiter primitive
pub trait Cooldown {
    /// Restart the interval from now
    fn reset(&mut self);

    /// True once the interval has passed since the last reset
    ///
    /// A cooldown that was never reset counts as elapsed.
    fn has_elapsed(&self) -> bool;
}

/// Creates cooldowns bound to a clock source
pub trait TimerFactory {
    fn cooldown(&self, duration: Duration) -> Box<dyn Cooldown>;
}

/// Wall-clock cooldown
#[derive(Debug, Clone)]
pub struct InstantCooldown {
    duration: Duration,
    started: Option<Instant>,
}

impl InstantCooldown {
    pub fn new(duration: Duration) -> Self {
        InstantCooldown {
            duration,
            started: None,
        }
    }
}

impl Cooldown for InstantCooldown {
    fn reset(&mut self) {
        self.started = Some(Instant::now());
    }

    fn has_elapsed(&self) -> bool {
        match self.started {
            Some(started) => started.elapsed() >= self.duration,
            None => true,
        }
    }
}

/// Factory for [`InstantCooldown`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimers;

impl TimerFactory for SystemTimers {
    fn cooldown(&self, duration: Duration) -> Box<dyn Cooldown> {
        Box::new(InstantCooldown::new(duration))
    }
}

/// Shared clock that only moves when told to
///
/// Clones share the same time, so a test can hold one handle and advance it while
/// cooldowns created from another handle observe the change.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }
}

impl TimerFactory for ManualClock {
    fn cooldown(&self, duration: Duration) -> Box<dyn Cooldown> {
        Box::new(ManualCooldown {
            clock: self.clone(),
            duration,
            started: None,
        })
    }
}

struct ManualCooldown {
    clock: ManualClock,
    duration: Duration,
    started: Option<Duration>,
}

impl Cooldown for ManualCooldown {
    fn reset(&mut self) {
        self.started = Some(self.clock.now());
    }

    fn has_elapsed(&self) -> bool {
        match self.started {
            Some(started) => self.clock.now() - started >= self.duration,
            None => true,
        }
    }
}
