use std::{
    cell::Cell,
    thread,
    time::{Duration, Instant},
};

/// Source of "now" for timers, measured from the clock's own epoch.
pub trait Clock {
    fn now(&self) -> Duration;

    /// Block (or, for virtual time, jump) until `deadline` has been reached.
    fn wait_until(&self, deadline: Duration);
}

/// Wall clock backed by `Instant`; the epoch is the moment it was created.
#[derive(Debug)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn wait_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

/// Virtual clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Duration) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move to `target`. Earlier targets are ignored; time never runs backwards.
    pub fn advance_to(&self, target: Duration) {
        if target > self.now.get() {
            self.now.set(target);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn wait_until(&self, deadline: Duration) {
        self.advance_to(deadline);
    }
}
