use std::{
    cell::{Cell, RefCell},
    marker::PhantomData,
    rc::Rc,
    time::Duration,
};

use crate::{time::Clock, types::DEFAULT_WAIT};

/// Wrapper that runs the first call right away and drops the rest until `wait` has passed.
///
/// Dropped calls are lost, never queued.
pub struct Throttled<A, F> {
    clock: Rc<dyn Clock>,
    wait: Duration,
    last: Cell<Option<Duration>>,
    func: RefCell<F>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so that it runs at most once per `wait`.
pub fn throttle<A, F>(clock: Rc<dyn Clock>, wait: Duration, func: F) -> Throttled<A, F>
where
    F: FnMut(A),
{
    Throttled {
        clock,
        wait,
        last: Cell::new(None),
        func: RefCell::new(func),
        _args: PhantomData,
    }
}

/// [`throttle`] with the 300 ms [`DEFAULT_WAIT`].
pub fn throttle_default<A, F>(clock: Rc<dyn Clock>, func: F) -> Throttled<A, F>
where
    F: FnMut(A),
{
    throttle(clock, DEFAULT_WAIT, func)
}

impl<A, F: FnMut(A)> Throttled<A, F> {
    /// Returns `true` if the call went through.
    pub fn call(&self, args: A) -> bool {
        let now = self.clock.now();
        let ready = match self.last.get() {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.wait,
        };
        if !ready {
            log::trace!("throttle: dropped call at {now:?}");
            return false;
        }
        // A reentrant call from inside `func` counts as too early.
        let Ok(mut func) = self.func.try_borrow_mut() else {
            log::debug!("throttle: dropped reentrant call at {now:?}");
            return false;
        };
        self.last.set(Some(now));
        log::debug!("throttle: invoking at {now:?}");
        (&mut *func)(args);
        true
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}
