use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
    time::Duration,
};

use crate::{
    time::Scheduler,
    types::{DEFAULT_WAIT, TimerId},
};

struct Shared<A> {
    pending: Cell<Option<TimerId>>,
    func: RefCell<Box<dyn FnMut(A)>>,
}

/// Wrapper that only lets the last call of a burst through, `wait` after that call.
///
/// Created with [`debounce`]. Each call cancels the invocation queued by the previous one.
/// Dropping the wrapper cancels whatever is still pending.
pub struct Debounced<A> {
    scheduler: Rc<Scheduler>,
    wait: Duration,
    shared: Rc<Shared<A>>,
}

/// Wrap `func` so that it runs once calls have stopped for `wait`.
pub fn debounce<A, F>(scheduler: &Rc<Scheduler>, wait: Duration, func: F) -> Debounced<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounced {
        scheduler: Rc::clone(scheduler),
        wait,
        shared: Rc::new(Shared {
            pending: Cell::new(None),
            func: RefCell::new(Box::new(func)),
        }),
    }
}

/// [`debounce`] with the 300 ms [`DEFAULT_WAIT`].
pub fn debounce_default<A, F>(scheduler: &Rc<Scheduler>, func: F) -> Debounced<A>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    debounce(scheduler, DEFAULT_WAIT, func)
}

impl<A: 'static> Debounced<A> {
    pub fn call(&self, args: A) {
        if let Some(previous) = self.shared.pending.take() {
            self.scheduler.cancel(previous);
            log::debug!("debounce: superseded {previous}");
        }
        let shared: Weak<Shared<A>> = Rc::downgrade(&self.shared);
        let id = self.scheduler.schedule(self.wait, move || {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            shared.pending.set(None);
            log::debug!("debounce: quiet period over, invoking");
            let mut func = shared.func.borrow_mut();
            (&mut **func)(args);
        });
        self.shared.pending.set(Some(id));
    }

    pub fn is_pending(&self) -> bool {
        self.shared.pending.get().is_some()
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Drop for Debounced<A> {
    fn drop(&mut self) {
        if let Some(id) = self.shared.pending.take() {
            self.scheduler.cancel(id);
        }
    }
}
