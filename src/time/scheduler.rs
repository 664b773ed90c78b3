use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
    time::Duration,
};

use super::Clock;
use crate::types::TimerId;

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct Queue {
    next_id: u64,
    // Keyed by (deadline, id) so equal deadlines keep scheduling order.
    tasks: BTreeMap<(Duration, TimerId), Task>,
    deadlines: HashMap<TimerId, Duration>,
}

/// Single-threaded timer queue. Tasks only run from [`Scheduler::run_due`].
pub struct Scheduler {
    clock: Rc<dyn Clock>,
    queue: RefCell<Queue>,
}

impl Scheduler {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            queue: RefCell::new(Queue::default()),
        }
    }

    pub fn clock(&self) -> &Rc<dyn Clock> {
        &self.clock
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Queue `task` to run once `delay` has elapsed.
    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> TimerId {
        let deadline = self.now() + delay;
        let mut queue = self.queue.borrow_mut();
        let id = TimerId(queue.next_id);
        queue.next_id += 1;
        queue.tasks.insert((deadline, id), Box::new(task));
        queue.deadlines.insert(id, deadline);
        log::trace!("scheduled {id} at {deadline:?}");
        id
    }

    /// Drop a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&self, id: TimerId) -> bool {
        let mut queue = self.queue.borrow_mut();
        match queue.deadlines.remove(&id) {
            Some(deadline) => {
                queue.tasks.remove(&(deadline, id));
                log::trace!("cancelled {id}");
                true
            }
            None => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .borrow()
            .tasks
            .keys()
            .next()
            .map(|(deadline, _)| *deadline)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Run every task whose deadline has passed and return how many ran.
    pub fn run_due(&self) -> usize {
        let mut fired = 0;
        while let Some((id, task)) = self.pop_due() {
            log::trace!("firing {id}");
            task();
            fired += 1;
        }
        fired
    }

    fn pop_due(&self) -> Option<(TimerId, Task)> {
        let now = self.now();
        let mut queue = self.queue.borrow_mut();
        let (&(deadline, id), _) = queue.tasks.first_key_value()?;
        if deadline > now {
            return None;
        }
        queue.deadlines.remove(&id);
        queue
            .tasks
            .remove(&(deadline, id))
            .map(|task| (id, task))
    }
}
