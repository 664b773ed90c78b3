use crate::time::Scheduler;

/// Runs the timer loop until no tasks are left.
///
/// Waits on the scheduler's clock for the next deadline, then fires everything due.
/// Returns the number of tasks that ran.
pub fn run(scheduler: &Scheduler) -> usize {
    let mut fired = 0;

    while let Some(deadline) = scheduler.next_deadline() {
        scheduler.clock().wait_until(deadline);
        fired += scheduler.run_due();
    }
    log::debug!("event loop idle after {fired} tasks");
    fired
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;
    use crate::time::{Clock, ManualClock, SystemClock};

    #[test]
    fn drains_queue_in_virtual_time() {
        let clock = Rc::new(ManualClock::new());
        let scheduler = Rc::new(Scheduler::new(clock.clone()));
        let seen = Rc::new(RefCell::new(Vec::new()));

        for delay in [300u64, 100, 200] {
            let seen = seen.clone();
            let inner_clock = clock.clone();
            scheduler.schedule(Duration::from_millis(delay), move || {
                seen.borrow_mut().push(inner_clock.now().as_millis())
            });
        }

        assert_eq!(run(&scheduler), 3);
        assert_eq!(*seen.borrow(), vec![100, 200, 300]);
        assert_eq!(clock.now(), Duration::from_millis(300));
    }

    #[test]
    fn empty_queue_returns_immediately() {
        let scheduler = Scheduler::new(Rc::new(ManualClock::new()));
        assert_eq!(run(&scheduler), 0);
    }

    #[test]
    fn real_clock_sleeps_until_due() {
        let clock = Rc::new(SystemClock::new());
        let scheduler = Scheduler::new(clock.clone());
        scheduler.schedule(Duration::from_millis(10), || {});

        assert_eq!(run(&scheduler), 1);
        assert!(clock.now() >= Duration::from_millis(10));
    }
}
