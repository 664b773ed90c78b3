/// Clocks and the cooperative timer queue used by debounce and throttle.
mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::Scheduler;
