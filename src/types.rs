use std::{fmt, time::Duration, vec};

/// Quiet period / minimum interval used when the caller has no preference.
pub const DEFAULT_WAIT: Duration = Duration::from_millis(300);

/// Handle to a task queued on a [`Scheduler`](crate::time::Scheduler).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub(crate) u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

///A single argument to `pick_random`: either one value or a sequence that gets flattened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pick<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Vec<T>> for Pick<T> {
    fn from(values: Vec<T>) -> Self {
        Pick::Many(values)
    }
}

impl<T> IntoIterator for Pick<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Pick::One(value) => vec![value].into_iter(),
            Pick::Many(values) => values.into_iter(),
        }
    }
}
