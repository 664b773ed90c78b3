//! Small random and timing helpers: shuffling, random picks, random colors,
//! plus debounce and throttle wrappers driven by a cooperative timer queue.
pub mod color;
pub mod debounce;
pub mod event;
pub mod random;
pub mod throttle;
pub mod time;
pub mod types;

pub use color::{format_color, random_color, random_color_with};
pub use debounce::{Debounced, debounce, debounce_default};
pub use random::{pick_random, pick_random_with, shuffle_array, shuffle_array_with};
pub use throttle::{Throttled, throttle, throttle_default};
pub use types::{DEFAULT_WAIT, Pick, TimerId};
