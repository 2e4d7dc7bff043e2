pub mod dump;
pub mod finder;
pub mod throttle;

pub use dump::dump_tree;
pub use finder::find_descendant;
pub use throttle::{EventThrottle, THROTTLE_WINDOW_MS};
