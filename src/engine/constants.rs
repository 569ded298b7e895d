// Constants for the stepping engine and the screens

use std::time::Duration;

/// Smallest input size a screen accepts
pub const MIN_SIZE: usize = 4;

/// Largest input size a screen accepts
pub const MAX_SIZE: usize = 8;

/// Input size a screen starts with
pub const DEFAULT_SIZE: usize = 6;

/// How often the suspend gate re-checks the pause flag
pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Pause after each breadth-first enqueue, independent of speed
pub const ENQUEUE_SETTLE: Duration = Duration::from_millis(100);

/// How long a precondition message stays visible
pub const TRANSIENT_ERROR_DURATION: Duration = Duration::from_secs(3);

/// Exclusive upper bound for sort and search values
pub const VALUE_UPPER: u32 = 100;

/// Exclusive upper bound for merge sort values (kept small so the tree stays readable)
pub const MERGE_VALUE_UPPER: u32 = 20;
