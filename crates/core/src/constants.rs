/// Maximum age of a cached totals snapshot before forced recomputation.
pub const STALENESS_WINDOW_SECS: i64 = 5 * 60;

/// Capacity of the push event bus before lagging subscribers drop events.
pub const PUSH_BUS_CAPACITY: usize = 64;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
