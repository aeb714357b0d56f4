pub const SECONDS_IN_DAY: u64 = 86_400;

/// Days after creation during which contributors cannot reclaim unless the
/// campaign is canceled.
pub const RECLAIM_WINDOW_DAYS: u64 = 30;
pub const RECLAIM_WINDOW_SECONDS: u64 = RECLAIM_WINDOW_DAYS * SECONDS_IN_DAY;

// Tier thresholds are fractions of the target amount.
pub const SILVER_TARGET_DIVISOR: i128 = 10;
pub const GOLD_TARGET_DIVISOR: i128 = 2;
