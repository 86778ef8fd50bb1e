/// Smallest month number accepted in a period
pub const MIN_MONTH: u32 = 1;

/// Largest month number accepted in a period
pub const MAX_MONTH: u32 = 12;

/// Earliest year a target can be set for
pub const MIN_TARGET_YEAR: i32 = 2020;

/// Latest year a target can be set for
pub const MAX_TARGET_YEAR: i32 = 2050;

/// Smallest trainee quota accepted for a target
pub const MIN_TARGET_AMOUNT: i32 = 1;

/// Largest trainee quota accepted for a target
pub const MAX_TARGET_AMOUNT: i32 = 1000;

/// Total attempts for idempotent collaborator reads (first try included)
pub const DEFAULT_READ_ATTEMPTS: u32 = 2;

/// Display names for months, indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
