/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a Gregorian year
pub const MONTHS_IN_YEAR: usize = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Canonical English month names, in calendar order.
/// Lookups against these are exact: no case folding, no abbreviations.
pub const MONTH_NAMES: [&str; MONTHS_IN_YEAR] = [
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

/// Days in each month, January first.
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; MONTHS_IN_YEAR] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// City matched by [`crate::lives_here`]
pub const HOME_CITY: &str = "Toronto";

/// Route serving the help page
pub const HELP_PATH: &str = "/help";
/// Route accepting ping creations
pub const PING_PATH: &str = "/ping";
