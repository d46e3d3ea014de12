/// Minimum supported Ethiopian year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum supported Ethiopian year (inclusive).
/// The last day of EC 9991 falls in September 9999, the end of the Gregorian civil range.
pub const MAX_YEAR: u16 = 9991;

/// Number of months in an Ethiopian year, Pagume included
pub const MAX_MONTH: u8 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Meskerem, the first month
pub const MESKEREM: u8 = 1;
/// Month number for Pagume, the short thirteenth month
pub const PAGUME: u8 = 13;

/// Days in each of the twelve regular months
pub const DAYS_IN_REGULAR_MONTH: u8 = 30;
/// Days in Pagume for common years
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume for leap years
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Upper bounds of the clock fields
pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Ethiopian year `y` begins in Gregorian year `y + 7`
pub const NEW_YEAR_GREGORIAN_OFFSET: i32 = 7;
/// Gregorian month of Meskerem 1
pub const NEW_YEAR_GREGORIAN_MONTH: u8 = 9;
/// Gregorian day of Meskerem 1 when the following Gregorian year is common
pub const NEW_YEAR_GREGORIAN_DAY: u8 = 11;
/// Gregorian day of Meskerem 1 when the following Gregorian year is leap
pub const NEW_YEAR_GREGORIAN_DAY_LEAP: u8 = 12;

/// Weekday of Meskerem 1, EC 1 (11 September 8 CE, proleptic Gregorian)
pub const EPOCH_WEEKDAY: jiff::civil::Weekday = jiff::civil::Weekday::Thursday;

/// The Ethiopian day starts at 06:00 on the paired civil clock
pub const DIURNAL_OFFSET_HOURS: i64 = 6;
/// East Africa Time, UTC+3
pub const EAT_OFFSET_HOURS: i8 = 3;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 3_600;
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
