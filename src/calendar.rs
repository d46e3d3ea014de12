//! Leap rules and month lengths for the Ethiopian and proleptic Gregorian calendars.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_REGULAR_MONTH, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
    NEW_YEAR_GREGORIAN_DAY, NEW_YEAR_GREGORIAN_DAY_LEAP, NEW_YEAR_GREGORIAN_MONTH,
    NEW_YEAR_GREGORIAN_OFFSET, PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};

/// Returns `true` for leap years of the proleptic Gregorian calendar.
pub const fn is_gregorian_leap(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns `true` when Ethiopian year `year` has a sixth day of Pagume.
///
/// EC `y` runs from September `y + 7` to September `y + 8`. Its Pagume gains a
/// sixth day exactly when the following New Year moves to 12 September, that is
/// when Gregorian `y + 9` is leap. Between 1900 and 2099 this agrees with the
/// traditional `year % 4 == 3` rule; it departs from it at Gregorian century years.
pub const fn is_ethiopian_leap(year: i32) -> bool {
    is_gregorian_leap(year + NEW_YEAR_GREGORIAN_OFFSET + 2)
}

/// Number of days in Pagume for the given Ethiopian year (5 or 6)
pub const fn days_in_pagume(year: i32) -> u8 {
    if is_ethiopian_leap(year) {
        PAGUME_DAYS_LEAP
    } else {
        PAGUME_DAYS
    }
}

/// Number of days in an Ethiopian month (30, or the Pagume length for month 13)
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == PAGUME {
        days_in_pagume(year)
    } else {
        DAYS_IN_REGULAR_MONTH
    }
}

/// Number of days in an Ethiopian year (365 or 366)
pub const fn days_in_year(year: i32) -> u16 {
    (PAGUME - 1) as u16 * DAYS_IN_REGULAR_MONTH as u16 + days_in_pagume(year) as u16
}

/// Gregorian (year, month, day) of Meskerem 1 of the given Ethiopian year.
///
/// New Year falls on 11 September, or on 12 September when the next Gregorian
/// year is leap: the preceding Pagume had its sixth day.
pub const fn new_year_gregorian_date(year: i32) -> (i32, u8, u8) {
    let gregorian_year = year + NEW_YEAR_GREGORIAN_OFFSET;
    let day = if is_gregorian_leap(gregorian_year + 1) {
        NEW_YEAR_GREGORIAN_DAY_LEAP
    } else {
        NEW_YEAR_GREGORIAN_DAY
    };
    (gregorian_year, NEW_YEAR_GREGORIAN_MONTH, day)
}

/// Number of Gregorian leap years in `1..=year`
const fn gregorian_leap_years_through(year: i64) -> i64 {
    year / LEAP_YEAR_CYCLE as i64 - year / CENTURY_CYCLE as i64 + year / GREGORIAN_CYCLE as i64
}

/// Days from Meskerem 1 of EC 1 to Meskerem 1 of `year`, for `year >= 1`.
pub const fn days_before_year(year: i32) -> i64 {
    let year = year as i64;
    let offset = NEW_YEAR_GREGORIAN_OFFSET as i64;
    // EC e is leap when Gregorian e + 9 is: count Gregorian leap years in 10..=year + 8
    365 * (year - 1) + gregorian_leap_years_through(year + offset + 1)
        - gregorian_leap_years_through(offset + 2)
}
