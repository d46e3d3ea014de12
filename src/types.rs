use crate::DateError;
use crate::calendar::days_in_month;
use crate::consts::{
    MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_YEAR, PAGUME, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// An Ethiopian year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9991)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(non_zero) if (MIN_YEAR..=MAX_YEAR).contains(&value) => Ok(Self(non_zero)),
            _ => Err(DateError::InvalidYear(i64::from(value))),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns `true` when Pagume of this year has six days
    #[inline]
    pub const fn is_leap(self) -> bool {
        crate::calendar::is_ethiopian_leap(self.0.get() as i32)
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An Ethiopian month in the range `1..=MAX_MONTH` (1..=13, 13 being Pagume)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns `true` for the thirteenth month
    #[inline]
    pub const fn is_pagume(self) -> bool {
        self.0.get() == PAGUME
    }

    /// Zero-based position in the locale month tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month.
    /// Months 1-12 have 30 days; Pagume has 5, or 6 in leap years.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day: value,
        };
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= days_in_month(i32::from(year.get()), month.get()) => {
                Ok(Self(non_zero))
            }
            _ => Err(invalid),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half of the day on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

/// Wall-clock time on the Ethiopian civil clock, 24-hour numbering.
/// Hour 0 is the start of the Ethiopian day (06:00 East Africa Time).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{hour:02}:{minute:02}:{second:02}")]
#[serde(try_from = "ClockFields", into = "ClockFields")]
pub struct ClockTime {
    hour:   u8,
    minute: u8,
    second: u8,
}

#[derive(Serialize, Deserialize)]
struct ClockFields {
    hour:   u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// Start of the Ethiopian day
    pub const MIDNIGHT: Self = Self {
        hour:   0,
        minute: 0,
        second: 0,
    };

    /// Creates a validated clock time
    ///
    /// # Errors
    /// Returns `InvalidHour`, `InvalidMinute` or `InvalidSecond` for values past the clock bounds.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DateError> {
        if hour > MAX_HOUR {
            return Err(DateError::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(DateError::InvalidMinute(minute));
        }
        if second > MAX_SECOND {
            return Err(DateError::InvalidSecond(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Seconds elapsed since the start of the Ethiopian day
    pub const fn seconds_since_midnight(self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    /// Hour on a 12-hour dial: 0 reads as 12 AM, 13 as 1 PM.
    pub const fn twelve_hour(self) -> (u8, Meridiem) {
        let meridiem = if self.hour < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        (hour, meridiem)
    }
}

impl TryFrom<ClockFields> for ClockTime {
    type Error = DateError;

    fn try_from(value: ClockFields) -> Result<Self, Self::Error> {
        Self::new(value.hour, value.minute, value.second)
    }
}

impl From<ClockTime> for ClockFields {
    fn from(time: ClockTime) -> Self {
        Self {
            hour:   time.hour,
            minute: time.minute,
            second: time.second,
        }
    }
}
