mod calendar;
mod consts;
mod convert;
mod format;
mod locale;
mod prelude;
mod range;
mod types;

pub use calendar::{
    days_in_month, days_in_pagume, days_in_year, is_ethiopian_leap, is_gregorian_leap,
    new_year_gregorian_date,
};
pub use consts::*;
pub use convert::{to_ethiopian_date_time, to_gregorian_instant};
pub use format::{FormatOptions, TimeFormat, format};
pub use locale::{
    Locale, UnsupportedLocale, WeekdayStyle, english_month_for_transliterated,
    transliterated_month_name,
};
pub use range::{EthiopianDateRange, RangeError};
pub use types::{ClockTime, Day, Meridiem, Month, Year};

pub use jiff;

use crate::prelude::*;
use jiff::Timestamp;
use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// A calendar day in the Ethiopian calendar, without a time of day.
///
/// Fields are validated on construction: months run 1-13 and the day must fit
/// the month, Pagume included.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
#[serde(try_from = "DateFields", into = "DateFields")]
pub struct EthiopianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// An Ethiopian calendar day together with a time on the Ethiopian civil clock.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{date}T{time}")]
pub struct EthiopianDateTime {
    #[serde(flatten)]
    date: EthiopianDate,
    #[serde(flatten)]
    time: ClockTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u8),
    #[display(
        fmt = "Instant {} is outside the supported range (EC {}-{})",
        "_0",
        MIN_YEAR,
        MAX_YEAR
    )]
    InstantOutOfRange(Timestamp),
}

impl std::error::Error for DateError {}

impl DateError {
    /// Returns `true` when a date or clock field was outside its bounds
    pub const fn is_out_of_range_field(&self) -> bool {
        !matches!(self, Self::InstantOutOfRange(_))
    }
}

#[derive(Serialize, Deserialize)]
struct DateFields {
    year:  u16,
    month: u8,
    day:   u8,
}

impl EthiopianDate {
    /// Creates a validated Ethiopian date
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` when a field is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Meskerem 1 of the given year
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year is out of range.
    pub fn new_year(year: u16) -> Result<Self, DateError> {
        Self::new(year, MESKEREM, MIN_DAY)
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `true` when this date's year has a sixth day of Pagume
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        calendar::days_in_month(self.year.get() as i32, self.month.get())
    }

    /// Days elapsed since Meskerem 1 of the same year (0-based)
    pub const fn days_since_new_year(&self) -> u16 {
        (self.month.get() as u16 - 1) * DAYS_IN_REGULAR_MONTH as u16 + self.day.get() as u16 - 1
    }

    /// Days elapsed since Meskerem 1 of EC 1
    pub const fn days_since_epoch(&self) -> i64 {
        calendar::days_before_year(self.year.get() as i32) + self.days_since_new_year() as i64
    }

    /// Day of the week, shared with the paired Gregorian day
    pub fn weekday(&self) -> Weekday {
        EPOCH_WEEKDAY.wrapping_add(self.days_since_epoch())
    }

    /// Returns a copy with a different year.
    ///
    /// # Errors
    /// Fails with `InvalidDay` when moving Pagume 6 into a common year.
    pub fn with_year(self, year: u16) -> Result<Self, DateError> {
        Self::new(year, self.month(), self.day())
    }

    /// Returns a copy with a different month
    ///
    /// # Errors
    /// Fails when the month is out of range or the current day does not fit it.
    pub fn with_month(self, month: u8) -> Result<Self, DateError> {
        Self::new(self.year(), month, self.day())
    }

    /// Returns a copy with a different day of the month
    ///
    /// # Errors
    /// Fails when the day does not fit the current month.
    pub fn with_day(self, day: u8) -> Result<Self, DateError> {
        Self::new(self.year(), self.month(), day)
    }

    /// Combines this date with a clock time
    pub const fn at(self, time: ClockTime) -> EthiopianDateTime {
        EthiopianDateTime { date: self, time }
    }

    /// Combines this date with the start of the Ethiopian day (00:00:00).
    /// This is the only place a missing time of day is filled in.
    pub const fn at_midnight(self) -> EthiopianDateTime {
        self.at(ClockTime::MIDNIGHT)
    }

    /// First day of the month `months` away, carrying across years.
    /// Pagume counts as a month: stepping forward from it lands on Meskerem.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the target leaves the supported range.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        let ordinal = (i64::from(self.year()) - 1) * i64::from(MAX_MONTH)
            + i64::from(self.month())
            - 1
            + i64::from(months);
        let year = ordinal.div_euclid(i64::from(MAX_MONTH)) + 1;
        let month = ordinal.rem_euclid(i64::from(MAX_MONTH)) + 1;

        let year = u16::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
        let month = u8::try_from(month).map_err(|_| DateError::InvalidMonth(MAX_MONTH))?;
        Self::new(year, month, MIN_DAY)
    }

    /// The following day, rolling over the end of the month and of Pagume.
    /// Returns `None` after the last supported day.
    pub fn next_day(self) -> Option<Self> {
        if self.day() < self.days_in_month() {
            Self::new(self.year(), self.month(), self.day() + 1).ok()
        } else {
            self.add_months(1).ok()
        }
    }

    /// The preceding day. Returns `None` before Meskerem 1 of EC 1.
    pub fn previous_day(self) -> Option<Self> {
        if self.day() > MIN_DAY {
            return Self::new(self.year(), self.month(), self.day() - 1).ok();
        }
        let previous_month = self.add_months(-1).ok()?;
        previous_month.with_day(previous_month.days_in_month()).ok()
    }

    /// First day of the same month `years` away
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the target leaves the supported range.
    pub fn add_years(self, years: i32) -> Result<Self, DateError> {
        let year = i64::from(self.year()) + i64::from(years);
        let year = u16::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
        Self::new(year, self.month(), MIN_DAY)
    }
}

impl TryFrom<DateFields> for EthiopianDate {
    type Error = DateError;

    fn try_from(value: DateFields) -> Result<Self, Self::Error> {
        Self::new(value.year, value.month, value.day)
    }
}

impl From<EthiopianDate> for DateFields {
    fn from(date: EthiopianDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
            day:   date.day(),
        }
    }
}

impl From<EthiopianDate> for EthiopianDateTime {
    fn from(date: EthiopianDate) -> Self {
        date.at_midnight()
    }
}

impl EthiopianDateTime {
    /// Creates a validated Ethiopian date-time
    ///
    /// # Errors
    /// Returns the `DateError` for the first field found out of range.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateError> {
        let date = EthiopianDate::new(year, month, day)?;
        let time = ClockTime::new(hour, minute, second)?;
        Ok(Self { date, time })
    }

    pub const fn from_parts(date: EthiopianDate, time: ClockTime) -> Self {
        Self { date, time }
    }

    pub const fn date(&self) -> EthiopianDate {
        self.date
    }

    pub const fn time(&self) -> ClockTime {
        self.time
    }

    pub const fn year(&self) -> u16 {
        self.date.year()
    }

    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub const fn second(&self) -> u8 {
        self.time.second()
    }

    /// # Errors
    /// See [`EthiopianDate::with_year`].
    pub fn with_year(self, year: u16) -> Result<Self, DateError> {
        Ok(self.date.with_year(year)?.at(self.time))
    }

    /// # Errors
    /// See [`EthiopianDate::with_month`].
    pub fn with_month(self, month: u8) -> Result<Self, DateError> {
        Ok(self.date.with_month(month)?.at(self.time))
    }

    /// # Errors
    /// See [`EthiopianDate::with_day`].
    pub fn with_day(self, day: u8) -> Result<Self, DateError> {
        Ok(self.date.with_day(day)?.at(self.time))
    }

    /// # Errors
    /// Returns `DateError::InvalidHour` for hours past 23.
    pub fn with_hour(self, hour: u8) -> Result<Self, DateError> {
        Ok(self.with_time(ClockTime::new(hour, self.minute(), self.second())?))
    }

    /// # Errors
    /// Returns `DateError::InvalidMinute` for minutes past 59.
    pub fn with_minute(self, minute: u8) -> Result<Self, DateError> {
        Ok(self.with_time(ClockTime::new(self.hour(), minute, self.second())?))
    }

    /// # Errors
    /// Returns `DateError::InvalidSecond` for seconds past 59.
    pub fn with_second(self, second: u8) -> Result<Self, DateError> {
        Ok(self.with_time(ClockTime::new(self.hour(), self.minute(), second)?))
    }

    /// Replaces the time of day, keeping the date
    pub const fn with_time(self, time: ClockTime) -> Self {
        Self {
            date: self.date,
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> EthiopianDate {
        EthiopianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_date_valid() {
        let d = date(2016, 13, 5);
        assert_eq!(d.year(), 2016);
        assert_eq!(d.month(), 13);
        assert_eq!(d.day(), 5);
        assert!(d.month_typed().is_pagume());
    }

    #[test]
    fn test_new_date_invalid_fields() {
        assert!(matches!(
            EthiopianDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            EthiopianDate::new(2016, 14, 1),
            Err(DateError::InvalidMonth(14))
        ));
        assert!(matches!(
            EthiopianDate::new(2016, 13, 6),
            Err(DateError::InvalidDay {
                year: 2016,
                month: 13,
                day: 6
            })
        ));
        assert!(EthiopianDate::new(2015, 13, 6).is_ok());
    }

    #[test]
    fn test_new_date_time_rejects_clock_fields() {
        assert!(matches!(
            EthiopianDateTime::new(2016, 1, 1, 24, 0, 0),
            Err(DateError::InvalidHour(24))
        ));
        assert!(matches!(
            EthiopianDateTime::new(2016, 1, 1, 0, 60, 0),
            Err(DateError::InvalidMinute(60))
        ));
        assert!(
            EthiopianDateTime::new(2016, 1, 1, 0, 0, 61)
                .unwrap_err()
                .is_out_of_range_field()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2016, 1, 1).to_string(), "2016-01-01");
        let dt = EthiopianDateTime::new(2016, 13, 5, 23, 59, 59).unwrap();
        assert_eq!(dt.to_string(), "2016-13-05T23:59:59");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DateError::InvalidMonth(14).to_string(),
            "Invalid month: 14 (must be 1-13)"
        );
        assert_eq!(
            DateError::InvalidDay {
                year: 2016,
                month: 13,
                day: 6
            }
            .to_string(),
            "Invalid day 6 for month 2016-13"
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2015, 13, 6) < date(2016, 1, 1));
        assert!(date(2016, 12, 30) < date(2016, 13, 1));
        let morning = date(2016, 1, 1).at_midnight();
        let evening = morning.with_hour(22).unwrap();
        assert!(morning < evening);
    }

    #[test]
    fn test_with_field_methods() {
        let dt = EthiopianDateTime::new(2016, 4, 10, 12, 30, 15).unwrap();

        let changed = dt.with_minute(45).unwrap();
        assert_eq!(changed.minute(), 45);
        assert_eq!(dt.minute(), 30, "original is untouched");

        assert_eq!(dt.with_day(30).unwrap().day(), 30);
        assert!(dt.with_day(31).is_err());
        assert!(dt.with_hour(24).is_err());
        assert!(dt.with_second(60).is_err());
        assert!(
            matches!(dt.with_month(13), Err(DateError::InvalidDay { .. })),
            "day 10 is past the end of Pagume and is rejected, not clamped"
        );

        let pagume = dt.with_day(5).unwrap().with_month(13).unwrap();
        assert_eq!(pagume.month(), 13);
        assert_eq!(pagume.day(), 5);
        assert!(pagume.with_day(6).is_err(), "EC 2016 is a common year");
    }

    #[test]
    fn test_with_year_pagume_six() {
        let leap_day = date(2015, 13, 6);
        assert!(leap_day.with_year(2019).is_ok());
        assert!(matches!(
            leap_day.with_year(2016),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_at_midnight_fills_time() {
        let dt: EthiopianDateTime = date(2017, 3, 10).into();
        assert_eq!(dt.time(), ClockTime::MIDNIGHT);
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_days_since_new_year() {
        assert_eq!(date(2016, 1, 1).days_since_new_year(), 0);
        assert_eq!(date(2016, 2, 1).days_since_new_year(), 30);
        assert_eq!(date(2016, 13, 5).days_since_new_year(), 364);
        assert_eq!(date(2015, 13, 6).days_since_new_year(), 365);
        assert_eq!(date(2015, 13, 6).days_in_month(), 6);
    }

    #[test]
    fn test_add_months() {
        assert_eq!(date(2016, 4, 10).add_months(1).unwrap(), date(2016, 5, 1));
        assert_eq!(date(2016, 13, 3).add_months(1).unwrap(), date(2017, 1, 1));
        assert_eq!(date(2016, 1, 20).add_months(-1).unwrap(), date(2015, 13, 1));
        assert_eq!(date(2016, 1, 1).add_months(26).unwrap(), date(2018, 1, 1));
        assert!(matches!(
            date(1, 1, 1).add_months(-1),
            Err(DateError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_next_and_previous_day() {
        assert_eq!(date(2016, 1, 30).next_day(), Some(date(2016, 2, 1)));
        assert_eq!(date(2015, 13, 5).next_day(), Some(date(2015, 13, 6)));
        assert_eq!(date(2015, 13, 6).next_day(), Some(date(2016, 1, 1)));
        assert_eq!(date(2016, 13, 5).next_day(), Some(date(2017, 1, 1)));
        assert_eq!(date(MAX_YEAR, 13, 6).next_day(), None);

        assert_eq!(date(2016, 1, 1).previous_day(), Some(date(2015, 13, 6)));
        assert_eq!(date(2017, 1, 1).previous_day(), Some(date(2016, 13, 5)));
        assert_eq!(date(2016, 2, 1).previous_day(), Some(date(2016, 1, 30)));
        assert_eq!(date(1, 1, 1).previous_day(), None);
    }

    #[test]
    fn test_add_years() {
        assert_eq!(date(2016, 13, 5).add_years(1).unwrap(), date(2017, 13, 1));
        assert_eq!(date(2016, 7, 9).add_years(-16).unwrap(), date(2000, 7, 1));
        assert!(date(MAX_YEAR, 1, 1).add_years(1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 12 September 2023 was a Tuesday
        assert_eq!(date(2016, 1, 1).weekday(), Weekday::Tuesday);
        // 11 September 2024 was a Wednesday
        assert_eq!(date(2017, 1, 1).weekday(), Weekday::Wednesday);
        // 7 January 2024, Genna, was a Sunday
        assert_eq!(date(2016, 4, 28).weekday(), Weekday::Sunday);
        assert_eq!(date(1, 1, 1).weekday(), EPOCH_WEEKDAY);
    }

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(date(1, 1, 1).days_since_epoch(), 0);
        assert_eq!(date(1, 13, 5).days_since_epoch(), 364);
        assert_eq!(date(2, 1, 1).days_since_epoch(), 365);
        let pagume_6 = date(2015, 13, 6).days_since_epoch();
        assert_eq!(date(2016, 1, 1).days_since_epoch(), pagume_6 + 1);
    }

    #[test]
    fn test_date_serde() {
        let d = date(2016, 13, 5);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"year":2016,"month":13,"day":5}"#);
        assert_eq!(serde_json::from_str::<EthiopianDate>(&json).unwrap(), d);

        let bad = r#"{"year":2016,"month":13,"day":6}"#;
        assert!(serde_json::from_str::<EthiopianDate>(bad).is_err());
    }

    #[test]
    fn test_date_time_serde_is_flat() {
        let dt = EthiopianDateTime::new(2016, 1, 1, 9, 5, 3).unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(
            json,
            r#"{"year":2016,"month":1,"day":1,"hour":9,"minute":5,"second":3}"#
        );
        assert_eq!(serde_json::from_str::<EthiopianDateTime>(&json).unwrap(), dt);
    }
}
