use std::iter;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{DateError, EthiopianDate, EthiopianDateTime, prelude::*, to_ethiopian_date_time};

/// An inclusive span of Ethiopian calendar days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{start}/{end}")]
#[serde(try_from = "RangeFields", into = "RangeFields")]
pub struct EthiopianDateRange {
    start: EthiopianDate,
    end:   EthiopianDate,
}

#[derive(Serialize, Deserialize)]
struct RangeFields {
    start: EthiopianDate,
    end:   EthiopianDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange {
        start: EthiopianDate,
        end:   EthiopianDate,
    },

    /// A bound could not be converted.
    #[error(transparent)]
    Date(#[from] DateError),
}

impl EthiopianDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: EthiopianDate, end: EthiopianDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The Ethiopian days touched by two instants, read on an EAT clock.
    ///
    /// # Errors
    /// Returns `RangeError::Date` if either instant is out of range and
    /// `RangeError::InvalidRange` if `min` is after `max`.
    pub fn from_instants(min: Timestamp, max: Timestamp) -> Result<Self, RangeError> {
        let start = to_ethiopian_date_time(min)?.date();
        let end = to_ethiopian_date_time(max)?.date();
        Self::new(start, end)
    }

    /// Every day of one Ethiopian year, Pagume included
    ///
    /// # Errors
    /// Returns `RangeError::Date` if the year is out of range.
    pub fn year(year: u16) -> Result<Self, RangeError> {
        let start = EthiopianDate::new_year(year)?;
        let end = EthiopianDate::new(year, crate::PAGUME, crate::days_in_pagume(i32::from(year)))?;
        Self::new(start, end)
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> EthiopianDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> EthiopianDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (EthiopianDate, EthiopianDate) {
        (self.start, self.end)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &EthiopianDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if the day of a date-time falls in the range, ignoring the clock
    pub fn contains_date_time(&self, date_time: &EthiopianDateTime) -> bool {
        self.contains(&date_time.date())
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days in the range, both ends counted
    pub const fn len_days(&self) -> i64 {
        self.end.days_since_epoch() - self.start.days_since_epoch() + 1
    }

    /// Iterates over every day from start to end
    pub fn days(&self) -> impl Iterator<Item = EthiopianDate> + use<> {
        let end = self.end;
        iter::successors(Some(self.start), move |day| {
            day.next_day().filter(|next| *next <= end)
        })
    }
}

impl TryFrom<RangeFields> for EthiopianDateRange {
    type Error = RangeError;

    fn try_from(value: RangeFields) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl From<EthiopianDateRange> for RangeFields {
    fn from(range: EthiopianDateRange) -> Self {
        Self {
            start: range.start,
            end:   range.end,
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
    fn test_new_range_cases() {
        struct TestCase {
            start:          EthiopianDate,
            end:            EthiopianDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          date(2010, 1, 1),
                end:            date(2016, 1, 1),
                should_succeed: true,
                description:    "valid range (start < end)",
            },
            TestCase {
                start:          date(2016, 1, 1),
                end:            date(2015, 13, 6),
                should_succeed: false,
                description:    "invalid range (start > end)",
            },
            TestCase {
                start:          date(2016, 1, 1),
                end:            date(2016, 1, 1),
                should_succeed: true,
                description:    "equal dates (start == end)",
            },
        ];

        for case in &cases {
            let range = EthiopianDateRange::new(case.start, case.end);

            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(range.is_err(), "Expected failure for: {}", case.description);
            }
        }
    }

    #[test]
    fn test_accessors() {
        let start = date(2010, 1, 1);
        let end = date(2016, 13, 5);
        let range = EthiopianDateRange::new(start, end).unwrap();

        assert_eq!(range.start(), start);
        assert_eq!(range.end(), end);
        assert_eq!(range.dates(), (start, end));
    }

    #[test]
    fn test_contains() {
        let range = EthiopianDateRange::new(date(2016, 1, 1), date(2016, 13, 5)).unwrap();

        assert!(range.contains(&date(2016, 1, 1)));
        assert!(range.contains(&date(2016, 13, 5)));
        assert!(range.contains(&date(2016, 7, 15)));
        assert!(!range.contains(&date(2015, 13, 6)));
        assert!(!range.contains(&date(2017, 1, 1)));

        let late_evening = date(2016, 13, 5).at(crate::ClockTime::new(23, 0, 0).unwrap());
        assert!(range.contains_date_time(&late_evening));
    }

    #[test]
    fn test_overlaps_and_is_within() {
        let year_2016 = EthiopianDateRange::year(2016).unwrap();
        let spring = EthiopianDateRange::new(date(2016, 7, 1), date(2016, 9, 30)).unwrap();
        let straddle = EthiopianDateRange::new(date(2016, 13, 1), date(2017, 1, 10)).unwrap();
        let next_year = EthiopianDateRange::year(2017).unwrap();

        assert!(year_2016.overlaps(&spring));
        assert!(spring.is_within(&year_2016));
        assert!(!year_2016.is_within(&spring));

        assert!(straddle.overlaps(&year_2016));
        assert!(straddle.overlaps(&next_year));
        assert!(!straddle.is_within(&year_2016));

        assert!(!year_2016.overlaps(&next_year));
    }

    #[test]
    fn test_year_range_length() {
        assert_eq!(EthiopianDateRange::year(2015).unwrap().len_days(), 366);
        assert_eq!(EthiopianDateRange::year(2016).unwrap().len_days(), 365);
        assert_eq!(EthiopianDateRange::year(2016).unwrap().days().count(), 365);
    }

    #[test]
    fn test_days_cross_pagume() {
        let range = EthiopianDateRange::new(date(2015, 13, 5), date(2016, 1, 2)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2015, 13, 5),
                date(2015, 13, 6),
                date(2016, 1, 1),
                date(2016, 1, 2)
            ]
        );
    }

    #[test]
    fn test_from_instants() {
        let min: Timestamp = "2023-09-12T03:00:00Z".parse().unwrap();
        let max: Timestamp = "2024-09-11T02:59:59Z".parse().unwrap();
        let range = EthiopianDateRange::from_instants(min, max).unwrap();
        assert_eq!(range, EthiopianDateRange::year(2016).unwrap());

        assert!(matches!(
            EthiopianDateRange::from_instants(max, min),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!(
            EthiopianDateRange::from_instants(Timestamp::MIN, max),
            Err(RangeError::Date(DateError::InstantOutOfRange(_)))
        ));
    }

    #[test]
    fn test_display() {
        let range = EthiopianDateRange::new(date(2016, 1, 1), date(2016, 13, 5)).unwrap();
        assert_eq!(range.to_string(), "2016-01-01/2016-13-05");
        assert_eq!(
            RangeError::InvalidRange {
                start: date(2016, 1, 1),
                end:   date(2015, 1, 1),
            }
            .to_string(),
            "Invalid date range: start (2016-01-01) is after end (2015-01-01)"
        );
    }

    #[test]
    fn test_serde() {
        let range = EthiopianDateRange::new(date(2016, 1, 1), date(2016, 13, 5)).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"year":2016,"month":1,"day":1},"end":{"year":2016,"month":13,"day":5}}"#
        );
        assert_eq!(serde_json::from_str::<EthiopianDateRange>(&json).unwrap(), range);

        let reversed =
            r#"{"start":{"year":2017,"month":1,"day":1},"end":{"year":2016,"month":1,"day":1}}"#;
        assert!(serde_json::from_str::<EthiopianDateRange>(reversed).is_err());
    }
}
