//! Conversion between Ethiopian civil date-times and UTC instants.
//!
//! Both directions run on a single linear civil timestamp in East Africa Time:
//! Ethiopian midnight is 06:00 EAT, so an Ethiopian clock reading plus six hours
//! is the EAT wall time, and EAT is UTC+3. Keeping the day offset and the clock
//! on one timeline means a late Ethiopian hour rolls into the next Gregorian day
//! without separate carry handling.

use jiff::civil::{Date, DateTime, Time};
use jiff::tz::{self, TimeZone};
use jiff::{SignedDuration, Span, Timestamp};
use tracing::trace;

use crate::calendar::new_year_gregorian_date;
use crate::consts::{
    DAYS_IN_REGULAR_MONTH, DIURNAL_OFFSET_HOURS, EAT_OFFSET_HOURS, NEW_YEAR_GREGORIAN_OFFSET,
    SECONDS_PER_DAY, SECONDS_PER_HOUR,
};
use crate::{ClockTime, DateError, EthiopianDate, EthiopianDateTime};

/// East Africa Time, the fixed civil offset of the Ethiopian clock
fn east_africa_time() -> TimeZone {
    TimeZone::fixed(tz::offset(EAT_OFFSET_HOURS))
}

/// Converts an Ethiopian date-time to the UTC instant it denotes.
///
/// `2016-01-01 00:00:00` EC is `2023-09-12T03:00:00Z`.
///
/// # Errors
/// Returns `DateError::InvalidYear` if the Gregorian counterpart falls outside
/// the civil range, which cannot happen for years up to `MAX_YEAR`.
pub fn to_gregorian_instant(date_time: &EthiopianDateTime) -> Result<Timestamp, DateError> {
    let year = i32::from(date_time.year());
    let new_year = new_year_civil_date(year)?;

    let elapsed = i64::from(date_time.date().days_since_new_year()) * SECONDS_PER_DAY
        + date_time.time().seconds_since_midnight()
        + DIURNAL_OFFSET_HOURS * SECONDS_PER_HOUR;

    let instant = new_year
        .to_datetime(Time::midnight())
        .checked_add(SignedDuration::from_secs(elapsed))
        .and_then(|eat| eat.to_zoned(east_africa_time()))
        .map(|zoned| zoned.timestamp())
        .map_err(|_| DateError::InvalidYear(i64::from(year)))?;

    trace!(ethiopian = %date_time, %instant, "converted to instant");
    Ok(instant)
}

/// Converts a UTC instant to the Ethiopian date-time read off an EAT clock.
///
/// # Errors
/// Returns `DateError::InstantOutOfRange` for instants before EC 1 or after
/// the end of `MAX_YEAR`.
pub fn to_ethiopian_date_time(instant: Timestamp) -> Result<EthiopianDateTime, DateError> {
    let eat = instant.to_zoned(east_africa_time()).datetime();
    let paired = eat
        .checked_sub(SignedDuration::from_hours(DIURNAL_OFFSET_HOURS))
        .map_err(|_| DateError::InstantOutOfRange(instant))?;

    let date = EthiopianDate::from_gregorian_date(paired.date())
        .map_err(|_| DateError::InstantOutOfRange(instant))?;
    let time = clock_time(paired)?;

    let date_time = date.at(time);
    trace!(%instant, ethiopian = %date_time, "converted from instant");
    Ok(date_time)
}

fn clock_time(paired: DateTime) -> Result<ClockTime, DateError> {
    ClockTime::new(
        paired.hour().unsigned_abs(),
        paired.minute().unsigned_abs(),
        paired.second().unsigned_abs(),
    )
}

/// Gregorian civil date of Meskerem 1 for an Ethiopian year
fn new_year_civil_date(year: i32) -> Result<Date, DateError> {
    let invalid = || DateError::InvalidYear(i64::from(year));

    let (gregorian_year, month, day) = new_year_gregorian_date(year);
    let gregorian_year = i16::try_from(gregorian_year).map_err(|_| invalid())?;
    let month = i8::try_from(month).map_err(|_| invalid())?;
    let day = i8::try_from(day).map_err(|_| invalid())?;

    Date::new(gregorian_year, month, day).map_err(|_| invalid())
}

impl EthiopianDate {
    /// The Gregorian civil day this Ethiopian day is paired with.
    ///
    /// The Ethiopian day starts at 06:00 EAT of this Gregorian day and ends at
    /// 06:00 of the next.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year leaves the Gregorian civil range.
    pub fn to_gregorian_date(&self) -> Result<Date, DateError> {
        let year = i32::from(self.year());
        new_year_civil_date(year)?
            .checked_add(Span::new().days(i64::from(self.days_since_new_year())))
            .map_err(|_| DateError::InvalidYear(i64::from(year)))
    }

    /// The Ethiopian day paired with a Gregorian civil day
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the Ethiopian year would fall outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn from_gregorian_date(date: Date) -> Result<Self, DateError> {
        let gregorian_year = i32::from(date.year());

        // Meskerem 1 of the Ethiopian year that begins in this Gregorian year
        let (_, threshold_month, threshold_day) =
            new_year_gregorian_date(gregorian_year - NEW_YEAR_GREGORIAN_OFFSET);
        let on_or_after_new_year = (date.month().unsigned_abs(), date.day().unsigned_abs())
            >= (threshold_month, threshold_day);

        let year = gregorian_year - NEW_YEAR_GREGORIAN_OFFSET - 1 + i32::from(on_or_after_new_year);
        let invalid = || DateError::InvalidYear(i64::from(year));

        let days_since = date
            .since(new_year_civil_date(year)?)
            .map_err(|_| invalid())?
            .get_days();
        let days_since = u16::try_from(days_since).map_err(|_| invalid())?;

        let month = u8::try_from(days_since / u16::from(DAYS_IN_REGULAR_MONTH) + 1)
            .map_err(|_| invalid())?;
        let day = u8::try_from(days_since % u16::from(DAYS_IN_REGULAR_MONTH) + 1)
            .map_err(|_| invalid())?;
        let year = u16::try_from(year).map_err(|_| invalid())?;

        Self::new(year, month, day)
    }
}

impl EthiopianDateTime {
    /// Shorthand for [`to_gregorian_instant`]
    ///
    /// # Errors
    /// See [`to_gregorian_instant`].
    pub fn to_instant(&self) -> Result<Timestamp, DateError> {
        to_gregorian_instant(self)
    }

    /// Shorthand for [`to_ethiopian_date_time`]
    ///
    /// # Errors
    /// See [`to_ethiopian_date_time`].
    pub fn from_instant(instant: Timestamp) -> Result<Self, DateError> {
        to_ethiopian_date_time(instant)
    }

    /// The current Ethiopian date-time from the system clock
    ///
    /// # Errors
    /// Returns `DateError::InstantOutOfRange` if the system clock is outside the supported range.
    pub fn now() -> Result<Self, DateError> {
        to_ethiopian_date_time(Timestamp::now())
    }
}

impl TryFrom<Timestamp> for EthiopianDateTime {
    type Error = DateError;

    fn try_from(instant: Timestamp) -> Result<Self, Self::Error> {
        to_ethiopian_date_time(instant)
    }
}

impl TryFrom<EthiopianDateTime> for Timestamp {
    type Error = DateError;

    fn try_from(date_time: EthiopianDateTime) -> Result<Self, Self::Error> {
        to_gregorian_instant(&date_time)
    }
}
