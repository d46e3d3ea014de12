use serde::{Deserialize, Serialize};

use crate::EthiopianDateTime;
use crate::locale::{Locale, UnsupportedLocale, WeekdayStyle};
use crate::prelude::*;
use crate::types::{ClockTime, Meridiem};

/// Clock style used when the time of day is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `HH:MM:SS`, hours 00-23
    #[default]
    #[display(fmt = "24h")]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `HH:MM:SS AM|PM`, hours 01-12
    #[display(fmt = "12h")]
    #[serde(rename = "12h")]
    TwelveHour,
}

/// Options for [`format`].
///
/// Defaults to English, 24-hour clock, long weekday names and no time segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    locale:        Locale,
    time_format:   TimeFormat,
    include_time:  bool,
    weekday_style: WeekdayStyle,
    fallback:      Option<UnsupportedLocale>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.fallback = None;
        self
    }

    /// Sets the locale from a tag such as `"am"`.
    /// Unsupported tags select English and are kept as a [`fallback`](Self::fallback) diagnostic.
    #[must_use]
    pub fn locale_tag(mut self, tag: &str) -> Self {
        let (locale, fallback) = Locale::resolve(tag);
        self.locale = locale;
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub const fn time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    #[must_use]
    pub const fn include_time(mut self, include_time: bool) -> Self {
        self.include_time = include_time;
        self
    }

    #[must_use]
    pub const fn weekday_style(mut self, weekday_style: WeekdayStyle) -> Self {
        self.weekday_style = weekday_style;
        self
    }

    /// The locale actually used for rendering
    pub const fn resolved_locale(&self) -> Locale {
        self.locale
    }

    /// The unsupported tag replaced by English, if any
    pub const fn fallback(&self) -> Option<&UnsupportedLocale> {
        self.fallback.as_ref()
    }
}

/// Renders `"<Weekday>, <DD> <Month> <Year> EC"`, followed by the time of day
/// when the options ask for it.
///
/// The weekday is [`EthiopianDate::weekday`](crate::EthiopianDate::weekday), which equals the
/// weekday of the Gregorian day [`to_gregorian_instant`](crate::to_gregorian_instant) lands on.
///
/// ```
/// use ethiopic_calendar::{EthiopianDateTime, FormatOptions, TimeFormat, format};
///
/// let date_time = EthiopianDateTime::new(2016, 1, 1, 14, 30, 0).unwrap();
/// let options = FormatOptions::new()
///     .include_time(true)
///     .time_format(TimeFormat::TwelveHour);
/// assert_eq!(format(&date_time, &options), "Tuesday, 01 September 2016 EC 02:30:00 PM");
/// ```
pub fn format(date_time: &EthiopianDateTime, options: &FormatOptions) -> String {
    let date = date_time.date();
    let locale = options.locale;

    let weekday = locale.weekday_name(date.weekday(), options.weekday_style);
    let month = locale.month_name(date.month_typed());

    let mut out = format!("{weekday}, {:02} {month} {} EC", date.day(), date.year());
    if options.include_time {
        out.push(' ');
        out.push_str(&render_time(date_time.time(), options.time_format));
    }
    out
}

fn render_time(time: ClockTime, time_format: TimeFormat) -> String {
    match time_format {
        TimeFormat::TwentyFourHour => time.to_string(),
        TimeFormat::TwelveHour => {
            let (hour, meridiem): (u8, Meridiem) = time.twelve_hour();
            format!("{hour:02}:{:02}:{:02} {meridiem}", time.minute(), time.second())
        }
    }
}
