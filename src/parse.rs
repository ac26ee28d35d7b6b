//! Reading intervals from text.
//!
//! Each resolution has its own grammar. Years are exactly four digits.
//! Months are six compact digits (`201205`), or a year and a month either
//! side of a `-` or `/` in whichever order (`2012-05`, `05/2012`, `5/2012`).
//! Days are eight compact digits in day-month-year order (`02052012`), a
//! delimited day, month and year (`02-05-2012`, `2/5/2012`), or an ISO date.
//!
//! The ISO grammar reads back exactly what `Interval::iso` writes, and the
//! date part goes through the `iso8601` crate, so week dates and ordinal
//! dates are read as days as well.

use std::str::FromStr;

use iso8601::Date;
use tracing::debug;

use crate::cal::codec;
use crate::cal::Weekday;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::resolution::Resolution;
use crate::util::RangeExt;


impl Interval {

    /// Parses a year interval from exactly four digits.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// assert_eq!(Interval::parse_year(" 2012 "), Interval::y(2012));
    /// assert!(Interval::parse_year("212").is_err());
    /// ```
    pub fn parse_year(input: &str) -> Result<Self> {
        let text = input.trim();
        match digits(text, 4) {
            Some(year) => Interval::y(year),
            None       => Err(rejected(input, "year")),
        }
    }

    /// Parses a month interval.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// let may = Interval::ym(2012, 5);
    /// assert_eq!(Interval::parse_month("201205"), may);
    /// assert_eq!(Interval::parse_month("2012-05"), may);
    /// assert_eq!(Interval::parse_month("5/2012"), may);
    /// ```
    pub fn parse_month(input: &str) -> Result<Self> {
        let text = input.trim();

        if let Some(number) = digits(text, 6) {
            return Interval::ym(number / 100, (number % 100) as i8);
        }

        let (left, right) = match text.split_once(|c: char| c == '-' || c == '/') {
            Some(halves) => halves,
            None         => return Err(rejected(input, "month")),
        };

        let (year, month) = if left.len() == 4 { (left, right) } else { (right, left) };
        match (digits(year, 4), short_digits(month)) {
            (Some(year), Some(month)) => Interval::ym(year, month),
            _                         => Err(rejected(input, "month")),
        }
    }

    /// Parses a day interval.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// let date = Interval::ymd(2012, 5, 2);
    /// assert_eq!(Interval::parse_day("02052012"), date);
    /// assert_eq!(Interval::parse_day("02/05/2012"), date);
    /// assert_eq!(Interval::parse_day("2-5-2012"), date);
    /// assert_eq!(Interval::parse_day("2012-05-02"), date);
    /// assert!(Interval::parse_day("99999").is_err());
    /// ```
    pub fn parse_day(input: &str) -> Result<Self> {
        let text = input.trim();

        if let Some(number) = digits(text, 8) {
            let day = number / 1_000_000;
            let month = number / 10_000 % 100;
            return Interval::ymd(number % 10_000, month as i8, day as i8);
        }

        if text.len() == 10 && text.as_bytes()[4] == b'-' {
            return iso_date(input, text);
        }

        let delimiter = match text.find(|c: char| c == '-' || c == '/') {
            Some(pos) => &text[pos ..= pos],
            None      => return Err(rejected(input, "date")),
        };

        let mut parts = text.split(delimiter);
        let fields = (parts.next().and_then(short_digits),
                      parts.next().and_then(short_digits),
                      parts.next().and_then(|year| digits(year, 4)),
                      parts.next());

        match fields {
            (Some(day), Some(month), Some(year), None) => Interval::ymd(year, month, day),
            _ => Err(rejected(input, "date")),
        }
    }

    /// Parses any of the forms written by `Interval::iso`, at whichever
    /// resolution the text gives.
    ///
    /// ```
    /// use interval::{Interval, Resolution};
    ///
    /// let minute = Interval::parse_iso("2012-05-12T10:30").unwrap();
    /// assert_eq!(minute.resolution(), Resolution::Minute);
    /// assert_eq!(Interval::parse_iso("2015-W26-5"), Interval::ymd(2015, 6, 26));
    /// ```
    pub fn parse_iso(input: &str) -> Result<Self> {
        let text = input.trim();

        let (date, time) = match text.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None               => (text, None),
        };

        let day = match (date.len(), time) {
            (4, None) => return Interval::parse_year(date),
            (7, None) if date.as_bytes()[4] == b'-' => return Interval::parse_month(date),
            _ => iso_date(input, date)?,
        };

        let time = match time {
            Some(time) => time,
            None       => return Ok(day),
        };

        let mut fields = time.split(':');
        let (hour, minute, second) = (fields.next(), fields.next(), fields.next());
        if fields.next().is_some() {
            return Err(rejected(input, "time"));
        }

        let two = |field: &str| digits(field, 2).map(|n| n as i8).ok_or_else(|| rejected(input, "time"));
        let (y, m, d) = (day.year(), day.month(), day.day());
        match (hour, minute, second) {
            (Some(h), None, None)       => Interval::ymd_h(y, m, d, two(h)?),
            (Some(h), Some(n), None)    => Interval::ymd_hm(y, m, d, two(h)?, two(n)?),
            (Some(h), Some(n), Some(s)) => Interval::ymd_hms(y, m, d, two(h)?, two(n)?, two(s)?),
            _ => Err(rejected(input, "time")),
        }
    }

    /// Parses an interval at the given resolution, using that resolution’s
    /// grammar for years, months and days, and the ISO grammar for finer
    /// resolutions.
    pub fn parse(resolution: Resolution, input: &str) -> Result<Self> {
        match resolution {
            Resolution::Year   => Interval::parse_year(input),
            Resolution::Month  => Interval::parse_month(input),
            Resolution::Day    => Interval::parse_day(input),
            _ => {
                let interval = Interval::parse_iso(input)?;
                if interval.resolution() == resolution {
                    Ok(interval)
                }
                else {
                    debug!(input, found = %interval.resolution(), wanted = %resolution, "Rejected interval at the wrong resolution");
                    Err(Error::Invalid(format!("'{}' is not a valid {}", input, resolution)))
                }
            }
        }
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Interval::parse_iso(input)
    }
}


fn rejected(input: &str, what: &str) -> Error {
    debug!(input, what, "Rejected interval text");
    Error::Invalid(format!("'{}' is not a valid {}", input, what))
}

/// Reads a field of exactly `count` ASCII digits.
fn digits(text: &str, count: usize) -> Option<i64> {
    if text.len() == count && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    }
    else {
        None
    }
}

/// Reads a field of one or two ASCII digits, such as a day or a month.
fn short_digits(text: &str) -> Option<i8> {
    if text.len().is_within(1 .. 3) && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    }
    else {
        None
    }
}

/// Reads an ISO calendar, week, or ordinal date as a day interval.
///
/// The `iso8601` parser stops at the end of the date it recognises, so the
/// fields it returns have to write back to the whole of the text.
fn iso_date(input: &str, text: &str) -> Result<Interval> {
    let fields = iso8601::date(text).map_err(|_| rejected(input, "date"))?;

    let canonical = match fields {
        Date::YMD { year, month, day }  => format!("{:04}-{:02}-{:02}", year, month, day),
        Date::Week { year, ww, d }      => format!("{:04}-W{:02}-{}", year, ww, d),
        Date::Ordinal { year, ddd }     => format!("{:04}-{:03}", year, ddd),
    };
    if canonical != text {
        return Err(rejected(input, "date"));
    }

    match fields {
        Date::YMD { year, month, day } => {
            Interval::ymd(i64::from(year), month as i8, day as i8)
        }
        Date::Week { year, ww, d } => {
            if !i64::from(ww).is_within(1 .. 54) {
                return Err(Error::Invalid(format!("Week {} not in the range 1 to 53", ww)));
            }

            let year = i64::from(year);
            let weekday = Weekday::from_monday_as_one(d as i8)?;
            let start = codec::year_start_index(year)?;

            // Week 1 is the week holding the fourth of January.
            let jan_4 = Weekday::of_day_index(codec::ymd_unchecked(year, 0, 4));
            let correction = i64::from(jan_4.days_from_monday_as_one()) + 3;

            // A week belongs to the year that holds its Thursday.
            let thursday = 7 * i64::from(ww) + 4 - correction;
            if thursday > codec::cum_days(year)[12] {
                return Err(Error::Invalid(format!("Week {} not in the range 1 to {}", ww, ww - 1)));
            }
            let ordinal = 7 * i64::from(ww) + i64::from(weekday.days_from_monday_as_one()) - correction;
            day_of_year(year, start + ordinal - 1)
        }
        Date::Ordinal { year, ddd } => {
            let year = i64::from(year);
            let start = codec::year_start_index(year)?;
            let length = codec::cum_days(year)[12];
            if !i64::from(ddd).is_within(1 .. length + 1) {
                return Err(Error::Invalid(format!("Day {} not in the range 1 to {}", ddd, length)));
            }
            day_of_year(year, start + i64::from(ddd) - 1)
        }
    }
}

/// A day interval for a day index worked out from a year, which either
/// side of that year has to stay within the supported span.
fn day_of_year(year: i64, day_index: i64) -> Result<Interval> {
    let (actual_year, month0, day) = codec::day_index_to_ymd(day_index);
    if actual_year != year {
        codec::check_year(actual_year)?;
    }
    Interval::ymd(actual_year, month0 + 1, day)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_fields() {
        assert_eq!(digits("0042", 4), Some(42));
        assert_eq!(digits("+042", 4), None);
        assert_eq!(digits("42", 4), None);
        assert_eq!(short_digits("7"), Some(7));
        assert_eq!(short_digits("007"), None);
        assert_eq!(short_digits(""), None);
    }

    #[test]
    fn mixed_delimiters() {
        assert!(Interval::parse_day("02-05/2012").is_err());
    }

    #[test]
    fn ordinal_dates() {
        assert_eq!(Interval::parse_iso("2012-060"), Interval::ymd(2012, 2, 29));
        assert_eq!(Interval::parse_iso("2013-365"), Interval::ymd(2013, 12, 31));
        assert!(Interval::parse_iso("2013-366").is_err());
    }

    #[test]
    fn week_dates() {
        assert_eq!(Interval::parse_iso("2015-W01-1"), Interval::ymd(2014, 12, 29));
        assert_eq!(Interval::parse_iso("2015-W53-7"), Interval::ymd(2016, 1, 3));
        assert_eq!(Interval::parse_iso("2020-W53-5"), Interval::ymd(2021, 1, 1));
    }

    #[test]
    fn week_53_only_in_long_years() {
        assert_eq!(Interval::parse_iso("2014-W53-1"), Err(Error::Invalid("Week 53 not in the range 1 to 52".into())));
        assert!(Interval::parse_iso("2013-W53-1").is_err());
        assert_eq!(Interval::parse_iso("2014-W52-7"), Interval::ymd(2014, 12, 28));
    }

    #[test]
    fn rejection_message() {
        assert_eq!(Interval::parse_day("99999"), Err(Error::Invalid("'99999' is not a valid date".into())));
    }
}
