//! Conversions between year, month, and day components and a continuous
//! day index.
//!
//! The calendar here counts every fourth year as a leap year, and makes no
//! exception for centuries. Between 1901 and 2099 it agrees with the
//! Gregorian calendar; outside that span it only has to agree with itself,
//! which it does for every day of the 10,000 years it supports.
//!
//! Months are **zero-based** at this level (January is month 0), because
//! they index straight into the cumulative-days tables. Everything above
//! the codec talks in one-based months.

use crate::error::{Error, Result};
use crate::util::RangeExt;


/// The earliest year that can be turned into a day index.
pub const MIN_YEAR: i64 = 0;

/// The latest year that can be turned into a day index.
pub const MAX_YEAR: i64 = 9999;

/// Number of days in a four-year cycle, one of which is a leap year.
pub(crate) const DAYS_IN_4Y: i64 = 365 * 4 + 1;

/// Number of seconds in a day. Leap seconds are ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of seconds in an hour.
pub(crate) const SECONDS_IN_HOUR: i64 = 3600;

/// Number of seconds in a minute.
pub(crate) const SECONDS_IN_MINUTE: i64 = 60;

/// The count of days from the start of year 0 that lands on day index 0.
///
/// Day index 0 is the second of January 1900 as this calendar sees it. The
/// calendar has a 29th of February in 1900, so that is the same day the
/// Gregorian calendar calls the first of January.
pub(crate) const DAY_INDEX_OFFSET: i64 = (1900 * DAYS_IN_4Y) / 4 + 1;

/// Added to a day index before taking it modulo 7, so that the weekday
/// comes out with Sunday as 0.
pub(crate) const WEEK_OFFSET: i64 = -6;

/// Day index of the first of January 1970, the Unix epoch.
pub(crate) const UNIX_EPOCH_DAY: i64 = (70 * DAYS_IN_4Y) / 4;


/// Days elapsed before the start of each month in a common year. Entry 0
/// is the start of the year and entry 12 is the length of the whole year.
pub const NORMAL_CUM_DAYS: [i64; 13] = [
      0,  31,  59,  90, 120, 151, 181,
    212, 243, 273, 304, 334, 365,
];

/// Days elapsed before the start of each month in a leap year.
pub const LEAP_CUM_DAYS: [i64; 13] = [
      0,  31,  60,  91, 121, 152, 182,
    213, 244, 274, 305, 335, 366,
];


/// Returns whether the given year is a leap year.
///
/// ```
/// use interval::cal::codec::is_leap_year;
///
/// assert!(is_leap_year(2012));
/// assert!(!is_leap_year(2013));
/// assert!(is_leap_year(1900));  // no century exception
/// ```
pub const fn is_leap_year(year: i64) -> bool {
    year % 4 == 0
}

/// Returns the cumulative-days table that applies to the given year.
pub(crate) const fn cum_days(year: i64) -> &'static [i64; 13] {
    if is_leap_year(year) { &LEAP_CUM_DAYS } else { &NORMAL_CUM_DAYS }
}

/// Number of days in the given zero-based month, with no checking.
pub(crate) const fn month_length(year: i64, month0: i8) -> i64 {
    let table = cum_days(year);
    table[month0 as usize + 1] - table[month0 as usize]
}

/// Day index of the first of January of the given year, with no range
/// check. The floor division keeps this valid for negative years too.
pub(crate) const fn year_start_unchecked(year: i64) -> i64 {
    (year * DAYS_IN_4Y + 3).div_euclid(4) - DAY_INDEX_OFFSET
}

/// Day index of a year, zero-based month, and day, with no checking.
pub(crate) const fn ymd_unchecked(year: i64, month0: i8, day: i8) -> i64 {
    year_start_unchecked(year) + cum_days(year)[month0 as usize] + (day as i64 - 1)
}

/// The year that a day index falls in.
pub(crate) const fn year_of_day(day_index: i64) -> i64 {
    ((day_index + DAY_INDEX_OFFSET) * 4).div_euclid(DAYS_IN_4Y)
}

/// Day index of the first day of a month, given its month number
/// (`year * 12 + month0`).
pub(crate) const fn month_number_start(number: i64) -> i64 {
    ymd_unchecked(number.div_euclid(12), number.rem_euclid(12) as i8, 1)
}

/// Fails unless the year lies in the supported span.
pub(crate) fn check_year(year: i64) -> Result<()> {
    if year.is_within(MIN_YEAR .. MAX_YEAR + 1) {
        Ok(())
    }
    else {
        Err(Error::Invalid(format!("Year {} not in the range {} to {}", year, MIN_YEAR, MAX_YEAR)))
    }
}

fn check_month0(month0: i8) -> Result<()> {
    if month0.is_within(0 .. 12) {
        Ok(())
    }
    else {
        Err(Error::Invalid(format!("Month index {} not in the range 0 to 11", month0)))
    }
}

/// Returns the day index of the first of January of the given year.
///
/// Years outside 0 to 9999 are rejected.
pub fn year_start_index(year: i64) -> Result<i64> {
    check_year(year)?;
    Ok(year_start_unchecked(year))
}

/// Returns the number of days in the given zero-based month.
///
/// ```
/// use interval::cal::codec::days_in_month;
///
/// assert_eq!(days_in_month(2012, 1), Ok(29));
/// assert_eq!(days_in_month(2013, 1), Ok(28));
/// assert!(days_in_month(2013, 12).is_err());
/// ```
pub fn days_in_month(year: i64, month0: i8) -> Result<i8> {
    check_month0(month0)?;
    Ok(month_length(year, month0) as i8)
}

/// Returns the day index of the given year, zero-based month, and day.
///
/// The day has to exist in that month, so the 29th of February is only
/// accepted in a leap year.
pub fn ymd_to_day_index(year: i64, month0: i8, day: i8) -> Result<i64> {
    check_year(year)?;
    check_month0(month0)?;

    let length = month_length(year, month0);
    if month0 == 1 && day == 29 && !is_leap_year(year) {
        return Err(Error::Invalid(format!("29th February when {} is not a leap year", year)));
    }
    if !i64::from(day).is_within(1 .. length + 1) {
        return Err(Error::Invalid(format!("Day {} not in the range 1 to {}", day, length)));
    }

    Ok(ymd_unchecked(year, month0, day))
}

/// Splits a day index into its year, zero-based month, and day.
///
/// The year comes from the four-year cycle directly. The month is found by
/// scanning the year’s cumulative-days table for the first boundary that
/// the day of the year has not yet reached.
pub fn day_index_to_ymd(day_index: i64) -> (i64, i8, i8) {
    let year = year_of_day(day_index);
    let table = cum_days(year);
    let day_of_year = day_index - year_start_unchecked(year);

    let next = table.iter()
                    .position(|&days| day_of_year < days)
                    .unwrap_or(12);

    let month0 = next - 1;
    let day = day_of_year - table[month0] + 1;
    (year, month0 as i8, day as i8)
}
