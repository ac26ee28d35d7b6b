//! The interval value type.

use std::cmp::Ordering;
use std::fmt;

use crate::cal::codec::{self, SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE, UNIX_EPOCH_DAY, WEEK_OFFSET};
use crate::cal::{Weekday, YearMonth};
use crate::error::{Error, Result};
use crate::fmt::Iso;
use crate::instant::Instant;
use crate::resolution::Resolution;
use crate::util::RangeExt;


/// Seconds between the start of the calendar’s day index and the Unix
/// epoch.
const UNIX_OFFSET: i64 = UNIX_EPOCH_DAY * SECONDS_IN_DAY;


/// An **interval** is a point on the timeline specified at one of six
/// resolutions: a whole year, a month, a day, an hour, a minute, or a
/// single second.
///
/// Internally, this is a count of seconds from the calendar’s epoch and a
/// resolution tag. The count always lands on a boundary of its resolution:
/// a month interval sits on the first instant of its month, an hour
/// interval on a multiple of 3600 seconds, and so on. The interval covers
/// the span from that instant up to (but not including) its *upper limit*.
///
/// Two intervals are only equal if their resolutions match as well as
/// their indices, so the first of June and the month of June are different
/// values. Ordering only looks at the index, and two intervals that start
/// together at different resolutions are not ordered at all; use
/// `compare_to` to sort a mixture.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Interval {
    index: i64,
    resolution: Resolution,
}

impl Interval {

    /// The value that stands for “no value”: the first of January in year
    /// 0, at day resolution. It displays as an empty string.
    pub const GENESIS: Interval = Interval::at_index(codec::year_start_unchecked(0) * SECONDS_IN_DAY, Resolution::Day);

    pub(crate) const fn at_index(index: i64, resolution: Resolution) -> Self {
        Self { index, resolution }
    }

    /// An interval at an index worked out by arithmetic, which has neither
    /// overflowed nor left the supported years.
    fn checked_at(index: Option<i64>, resolution: Resolution) -> Result<Self> {
        let index = index.ok_or_else(|| {
            Error::Invalid(format!("Interval outside the years {} to {}", codec::MIN_YEAR, codec::MAX_YEAR))
        })?;

        codec::check_year(codec::year_of_day(index.div_euclid(SECONDS_IN_DAY)))?;
        Ok(Self::at_index(index, resolution))
    }

    /// Creates a year interval.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// assert_eq!(Interval::y(2012).unwrap().iso().to_string(), "2012");
    /// assert!(Interval::y(10000).is_err());
    /// ```
    pub fn y(year: i64) -> Result<Self> {
        let days = codec::year_start_index(year)?;
        Ok(Self::at_index(days * SECONDS_IN_DAY, Resolution::Year))
    }

    /// Creates a month interval. The month is in the range 1 to 12.
    pub fn ym(year: i64, month: i8) -> Result<Self> {
        let days = codec::ymd_to_day_index(year, month_zero(month)?, 1)?;
        Ok(Self::at_index(days * SECONDS_IN_DAY, Resolution::Month))
    }

    /// Creates a day interval. The month is in the range 1 to 12, and the
    /// day has to exist in that month.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// assert!(Interval::ymd(2012, 2, 29).is_ok());
    /// assert!(Interval::ymd(2013, 2, 29).is_err());
    /// assert!(Interval::ymd(2012, 4, 31).is_err());
    /// ```
    pub fn ymd(year: i64, month: i8, day: i8) -> Result<Self> {
        let days = codec::ymd_to_day_index(year, month_zero(month)?, day)?;
        Ok(Self::at_index(days * SECONDS_IN_DAY, Resolution::Day))
    }

    /// Creates an hour interval. The hour is in the range 0 to 23.
    pub fn ymd_h(year: i64, month: i8, day: i8, hour: i8) -> Result<Self> {
        let base = Self::ymd(year, month, day)?.index;
        let hours = time_field("Hour", hour, 24)?;
        Ok(Self::at_index(base + hours * SECONDS_IN_HOUR, Resolution::Hour))
    }

    /// Creates a minute interval.
    pub fn ymd_hm(year: i64, month: i8, day: i8, hour: i8, minute: i8) -> Result<Self> {
        let base = Self::ymd_h(year, month, day, hour)?.index;
        let minutes = time_field("Minute", minute, 60)?;
        Ok(Self::at_index(base + minutes * SECONDS_IN_MINUTE, Resolution::Minute))
    }

    /// Creates a second interval.
    pub fn ymd_hms(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self> {
        let base = Self::ymd_hm(year, month, day, hour, minute)?.index;
        let seconds = time_field("Second", second, 60)?;
        Ok(Self::at_index(base + seconds, Resolution::Second))
    }

    /// Creates an interval at the given resolution that contains the given
    /// instant, by rounding the instant down to a boundary of that
    /// resolution.
    ///
    /// Instants outside the years 0 to 9999 are rejected.
    pub fn from_instant(instant: Instant, resolution: Resolution) -> Result<Self> {
        let second = Self::checked_at(instant.seconds().checked_add(UNIX_OFFSET), Resolution::Second)?;
        Ok(Self::at_index(resolution.truncate(second.index), resolution))
    }

    /// The current second, in UTC.
    pub fn now() -> Self {
        Self::from_clock(Resolution::Second)
    }

    /// The current day, in UTC.
    pub fn today() -> Self {
        Self::from_clock(Resolution::Day)
    }

    // The system clock reads well inside the supported years.
    fn from_clock(resolution: Resolution) -> Self {
        let index = Instant::now().seconds() + UNIX_OFFSET;
        Self::at_index(resolution.truncate(index), resolution)
    }

    /// The instant at the start of this interval.
    pub fn to_instant(&self) -> Instant {
        Instant::at(self.index - UNIX_OFFSET)
    }

    /// The number of seconds from the calendar’s epoch to the start of
    /// this interval.
    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The exclusive end of the span this interval covers, as an index.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// let may = Interval::ym(2012, 5).unwrap();
    /// let june_1 = Interval::ymd(2012, 6, 1).unwrap();
    /// assert_eq!(may.upper_limit(), june_1.index());
    /// ```
    pub fn upper_limit(&self) -> i64 {
        self.resolution.upper_limit(self.index)
    }

    /// Whether this is the “no value” sentinel.
    pub fn is_genesis(&self) -> bool {
        *self == Self::GENESIS
    }

    /// The number of whole days from the calendar’s epoch to the day this
    /// interval starts on.
    pub fn day_index(&self) -> i64 {
        self.index.div_euclid(SECONDS_IN_DAY)
    }

    fn components(&self) -> (i64, i8, i8) {
        codec::day_index_to_ymd(self.day_index())
    }

    fn time_of_day(&self) -> i64 {
        self.index.rem_euclid(SECONDS_IN_DAY)
    }

    pub fn year(&self) -> i64 {
        codec::year_of_day(self.day_index())
    }

    /// The month, from 1 to 12.
    pub fn month(&self) -> i8 {
        self.components().1 + 1
    }

    /// The day of the month, from 1 to 31.
    pub fn day(&self) -> i8 {
        self.components().2
    }

    pub fn hour(&self) -> i8 {
        self.index.div_euclid(SECONDS_IN_HOUR).rem_euclid(24) as i8
    }

    pub fn minute(&self) -> i8 {
        self.index.div_euclid(SECONDS_IN_MINUTE).rem_euclid(60) as i8
    }

    pub fn second(&self) -> i8 {
        self.index.rem_euclid(60) as i8
    }

    /// The number of days in the month this interval starts in.
    pub fn days_in_month(&self) -> i8 {
        let (year, month0, _) = self.components();
        codec::month_length(year, month0) as i8
    }

    /// The month this interval starts in.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_number(self.year_month_number())
    }

    /// The month number this interval starts in, `year * 12 + month - 1`.
    pub fn year_month_number(&self) -> i64 {
        let (year, month0, _) = self.components();
        year * 12 + i64::from(month0)
    }

    /// The day of the week this interval starts on.
    pub fn weekday(&self) -> Weekday {
        Weekday::of_day_index(self.day_index())
    }

    /// The number of Sunday-to-Saturday weeks from the calendar’s epoch to
    /// the week this interval starts in.
    pub fn week(&self) -> i64 {
        (self.day_index() + WEEK_OFFSET).div_euclid(7)
    }

    /// The number of seconds from the other interval’s start to this one’s.
    pub fn seconds_since(&self, other: &Interval) -> i64 {
        self.index - other.index
    }

    /// Whether this interval starts before the other one starts.
    pub fn before(&self, other: &Interval) -> bool {
        self.index < other.index
    }

    /// Whether this interval *ends* after the other one ends.
    ///
    /// This is not the opposite of `before`. A month and the last day of
    /// that month end together, so neither is after the other, while the
    /// month is still before the day.
    pub fn after(&self, other: &Interval) -> bool {
        self.upper_limit() > other.upper_limit()
    }

    /// Orders intervals by where they start, whatever their resolutions.
    pub fn compare_to(&self, other: &Interval) -> Ordering {
        self.index.cmp(&other.index)
    }

    /// Returns whether this interval’s span covers all of the other one’s.
    ///
    /// The other interval has to be at this interval’s resolution or a finer
    /// one: asking a day whether it contains a month is an error.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// let year = Interval::y(2012).unwrap();
    /// assert_eq!(year.contains(&Interval::ymd(2012, 12, 31).unwrap()), Ok(true));
    /// assert_eq!(year.contains(&Interval::ymd(2013, 1, 1).unwrap()), Ok(false));
    /// assert!(Interval::ymd(2012, 6, 5).unwrap().contains(&Interval::ym(2012, 6).unwrap()).is_err());
    /// ```
    pub fn contains(&self, other: &Interval) -> Result<bool> {
        if self.resolution.contains(other.resolution) {
            Ok(self.index <= other.index && other.upper_limit() <= self.upper_limit())
        }
        else {
            Err(Error::IncompatibleResolution { container: self.resolution, target: other.resolution })
        }
    }

    fn require_days(&self, operation: &'static str) -> Result<()> {
        if self.resolution.has_days() {
            Ok(())
        }
        else {
            Err(Error::Unsupported { operation, resolution: self.resolution })
        }
    }

    /// Moves this interval to another day, keeping its time of day. Year and
    /// month intervals become day intervals.
    fn with_day_index(&self, day_index: i64) -> Self {
        if self.resolution.has_days() {
            Self::at_index(day_index * SECONDS_IN_DAY + self.time_of_day(), self.resolution)
        }
        else {
            Self::at_index(day_index * SECONDS_IN_DAY, Resolution::Day)
        }
    }

    /// Moves this interval forward by a number of whole days.
    ///
    /// Year and month intervals cannot be moved by days, and no interval
    /// can be moved out of the years 0 to 9999.
    pub fn plus_days(&self, days: i64) -> Result<Self> {
        self.require_days("plus_days")?;
        self.shift_days(Some(days))
    }

    /// Moves this interval back by a number of whole days.
    pub fn minus_days(&self, days: i64) -> Result<Self> {
        self.require_days("minus_days")?;
        self.shift_days(days.checked_neg())
    }

    fn shift_days(&self, days: Option<i64>) -> Result<Self> {
        let index = days.and_then(|d| d.checked_mul(SECONDS_IN_DAY))
                        .and_then(|seconds| self.index.checked_add(seconds));
        Self::checked_at(index, self.resolution)
    }

    /// Moves to the same point in a different year.
    ///
    /// The 29th of February turns into the 28th when the target year is not
    /// a leap year.
    pub fn add_year(&self, adjust: i64) -> Result<Self> {
        let year = self.year() + adjust;
        match self.resolution {
            Resolution::Year   => Self::y(year),
            Resolution::Month  => Self::ym(year, self.month()),
            _ => {
                codec::check_year(year)?;
                let (_, month0, day) = self.components();
                let day = i64::from(day).min(codec::month_length(year, month0)) as i8;
                Ok(self.with_day_index(codec::ymd_unchecked(year, month0, day)))
            }
        }
    }

    /// Moves by a number of whole months, then sets the day of the month.
    ///
    /// A positive day counts from the start of the target month, and a
    /// negative one from its end, so `-1` picks the last day. Month
    /// intervals become day intervals.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// let date = Interval::ymd(2012, 1, 31).unwrap();
    /// assert_eq!(date.add_month_day(1, -1), Interval::ymd(2012, 2, 29));
    /// assert_eq!(date.add_month_day(-2, 15), Interval::ymd(2011, 11, 15));
    /// ```
    pub fn add_month_day(&self, month_adjust: i64, day: i8) -> Result<Self> {
        if self.resolution == Resolution::Year {
            return Err(Error::Unsupported { operation: "add_month_day", resolution: self.resolution });
        }

        let target = self.year_month().add_months(month_adjust);
        let day_index = resolve_day(target, day)?;
        Ok(self.with_day_index(day_index))
    }

    /// Sets the day within this interval’s month. The day is in the range 1
    /// to 31, or -1 to -31 to count back from the end of the month.
    pub fn set_day(&self, day: i8) -> Result<Self> {
        if self.resolution == Resolution::Year {
            return Err(Error::Unsupported { operation: "set_day", resolution: self.resolution });
        }

        let day_index = resolve_day(self.year_month(), day)?;
        Ok(self.with_day_index(day_index))
    }

    /// Sets the month and day, keeping the year and any time of day.
    ///
    /// Year and month intervals become day intervals. Fails if the month is
    /// not in the range 1 to 12, if the day does not exist in that month,
    /// or if it is the 29th of February outside a leap year.
    pub fn set_month_day(&self, month: i8, day: i8) -> Result<Self> {
        let month0 = month_zero(month)?;
        let longest = codec::month_length(0, month0);
        if !i64::from(day).is_within(1 .. longest + 1) {
            return Err(Error::Invalid(format!("Day {} not in the range 1 to {}", day, longest)));
        }

        let year = self.year();
        if month0 == 1 && day == 29 && !codec::is_leap_year(year) {
            return Err(Error::Invalid(format!("29th February when {} is not a leap year", year)));
        }

        Ok(self.with_day_index(codec::ymd_unchecked(year, month0, day)))
    }

    /// Finds the first occurrence of the weekday on or after the start of
    /// the given month.
    pub fn set_month_weekday(&self, year_month: YearMonth, weekday: Weekday) -> Result<Self> {
        codec::check_year(year_month.year())?;

        let start = year_month.start_day_index();
        let first = Weekday::of_day_index(start);
        let offset = (weekday.number() - first.number()).rem_euclid(7);
        Ok(self.with_day_index(start + i64::from(offset)))
    }

    /// Rounds back to midnight on the most recent Sunday.
    pub fn start_of_week(&self) -> Result<Self> {
        self.require_days("start_of_week")?;

        let sunday = self.day_index() - i64::from(self.weekday().number());
        Self::checked_at(Some(sunday * SECONDS_IN_DAY), self.resolution)
    }

    /// The Sunday that starts the given week, counting weeks the way
    /// `week` does.
    ///
    /// ```
    /// use interval::Interval;
    ///
    /// let day = Interval::ymd(2012, 5, 12).unwrap();
    /// assert_eq!(Interval::from_week(day.week()), Interval::ymd(2012, 5, 6));
    /// ```
    pub fn from_week(week: i64) -> Result<Self> {
        Self::from_week_weekday(week, Weekday::Sunday)
    }

    /// The given day of the given week.
    pub fn from_week_weekday(week: i64, weekday: Weekday) -> Result<Self> {
        let day_index = week.checked_mul(7)
                            .and_then(|days| days.checked_add(i64::from(weekday.number()) - WEEK_OFFSET));
        let index = day_index.and_then(|d| d.checked_mul(SECONDS_IN_DAY));
        Self::checked_at(index, Resolution::Day)
    }

    /// Converts to another resolution.
    ///
    /// Widening always works, and gives the period containing this one.
    /// Narrowing gives the first instant of this interval, which only makes
    /// sense when there is a day to start from: a year or a month cannot be
    /// narrowed to a day or anything finer.
    pub fn to_resolution(&self, resolution: Resolution) -> Result<Self> {
        if resolution <= self.resolution {
            Ok(Self::at_index(resolution.truncate(self.index), resolution))
        }
        else if self.resolution.has_days() {
            Ok(Self::at_index(self.index, resolution))
        }
        else {
            Err(Error::Unsupported { operation: "narrowing", resolution: self.resolution })
        }
    }

    /// The year this interval starts in, as a year interval.
    pub fn to_year(&self) -> Self {
        Self::at_index(Resolution::Year.truncate(self.index), Resolution::Year)
    }

    /// The month this interval starts in. Fails for year intervals.
    pub fn to_month(&self) -> Result<Self> {
        self.to_resolution(Resolution::Month)
    }

    /// The day this interval starts on. Fails for year and month intervals.
    pub fn to_day(&self) -> Result<Self> {
        self.to_resolution(Resolution::Day)
    }

    /// Returns a value that displays this interval in ISO-8601 form,
    /// truncated to its resolution: `2012`, `2012-05`, `2012-05-12`,
    /// `2012-05-12T10`, `2012-05-12T10:30`, or `2012-05-12T10:30:15`.
    pub fn iso(&self) -> Iso {
        Iso(*self)
    }

    pub fn to_iso_string(&self) -> String {
        self.iso().to_string()
    }
}

fn month_zero(month: i8) -> Result<i8> {
    if month.is_within(1 .. 13) {
        Ok(month - 1)
    }
    else {
        Err(Error::Invalid(format!("Month {} not in the range 1 to 12", month)))
    }
}

fn time_field(name: &str, value: i8, limit: i8) -> Result<i64> {
    if value.is_within(0 .. limit) {
        Ok(i64::from(value))
    }
    else {
        Err(Error::Invalid(format!("{} {} not in the range 0 to {}", name, value, limit - 1)))
    }
}

/// Day index of a day of a month, where negative days count back from the
/// month’s last day.
fn resolve_day(year_month: YearMonth, day: i8) -> Result<i64> {
    codec::check_year(year_month.year())?;

    let length = i64::from(year_month.day_count());
    let day = i64::from(day);
    let offset = if day.is_within(1 .. length + 1) { day - 1 }
            else if (-day).is_within(1 .. length + 1) { length + day }
            else {
                return Err(Error::Invalid(format!("Day {} not in the range 1 to {} or -1 to -{}", day, length, length)));
            };

    Ok(year_month.start_day_index() + offset)
}

/// Compares by index. Intervals at the same index but different
/// resolutions are unequal, and so are not ordered either.
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.index.cmp(&other.index) {
            Ordering::Equal if self.resolution != other.resolution => None,
            ordering => Some(ordering),
        }
    }
}

/// Displays the interval as `dd/mm/yyyy`, or as nothing at all for the
/// genesis value.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_genesis() {
            return Ok(());
        }

        let (year, month0, day) = self.components();
        write!(f, "{:02}/{:02}/{:04}", day, month0 + 1, year)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Interval({})", self.iso())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn genesis() {
        let genesis = Interval::GENESIS;
        assert!(genesis.is_genesis());
        assert_eq!(genesis, Interval::ymd(0, 1, 1).unwrap());
        assert_eq!(genesis.to_string(), "");
        assert!(genesis.before(&Interval::ymd(0, 1, 2).unwrap()));
        assert!(!Interval::y(0).unwrap().is_genesis());
    }

    #[test]
    fn alignment() {
        let hour = Interval::ymd_h(2012, 5, 12, 13).unwrap();
        assert_eq!(hour.index() % SECONDS_IN_HOUR, 0);
        assert_eq!(hour.to_resolution(Resolution::Month).unwrap(), Interval::ym(2012, 5).unwrap());
    }

    #[test]
    fn partial_ordering() {
        let day = Interval::ymd(2012, 6, 1).unwrap();
        let month = Interval::ym(2012, 6).unwrap();
        assert_eq!(day.partial_cmp(&month), None);
        assert_eq!(day.compare_to(&month), Ordering::Equal);
        assert!(Interval::ymd(2012, 5, 31).unwrap() < month);
    }

    #[test]
    fn debug() {
        let date = Interval::ymd_hm(2009, 2, 13, 23, 31).unwrap();
        assert_eq!(format!("{:?}", date), "Interval(2009-02-13T23:31)");
    }

    #[test]
    fn time_fields() {
        assert!(Interval::ymd_h(2012, 5, 12, 24).is_err());
        assert!(Interval::ymd_hm(2012, 5, 12, 23, 60).is_err());
        assert!(Interval::ymd_hms(2012, 5, 12, 23, 59, -1).is_err());
        let second = Interval::ymd_hms(2012, 5, 12, 23, 59, 58).unwrap();
        assert_eq!((second.hour(), second.minute(), second.second()), (23, 59, 58));
    }

    #[test]
    fn instants() {
        let epoch = Interval::from_instant(Instant::at_epoch(), Resolution::Second).unwrap();
        assert_eq!(epoch, Interval::ymd_hms(1970, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(epoch.to_instant(), Instant::at_epoch());

        let before_epoch = Interval::from_instant(Instant::at(-1), Resolution::Day).unwrap();
        assert_eq!(before_epoch, Interval::ymd(1969, 12, 31).unwrap());

        assert!(Interval::from_instant(Instant::at(i64::MAX - 10), Resolution::Day).is_err());
    }
}
