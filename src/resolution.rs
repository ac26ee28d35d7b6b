//! Resolutions, and the rules that differ from one resolution to the next.

use std::fmt;

use crate::cal::codec::{self, SECONDS_IN_DAY, SECONDS_IN_HOUR, SECONDS_IN_MINUTE};


/// The granularity an interval was specified at.
///
/// Resolutions are ordered from coarsest to finest, so a resolution
/// *contains* every resolution that compares greater than or equal to it.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Resolution {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl Resolution {

    /// Every resolution, coarsest first.
    pub const ALL: [Resolution; 6] = [
        Resolution::Year,   Resolution::Month,  Resolution::Day,
        Resolution::Hour,   Resolution::Minute, Resolution::Second,
    ];

    /// Returns whether a value at this resolution can contain a value at
    /// the other one, which is when the other is no coarser.
    ///
    /// ```
    /// use interval::Resolution;
    ///
    /// assert!(Resolution::Month.contains(Resolution::Day));
    /// assert!(Resolution::Day.contains(Resolution::Day));
    /// assert!(!Resolution::Day.contains(Resolution::Month));
    /// ```
    pub fn contains(self, other: Resolution) -> bool {
        self <= other
    }

    /// Whether values at this resolution pick out a particular day, which
    /// is what day and week arithmetic needs.
    pub fn has_days(self) -> bool {
        self >= Resolution::Day
    }

    /// The length of a period at this resolution, in seconds, if every
    /// period has the same length. Years and months do not.
    pub fn fixed_length(self) -> Option<i64> {
        match self {
            Resolution::Year | Resolution::Month  => None,
            Resolution::Day     => Some(SECONDS_IN_DAY),
            Resolution::Hour    => Some(SECONDS_IN_HOUR),
            Resolution::Minute  => Some(SECONDS_IN_MINUTE),
            Resolution::Second  => Some(1),
        }
    }

    /// Rounds an index down to the start of the period at this resolution
    /// that it falls in.
    pub(crate) fn truncate(self, index: i64) -> i64 {
        match self.fixed_length() {
            Some(length) => index.div_euclid(length) * length,
            None => {
                let day_index = index.div_euclid(SECONDS_IN_DAY);
                let start = match self {
                    Resolution::Year => codec::year_start_unchecked(codec::year_of_day(day_index)),
                    _ => {
                        let (year, month0, _) = codec::day_index_to_ymd(day_index);
                        codec::ymd_unchecked(year, month0, 1)
                    }
                };
                start * SECONDS_IN_DAY
            }
        }
    }

    /// The exclusive end of the period at this resolution that starts at
    /// the given index.
    pub(crate) fn upper_limit(self, index: i64) -> i64 {
        match self.fixed_length() {
            Some(length) => index + length,
            None => {
                let day_index = index.div_euclid(SECONDS_IN_DAY);
                let end = match self {
                    Resolution::Year => codec::year_start_unchecked(codec::year_of_day(day_index) + 1),
                    _ => {
                        let (year, month0, _) = codec::day_index_to_ymd(day_index);
                        codec::month_number_start(year * 12 + i64::from(month0) + 1)
                    }
                };
                end * SECONDS_IN_DAY
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resolution::Year    => "year",
            Resolution::Month   => "month",
            Resolution::Day     => "day",
            Resolution::Hour    => "hour",
            Resolution::Minute  => "minute",
            Resolution::Second  => "second",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
