//! Half-open ranges of intervals.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use crate::cal::codec::{self, SECONDS_IN_DAY};
use crate::interval::Interval;
use crate::resolution::Resolution;


/// Where an interval falls relative to a range.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum RangePosition {

    /// Starts before the range begins.
    Below,

    /// Starts at or after the beginning, and before the end.
    Within,

    /// Starts at or after the end.
    Above,
}

impl RangePosition {

    /// The position as an ordering of the interval against the range, so
    /// `Below` is `Less`.
    pub fn as_ordering(self) -> Ordering {
        match self {
            RangePosition::Below   => Ordering::Less,
            RangePosition::Within  => Ordering::Equal,
            RangePosition::Above   => Ordering::Greater,
        }
    }
}


/// A half-open range of intervals: it includes everything starting at or
/// after `begin`, and before `end`.
///
/// Only starting points are compared, so a range can mix resolutions.
///
/// ```
/// use interval::{Interval, IntervalRange, RangePosition};
///
/// let may = IntervalRange::new(Interval::ymd(2012, 5, 1).unwrap(),
///                              Interval::ymd(2012, 6, 1).unwrap());
///
/// assert!(may.contains(&Interval::ymd(2012, 5, 31).unwrap()));
/// assert!(!may.contains(&Interval::ymd(2012, 6, 1).unwrap()));
/// assert_eq!(may.compare_to_range(&Interval::ymd(2012, 4, 30).unwrap()), RangePosition::Below);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntervalRange {
    begin: Interval,
    end: Interval,
}

impl IntervalRange {

    /// The range covering the first of January of year 1 up to, but not
    /// including, the thirty-first of December 9999.
    pub const ALL: IntervalRange = IntervalRange {
        begin: Interval::at_index(codec::ymd_unchecked(1, 0, 1) * SECONDS_IN_DAY, Resolution::Day),
        end:   Interval::at_index(codec::ymd_unchecked(9999, 11, 31) * SECONDS_IN_DAY, Resolution::Day),
    };

    /// Creates a range from its inclusive beginning and exclusive end. The
    /// end is allowed to come before the beginning, in which case the range
    /// is empty.
    pub fn new(begin: Interval, end: Interval) -> Self {
        Self { begin, end }
    }

    pub fn begin(&self) -> Interval {
        self.begin
    }

    pub fn end(&self) -> Interval {
        self.end
    }

    /// Whether nothing can fall within this range.
    pub fn is_empty(&self) -> bool {
        !self.begin.before(&self.end)
    }

    /// Whether the interval starts within this range.
    pub fn contains(&self, interval: &Interval) -> bool {
        self.compare_to_range(interval) == RangePosition::Within
    }

    /// Returns where the interval falls relative to this range.
    pub fn compare_to_range(&self, interval: &Interval) -> RangePosition {
        if interval.before(&self.begin) {
            RangePosition::Below
        }
        else if interval.before(&self.end) {
            RangePosition::Within
        }
        else {
            RangePosition::Above
        }
    }
}

impl From<Range<Interval>> for IntervalRange {
    fn from(range: Range<Interval>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for IntervalRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}..{})", self.begin.iso(), self.end.iso())
    }
}

impl fmt::Debug for IntervalRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IntervalRange{}", self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_bounds() {
        assert_eq!(IntervalRange::ALL.begin(), Interval::ymd(1, 1, 1).unwrap());
        assert_eq!(IntervalRange::ALL.end(), Interval::ymd(9999, 12, 31).unwrap());
    }

    #[test]
    fn mixed_resolutions() {
        let range = IntervalRange::from(Interval::ym(2012, 5).unwrap() .. Interval::y(2013).unwrap());
        assert!(range.contains(&Interval::ymd_hms(2012, 12, 31, 23, 59, 59).unwrap()));
        assert_eq!(range.compare_to_range(&Interval::ym(2013, 1).unwrap()), RangePosition::Above);
    }

    #[test]
    fn backwards_range_is_empty() {
        let range = IntervalRange::new(Interval::y(2013).unwrap(), Interval::y(2012).unwrap());
        assert!(range.is_empty());
        assert!(!range.contains(&Interval::ymd(2012, 6, 1).unwrap()));
    }

    #[test]
    fn display() {
        let range = IntervalRange::new(Interval::ym(2012, 5).unwrap(), Interval::ymd(2012, 6, 15).unwrap());
        assert_eq!(range.to_string(), "[2012-05..2012-06-15)");
    }
}
