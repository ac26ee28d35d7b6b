use crate::cal::codec;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::util::RangeExt;


/// A month of a particular year, stored as a single month number
/// (`year * 12 + month - 1`) so that moving by months is plain addition.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct YearMonth {
    number: i64,
}

impl YearMonth {

    /// Pairs a year with a one-based month.
    ///
    /// ```
    /// use interval::YearMonth;
    ///
    /// let ym = YearMonth::new(2012, 5).unwrap();
    /// assert_eq!(ym.add_months(8).year(), 2013);
    /// assert_eq!(ym.add_months(8).month(), 1);
    /// assert!(YearMonth::new(2012, 0).is_err());
    /// ```
    pub fn new(year: i64, month: i8) -> Result<Self> {
        codec::check_year(year)?;
        if !month.is_within(1 .. 13) {
            return Err(Error::Invalid(format!("Month {} not in the range 1 to 12", month)));
        }
        Ok(Self { number: year * 12 + i64::from(month) - 1 })
    }

    /// Creates a year-month from its month number.
    pub fn from_number(number: i64) -> Self {
        Self { number }
    }

    /// The month number, `year * 12 + month - 1`.
    pub fn number(self) -> i64 {
        self.number
    }

    pub fn year(self) -> i64 {
        self.number.div_euclid(12)
    }

    /// The month, from 1 to 12.
    pub fn month(self) -> i8 {
        self.month0() + 1
    }

    pub(crate) fn month0(self) -> i8 {
        self.number.rem_euclid(12) as i8
    }

    pub fn add_years(self, years: i64) -> Self {
        Self { number: self.number + years * 12 }
    }

    pub fn add_months(self, months: i64) -> Self {
        Self { number: self.number + months }
    }

    /// Returns the number of days in this month.
    pub fn day_count(self) -> i8 {
        codec::month_length(self.year(), self.month0()) as i8
    }

    /// Returns the first day of this month as a day interval.
    pub fn first_day(self) -> Result<Interval> {
        self.day(1)
    }

    /// Returns the given day of this month as a day interval.
    ///
    /// This is just a short-cut for the `Interval::ymd` constructor.
    pub fn day(self, day: i8) -> Result<Interval> {
        Interval::ymd(self.year(), self.month(), day)
    }

    /// Day index of the first day of this month.
    pub(crate) fn start_day_index(self) -> i64 {
        codec::month_number_start(self.number)
    }
}


#[cfg(test)]
mod test {
    use super::YearMonth;

    #[test]
    fn december_wraps_into_january() {
        let ym = YearMonth::new(2011, 12).unwrap();
        assert_eq!(ym.add_months(1), YearMonth::new(2012, 1).unwrap());
        assert_eq!(ym.add_months(-12), YearMonth::new(2010, 12).unwrap());
    }

    #[test]
    fn day_counts() {
        assert_eq!(YearMonth::new(2012, 2).unwrap().day_count(), 29);
        assert_eq!(YearMonth::new(2100, 2).unwrap().day_count(), 29);
        assert_eq!(YearMonth::new(2013, 2).unwrap().day_count(), 28);
        assert_eq!(YearMonth::new(2013, 9).unwrap().day_count(), 30);
    }

    #[test]
    fn add_years_keeps_the_month() {
        let ym = YearMonth::new(2012, 5).unwrap().add_years(-3);
        assert_eq!((ym.year(), ym.month()), (2009, 5));
    }
}
