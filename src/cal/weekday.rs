use crate::cal::codec::WEEK_OFFSET;
use crate::error::{Error, Result};

use self::Weekday::*;


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, which is what the week numbering counts from as well:
// a week runs from a Sunday to the following Saturday.

impl Weekday {

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use interval::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,
            _ => return Err(Error::Invalid(format!("Weekday {} not in the range 0 to 6", weekday))),
        })
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_monday_as_one(weekday: i8) -> Result<Self> {
        Ok(match weekday {
            7 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,
            _ => return Err(Error::Invalid(format!("Weekday {} not in the range 1 to 7", weekday))),
        })
    }

    /// The number of this weekday, with Sunday as 0 and Saturday as 6.
    pub fn number(self) -> i8 {
        self as i8
    }

    pub(crate) fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// The three-letter English abbreviation, such as `"Wed"`.
    pub fn short_name(self) -> &'static str {
        match self {
            Sunday   => "Sun",  Monday    => "Mon",
            Tuesday  => "Tue",  Wednesday => "Wed",
            Thursday => "Thu",  Friday    => "Fri",
            Saturday => "Sat",
        }
    }

    /// The full English name, such as `"Wednesday"`.
    pub fn long_name(self) -> &'static str {
        match self {
            Sunday   => "Sunday",    Monday    => "Monday",
            Tuesday  => "Tuesday",   Wednesday => "Wednesday",
            Thursday => "Thursday",  Friday    => "Friday",
            Saturday => "Saturday",
        }
    }

    /// Computes the weekday of a day index.
    pub(crate) fn of_day_index(day_index: i64) -> Self {
        match (day_index + WEEK_OFFSET).rem_euclid(7) {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            _ => Saturday,
        }
    }
}
