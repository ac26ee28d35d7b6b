use std::fmt;

use crate::interval::Interval;
use crate::resolution::Resolution;


/// Displays an interval in ISO-8601 form, truncated to the interval’s
/// resolution. Returned by `Interval::iso`.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Iso(pub Interval);

impl fmt::Display for Iso {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let interval = &self.0;
        let resolution = interval.resolution();

        write!(f, "{:04}", interval.year())?;
        if resolution == Resolution::Year {
            return Ok(());
        }

        write!(f, "-{:02}", interval.month())?;
        if resolution == Resolution::Month {
            return Ok(());
        }

        write!(f, "-{:02}", interval.day())?;
        if resolution == Resolution::Day {
            return Ok(());
        }

        write!(f, "T{:02}", interval.hour())?;
        if resolution == Resolution::Hour {
            return Ok(());
        }

        write!(f, ":{:02}", interval.minute())?;
        if resolution == Resolution::Minute {
            return Ok(());
        }

        write!(f, ":{:02}", interval.second())
    }
}

impl fmt::Debug for Iso {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Iso({})", self)
    }
}
