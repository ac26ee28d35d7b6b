#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for calendar **intervals**: points on the timeline given at a
//! resolution of a year, a month, a day, an hour, a minute, or a second.
//!
//! Every interval is a count of seconds from a fixed epoch together with
//! its resolution, so intervals of any resolution can be compared, tested
//! for containment, and collected into ranges. The calendar arithmetic
//! underneath is done from first principles, and counts every fourth year
//! as a leap year.
//!
//! Intervals are ordered by where they start. The comparison operators
//! leave a day and the month starting on it unordered, since the two are
//! not equal either; `Interval::compare_to` orders any pair by index alone,
//! and is the one to sort a mixture of resolutions with.
//!
//! # Examples
//!
//! ```
//! use interval::{Interval, IntervalRange, Resolution};
//!
//! let day = Interval::ymd(2012, 5, 12).unwrap();
//! assert_eq!(day.iso().to_string(), "2012-05-12");
//! assert_eq!(day.to_string(), "12/05/2012");
//!
//! let year = Interval::y(2012).unwrap();
//! assert_eq!(year.contains(&day), Ok(true));
//!
//! let parsed = Interval::parse_day("02052012").unwrap();
//! assert_eq!(parsed.to_resolution(Resolution::Month).unwrap(), Interval::ym(2012, 5).unwrap());
//!
//! let summer = IntervalRange::new(day, Interval::ymd(2012, 7, 22).unwrap());
//! assert!(summer.contains(&Interval::ymd(2012, 7, 21).unwrap()));
//! assert!(!summer.contains(&Interval::ymd(2012, 7, 22).unwrap()));
//!
//! let june = Interval::ym(2012, 6).unwrap();
//! let june_1 = Interval::ymd(2012, 6, 1).unwrap();
//! assert!(!(june_1 <= june));
//! assert_eq!(june_1.compare_to(&june), std::cmp::Ordering::Equal);
//!
//! Interval::today();
//! ```

pub mod cal;
mod error;
mod fmt;
mod instant;
mod interval;
mod parse;
mod range;
mod resolution;
mod system;
mod util;

pub use crate::cal::{Weekday, YearMonth};
pub use crate::error::{Error, Result};
pub use crate::fmt::Iso;
pub use crate::instant::Instant;
pub use crate::interval::Interval;
pub use crate::range::{IntervalRange, RangePosition};
pub use crate::resolution::Resolution;
