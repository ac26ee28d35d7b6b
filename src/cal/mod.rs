//! The calendar that intervals are measured against: the index codec, plus
//! the weekday and year-month values built on top of it.

pub mod codec;
mod weekday;
mod year_month;

pub use self::weekday::Weekday;
pub use self::year_month::YearMonth;
