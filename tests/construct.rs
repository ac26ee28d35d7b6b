use interval::{Interval, Resolution, Error};


#[test]
fn year() {
    let year = Interval::y(2012).unwrap();
    assert_eq!(year.resolution(), Resolution::Year);
    assert_eq!((year.year(), year.month(), year.day()), (2012, 1, 1));
}

#[test]
fn month() {
    let month = Interval::ym(2012, 5).unwrap();
    assert_eq!(month.resolution(), Resolution::Month);
    assert_eq!((month.year(), month.month(), month.day()), (2012, 5, 1));
    assert_eq!(month.year_month_number(), 2012 * 12 + 4);
}

#[test]
fn day() {
    let day = Interval::ymd(2012, 5, 2).unwrap();
    assert_eq!((day.year(), day.month(), day.day()), (2012, 5, 2));
    assert_eq!(day.days_in_month(), 31);
}

#[test]
fn seconds() {
    let second = Interval::ymd_hms(1999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(second.resolution(), Resolution::Second);
    assert_eq!(second.upper_limit(), Interval::y(2000).unwrap().index());
}

#[test]
fn month_thirteen() {
    assert_eq!(Interval::ym(2012, 13), Err(Error::Invalid("Month 13 not in the range 1 to 12".into())));
    assert!(Interval::ym(2012, 0).is_err());
}

#[test]
fn thirty_first_of_april() {
    assert!(Interval::ymd(2012, 4, 31).unwrap_err().is_validation());
}

#[test]
fn leap_day() {
    assert!(Interval::ymd(2012, 2, 29).is_ok());
    assert_eq!(Interval::ymd(2011, 2, 29), Err(Error::Invalid("29th February when 2011 is not a leap year".into())));
}

#[test]
fn year_span() {
    assert!(Interval::ymd(0, 1, 1).is_ok());
    assert!(Interval::ymd(9999, 12, 31).is_ok());
    assert!(Interval::y(10000).is_err());
    assert!(Interval::ym(-1, 12).is_err());
}

#[test]
fn indices_are_aligned() {
    let hour = Interval::ymd_h(2012, 5, 12, 13).unwrap();
    assert_eq!(hour.index().rem_euclid(3600), 0);

    let minute = Interval::ymd_hm(2012, 5, 12, 13, 45).unwrap();
    assert_eq!(minute.index().rem_euclid(60), 0);
}

#[test]
fn same_start_different_resolution() {
    let month = Interval::ym(2012, 6).unwrap();
    let day = Interval::ymd(2012, 6, 1).unwrap();
    assert_eq!(month.index(), day.index());
    assert_ne!(month, day);
}

#[test]
fn genesis() {
    assert!(Interval::GENESIS.is_genesis());
    assert_eq!(Interval::GENESIS.to_string(), "");
    assert!(Interval::GENESIS.before(&Interval::ymd(0, 1, 2).unwrap()));
    assert!(!Interval::today().is_genesis());
}

#[test]
fn display() {
    assert_eq!(Interval::ymd(2012, 5, 2).unwrap().to_string(), "02/05/2012");
    assert_eq!(Interval::ymd(812, 11, 30).unwrap().to_string(), "30/11/0812");
}

#[test]
fn widening_conversions() {
    let second = Interval::ymd_hms(2012, 5, 12, 10, 30, 15).unwrap();
    assert_eq!(second.to_day(), Interval::ymd(2012, 5, 12));
    assert_eq!(second.to_month(), Interval::ym(2012, 5));
    assert_eq!(second.to_year(), Interval::y(2012).unwrap());
    assert_eq!(second.to_resolution(Resolution::Hour), Interval::ymd_h(2012, 5, 12, 10));
}

#[test]
fn narrowing_conversions() {
    let day = Interval::ymd(2012, 5, 12).unwrap();
    assert_eq!(day.to_resolution(Resolution::Minute), Interval::ymd_hm(2012, 5, 12, 0, 0));

    let month = Interval::ym(2012, 5).unwrap();
    assert!(month.to_day().unwrap_err().is_unsupported());
    assert!(Interval::y(2012).unwrap().to_month().is_err());
}
