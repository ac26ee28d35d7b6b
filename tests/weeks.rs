use interval::{Instant, Interval, Resolution, Weekday};


#[test]
fn weekday_cycle_from_the_unix_epoch() {
    for i in 0 .. 365 * 10 {
        let day = Interval::from_instant(Instant::at(i * 86_400), Resolution::Day).unwrap();
        assert_eq!(i64::from(day.weekday().number()), (i + 4) % 7);
    }
}

#[test]
fn weekday_repeats_every_seven_days() {
    let start = Interval::ymd(1899, 12, 25).unwrap();
    for i in 0 .. 1000 {
        let day = start.plus_days(i).unwrap();
        assert_eq!(day.plus_days(7).unwrap().weekday(), day.weekday());
    }
}

#[test]
fn some_weekdays() {
    assert_eq!(Interval::ymd(1969, 7, 20).unwrap().weekday(), Weekday::Sunday);
    assert_eq!(Interval::ymd(2012, 5, 12).unwrap().weekday(), Weekday::Saturday);
    assert_eq!(Interval::ymd(2000, 2, 29).unwrap().weekday(), Weekday::Tuesday);
}

#[test]
fn weeks_start_on_sunday() {
    let sunday = Interval::ymd(2012, 5, 6).unwrap();
    let saturday = Interval::ymd(2012, 5, 12).unwrap();
    let next_sunday = Interval::ymd(2012, 5, 13).unwrap();

    assert_eq!(sunday.week(), saturday.week());
    assert_eq!(next_sunday.week(), sunday.week() + 1);
    assert_eq!(Interval::ymd(2012, 5, 5).unwrap().week(), sunday.week() - 1);
}

#[test]
fn week_of_an_hour() {
    let hour = Interval::ymd_h(2012, 5, 12, 23).unwrap();
    assert_eq!(hour.week(), Interval::ymd(2012, 5, 6).unwrap().week());
}

#[test]
fn names() {
    assert_eq!(Weekday::Sunday.short_name(), "Sun");
    assert_eq!(Weekday::Saturday.short_name(), "Sat");
    assert_eq!(Weekday::Wednesday.long_name(), "Wednesday");
}

#[test]
fn week_numbers_turn_back_into_sundays() {
    let start = Interval::ymd(1899, 12, 25).unwrap();
    for i in 0 .. 1000 {
        let day = start.plus_days(i * 3).unwrap();
        assert_eq!(Interval::from_week(day.week()), day.start_of_week());
    }

    let hour = Interval::ymd_h(2012, 5, 12, 23).unwrap();
    assert_eq!(Interval::from_week(hour.week()), Interval::ymd(2012, 5, 6));
}

#[test]
fn weekdays_within_a_week() {
    let week = Interval::ymd(2012, 5, 12).unwrap().week();
    assert_eq!(Interval::from_week_weekday(week, Weekday::Sunday), Interval::ymd(2012, 5, 6));
    assert_eq!(Interval::from_week_weekday(week, Weekday::Wednesday), Interval::ymd(2012, 5, 9));
    assert_eq!(Interval::from_week_weekday(week, Weekday::Saturday), Interval::ymd(2012, 5, 12));
}

#[test]
fn weeks_outside_the_supported_years() {
    let last = Interval::ymd(9999, 12, 31).unwrap().week();
    assert!(Interval::from_week(last).is_ok());
    assert!(Interval::from_week(last + 1).is_err());
    assert!(Interval::from_week(i64::MAX).is_err());
    assert!(Interval::from_week(i64::MIN).is_err());
}
