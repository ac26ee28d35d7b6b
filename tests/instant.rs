use interval::{Instant, Interval, Resolution};


#[test]
fn epoch() {
    let day = Interval::ymd(1970, 1, 1).unwrap();
    assert_eq!(day.to_instant(), Instant::at_epoch());
    assert_eq!(Interval::from_instant(Instant::at_epoch(), Resolution::Day), Ok(day));
}

#[test]
fn truncates_to_each_resolution() {
    let instant = Instant::at(1_234_567_890);

    assert_eq!(instant.within(Resolution::Second), Interval::ymd_hms(2009, 2, 13, 23, 31, 30));
    assert_eq!(instant.within(Resolution::Minute), Interval::ymd_hm(2009, 2, 13, 23, 31));
    assert_eq!(instant.within(Resolution::Hour), Interval::ymd_h(2009, 2, 13, 23));
    assert_eq!(instant.within(Resolution::Day), Interval::ymd(2009, 2, 13));
    assert_eq!(instant.within(Resolution::Month), Interval::ym(2009, 2));
    assert_eq!(instant.within(Resolution::Year), Interval::y(2009));
}

#[test]
fn before_the_epoch_rounds_down() {
    let instant = Instant::at(-1);
    assert_eq!(instant.within(Resolution::Second), Interval::ymd_hms(1969, 12, 31, 23, 59, 59));
    assert_eq!(instant.within(Resolution::Year), Interval::y(1969));
}

#[test]
fn ten_years_of_days() {
    for i in 0 .. 365 * 10 {
        let instant = Instant::at(i * 86_400);
        let day = Interval::from_instant(instant, Resolution::Day).unwrap();
        assert_eq!(day.to_instant(), instant);

        let again = Interval::ymd(day.year(), day.month(), day.day()).unwrap();
        assert_eq!(again, day);
    }
}

#[test]
fn now_and_today() {
    let instant = Instant::now();
    let today = instant.within(Resolution::Day).unwrap();
    let now = instant.within(Resolution::Second).unwrap();
    assert_eq!(today.contains(&now), Ok(true));

    assert_eq!(Interval::now().resolution(), Resolution::Second);
    assert_eq!(Interval::today().resolution(), Resolution::Day);
}

#[test]
fn outside_the_supported_years() {
    assert!(Interval::from_instant(Instant::at(i64::MAX - 10), Resolution::Day).is_err());
    assert!(Instant::at(i64::MIN).within(Resolution::Second).is_err());

    let last = Interval::ymd_hms(9999, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(last.to_instant().within(Resolution::Year), Interval::y(9999));
    assert!(Instant::at(last.to_instant().seconds() + 1).within(Resolution::Second).is_err());

    let first = Interval::ymd(0, 1, 1).unwrap();
    assert_eq!(first.to_instant().within(Resolution::Day), Ok(first));
    assert!(Instant::at(first.to_instant().seconds() - 1).within(Resolution::Day).is_err());
}
