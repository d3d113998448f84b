use timestrip::{
    AnyTime, Axis, AxisConfig, Bosparanian, CalendarKind, Coptic, DurationType, Gregorian,
    Numeric, Pharaonic, Side, StripKind, TimeDelta, TimeError, TimePeriod, TimeType, TimeValue,
    WeekStart,
};

#[test]
fn one_instant_in_every_date_calendar() {
    let t = Gregorian::parse_time("2013-07-07 08:00").unwrap();
    assert_eq!(t.stored(), (2_456_481, 28_800));
    assert_eq!(Coptic::format_time(t.to()), "1729-10-30 08:00:00");
    assert_eq!(Pharaonic::format_time(t.to()), "2760-04-30 08:00:00");
    assert_eq!(Bosparanian::format_time(t.to()), "1036-09-18 08:00:00");
    assert_eq!(t.to::<Bosparanian>().to::<Coptic>().to::<Gregorian>(), t);
}

#[test]
fn parse_errors_are_classified_in_order() {
    assert!(matches!(Gregorian::parse_time("yesterday"), Err(TimeError::Parse(_))));
    assert!(matches!(
        Gregorian::parse_time("2013-02-29"),
        Err(TimeError::ValueMismatch(_))
    ));
    assert_eq!(
        Gregorian::parse_time("10000-01-01"),
        Err(TimeError::OutOfRange(Side::Right))
    );
    assert!(matches!(
        Coptic::parse_time("1729-13-06"),
        Err(TimeError::ValueMismatch(_))
    ));
    assert!(Coptic::parse_time("1731-13-06").is_ok());
}

#[test]
fn bc_years_read_consistently() {
    let t = Gregorian::parse_time("0-06-15").unwrap();
    assert!(t.date().is_bc());
    assert_eq!(t.date().format_day_month_year(), "15 Jun 1 BC");
}

#[test]
fn zooming_out_changes_strips() {
    let start = Gregorian::parse_time("2013-07-01").unwrap();
    let config = AxisConfig::default();
    let mut kinds = Vec::new();
    for days in [1, 7, 30, 365, 3_650, 36_500, 365_000] {
        let period = TimePeriod::new(start, start + TimeDelta::from_days(days)).unwrap();
        let axis = Axis::new(period, 1_000.0, &config).unwrap();
        kinds.push(axis.minor_strip().kind().unwrap());
    }
    assert_eq!(
        kinds,
        [
            StripKind::Hour,
            StripKind::Weekday,
            StripKind::Day,
            StripKind::Month,
            StripKind::Year,
            StripKind::Decade,
            StripKind::Century,
        ]
    );
}

#[test]
fn week_strip_honours_week_start() {
    let start = Gregorian::parse_time("2013-07-03").unwrap();
    let period = TimePeriod::new(start, start + TimeDelta::from_days(60)).unwrap();
    let config = AxisConfig::default().with_week_start(WeekStart::Sunday);
    let axis = Axis::new(period, 900.0, &config).unwrap();
    let minor = axis.minor_ticks();
    assert_eq!(axis.minor_strip().kind(), Some(StripKind::Week));
    assert_eq!(minor[0].time, Gregorian::parse_time("2013-06-30").unwrap());
    assert!(minor.iter().all(|tick| tick.time.weekday() == 6));
}

#[test]
fn navigation_reports_the_side_it_leaves() {
    let start = Gregorian::parse_time("9980-01-01").unwrap();
    let period = TimePeriod::new(start, start + TimeDelta::from_days(365)).unwrap();
    let err = period.navigate(TimeDelta::from_days(10 * 365)).unwrap_err();
    assert_eq!(err.side(), Some(Side::Right));
}

#[test]
fn runtime_calendar_choice() {
    let kind: CalendarKind = "pharaonic".parse().unwrap();
    let t = kind.parse_time("2760-13-06").unwrap();
    assert!(t.is_special_day());
    let (day_count, seconds) = t.stored();
    let reloaded = AnyTime::from_stored(kind, day_count, seconds).unwrap();
    assert_eq!(reloaded, t);
    let greg: TimeValue<Gregorian> =
        TimeValue::<Pharaonic>::try_from(t).unwrap().to::<Gregorian>();
    assert_eq!(greg.to_string(), "2014-03-10 00:00:00");
    assert!(matches!(
        TimeValue::<Numeric>::try_from(t),
        Err(TimeError::TypeMismatch { .. })
    ));
}

#[test]
fn durations_read_naturally() {
    let a = Gregorian::parse_time("2012-07-07").unwrap();
    let b = Gregorian::parse_time("2013-07-08 01:01:40").unwrap();
    assert_eq!(
        Gregorian::format_delta(b - a, DurationType::ALL),
        "1 year 1 day 1 hour 1 minute 40 seconds"
    );
    assert_eq!((b - a).to_string(), "1 year 1 day 1 hour 1 minute 40 seconds");
    assert_eq!((a - b).to_string(), "-1 year 1 day 1 hour 1 minute 40 seconds");
}

#[test]
fn numeric_axis_end_to_end() {
    let period =
        TimePeriod::new(Numeric::parse_time("0").unwrap(), Numeric::parse_time("1000").unwrap())
            .unwrap();
    let axis = Axis::new(period, 500.0, &AxisConfig::default()).unwrap();
    let labels: Vec<_> = axis.major_ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels, ["0", "1000"]);
    assert_eq!(axis.minor_ticks().len(), 11);
    assert!(matches!(period.zoom(1, 1_000), Err(TimeError::ValueMismatch(_))));
    assert_eq!(period.zoom(1, 200).unwrap().delta().units(), 5);
}
