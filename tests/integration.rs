use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use qtty::{Day, Days, Seconds};
use walltime::{
    ClockField, ClockUnit, FixedClock, TemporalAccessor, TemporalField, TemporalUnit, TimeError,
    TimeOfDay, ValueRange,
};

fn t(h: i32, m: i32, s: i32, n: i32) -> TimeOfDay {
    TimeOfDay::new(h, m, s, n).unwrap()
}

/// Quarter-hour slot of the day, 0..=95.
#[derive(Debug)]
struct QuarterOfDay;

impl TemporalField for QuarterOfDay {
    fn name(&self) -> &str {
        "QuarterOfDay"
    }
    fn is_time_based(&self) -> bool {
        true
    }
    fn is_date_based(&self) -> bool {
        false
    }
    fn range(&self) -> ValueRange {
        ValueRange::new(0, 95)
    }
    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.local_time().is_some()
    }
    fn get_from(&self, temporal: &dyn TemporalAccessor) -> walltime::Result<i64> {
        let minutes = temporal.get_long(ClockField::MinuteOfDay.into())?;
        Ok(minutes / 15)
    }
    fn adjust_into(&self, time: TimeOfDay, value: i64) -> walltime::Result<TimeOfDay> {
        let value = self.check_valid_value(value)?;
        let current = self.get_from(&time)?;
        Ok(time.plus_minutes((value - current) * 15))
    }
}

/// A ten-minute block.
#[derive(Debug)]
struct TenMinutes;

impl TemporalUnit for TenMinutes {
    fn name(&self) -> &str {
        "TenMinutes"
    }
    fn duration_nanos(&self) -> i128 {
        600 * 1_000_000_000
    }
    fn is_duration_estimated(&self) -> bool {
        false
    }
    fn is_time_based(&self) -> bool {
        true
    }
    fn is_date_based(&self) -> bool {
        false
    }
    fn is_supported_by(&self, _time: &TimeOfDay) -> bool {
        true
    }
    fn add_to(&self, time: TimeOfDay, amount: i64) -> walltime::Result<TimeOfDay> {
        Ok(time.plus_minutes((amount % 144) * 10))
    }
    fn between(&self, start: &TimeOfDay, end: &TimeOfDay) -> walltime::Result<i64> {
        Ok(start.until(*end, ClockUnit::Minutes)? / 10)
    }
}

#[test]
fn hour_exact_values_come_from_the_table() {
    for h in 0..24 {
        let a = TimeOfDay::from_hm(h, 0).unwrap();
        let b = TimeOfDay::from_second_of_day(i64::from(h) * 3600).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour() as i32, h);
    }
    assert_eq!(TimeOfDay::from_hm(12, 0).unwrap(), TimeOfDay::NOON);
    assert_eq!(TimeOfDay::default(), TimeOfDay::MIDNIGHT);
}

#[test]
fn construction_rejects_out_of_range_components() {
    let err = TimeOfDay::new(24, 0, 0, 0).unwrap_err();
    match err {
        TimeError::Range {
            field, min, max, value,
        } => {
            assert_eq!(field, "HourOfDay");
            assert_eq!((min, max, value), (0, 23, 24));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(TimeOfDay::from_nano_of_day(86_400_000_000_000).is_err());
    assert!(TimeOfDay::from_second_of_day(-1).is_err());
}

#[test]
fn external_field_reads_and_adjusts() {
    let v = t(10, 40, 12, 9);
    assert_eq!(v.get(&QuarterOfDay).unwrap(), 42);
    assert_eq!(v.get_long(&QuarterOfDay).unwrap(), 42);
    assert!(v.is_supported(&QuarterOfDay));
    assert_eq!(v.range(&QuarterOfDay).unwrap(), ValueRange::new(0, 95));

    let moved = v.with(&QuarterOfDay, 0).unwrap();
    assert_eq!(moved, t(0, 10, 12, 9));
    assert!(matches!(
        v.with(&QuarterOfDay, 96),
        Err(TimeError::Range { .. })
    ));
}

#[test]
fn external_unit_drives_arithmetic() {
    let v = t(23, 55, 0, 0);
    assert_eq!(v.plus(1, &TenMinutes).unwrap(), t(0, 5, 0, 0));
    assert_eq!(v.minus(2, &TenMinutes).unwrap(), t(23, 35, 0, 0));
    assert_eq!(t(10, 0, 0, 0).until(t(10, 59, 0, 0), &TenMinutes).unwrap(), 5);
    assert!(v.is_supported_unit(&TenMinutes));
    assert_eq!(t(10, 47, 3, 0).truncated_to(&TenMinutes).unwrap(), t(10, 40, 0, 0));
}

#[test]
fn truncation_rejects_units_that_do_not_fit_a_day() {
    let v = t(10, 47, 3, 0);
    assert!(matches!(
        v.truncated_to(ClockUnit::Days),
        Ok(x) if x == TimeOfDay::MIDNIGHT
    ));
    assert!(matches!(
        v.truncated_to(ClockUnit::Weeks),
        Err(TimeError::UnsupportedUnit { .. })
    ));
    assert_eq!(v.truncated_to(ClockUnit::HalfDays).unwrap(), t(0, 0, 0, 0));
    assert_eq!(v.truncated_to(ClockUnit::Hours).unwrap(), t(10, 0, 0, 0));
}

#[test]
fn until_is_antisymmetric_and_truncates() {
    let a = t(11, 30, 0, 0);
    let b = t(13, 29, 59, 999_999_999);
    assert_eq!(a.until(b, ClockUnit::Hours).unwrap(), 1);
    assert_eq!(b.until(a, ClockUnit::Hours).unwrap(), -1);
    assert_eq!(
        a.until(b, ClockUnit::Nanos).unwrap(),
        -b.until(a, ClockUnit::Nanos).unwrap()
    );
}

#[test]
fn chrono_interop() {
    let naive = NaiveTime::from_hms_nano_opt(8, 9, 10, 11).unwrap();
    let v = TimeOfDay::from(naive);
    assert_eq!(NaiveTime::from(v), naive);
    assert_eq!(TimeOfDay::from_temporal(&naive).unwrap(), v);

    let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
    assert_eq!(TimeOfDay::from(leap), TimeOfDay::MAX);

    let dt = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_time(naive);
    assert_eq!(TimeOfDay::from_temporal(&dt).unwrap(), v);

    assert_eq!(v + TimeDelta::hours(16), t(0, 9, 10, 11));
    assert_eq!(t(0, 0, 0, 0) - t(23, 0, 0, 0), TimeDelta::hours(-23));
}

#[test]
fn conversion_from_source_without_time_fails() {
    #[derive(Debug)]
    struct DateOnly;
    impl TemporalAccessor for DateOnly {
        fn is_supported(&self, _field: walltime::Field<'_>) -> bool {
            false
        }
        fn get_long(&self, field: walltime::Field<'_>) -> walltime::Result<i64> {
            Err(TimeError::UnsupportedField {
                field: field.name().to_owned(),
            })
        }
    }
    assert!(matches!(
        TimeOfDay::from_temporal(&DateOnly),
        Err(TimeError::Conversion { .. })
    ));
}

#[test]
fn units_expose_typed_lengths() {
    assert_eq!(ClockUnit::Hours.duration(), Seconds::new(3600.0));
    assert_eq!(ClockUnit::Days.duration().to::<Day>(), Days::new(1.0));
    assert!(ClockUnit::Months.is_duration_estimated());
    assert!(!ClockUnit::HalfDays.is_duration_estimated());
}

#[test]
fn day_fraction_roundtrip() {
    let v = TimeOfDay::from_hm(18, 0).unwrap();
    assert_eq!(v.day_fraction(), Days::new(0.75));
    assert_eq!(TimeOfDay::from_day_fraction(Days::new(0.75)).unwrap(), v);
    assert!(TimeOfDay::from_day_fraction(Days::new(1.0)).is_err());
    assert!(TimeOfDay::from_day_fraction(Days::new(f64::NAN)).is_err());
}

#[test]
fn clock_and_composition() {
    let instant = DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap();
    let offset = FixedOffset::east_opt(-3 * 3600).unwrap();
    let clock = FixedClock::new(instant, offset);

    let local = TimeOfDay::now_with(&clock);
    assert_eq!(local.to_string(), "19:13:20.250");

    let date = NaiveDate::from_ymd_opt(2023, 11, 14).unwrap();
    assert_eq!(local.to_epoch_second(date, offset), 1_700_000_000);
    assert_eq!(local.at_offset(offset).to_string(), "19:13:20.250-03:00");
    assert_eq!(local.at_date(date).and_utc().timestamp(), 1_700_000_000 - 3 * 3600);
}

#[test]
fn text_and_binary_forms_agree() {
    for v in [
        TimeOfDay::MIDNIGHT,
        t(1, 2, 0, 0),
        t(1, 2, 3, 0),
        t(1, 2, 3, 4_000_000),
        TimeOfDay::MAX,
    ] {
        let text = v.to_string();
        assert_eq!(text.parse::<TimeOfDay>().unwrap(), v);
        let bytes = v.encode();
        assert_eq!(TimeOfDay::decode(&bytes).unwrap(), v);
    }
    assert_eq!(TimeOfDay::MIDNIGHT.encode().len(), 1);
    assert_eq!(t(1, 2, 0, 0).encode().len(), 2);
    assert_eq!(t(1, 2, 3, 0).encode().len(), 3);
    assert_eq!(t(1, 2, 3, 4).encode().len(), 7);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_canonical_text() {
    let v = t(10, 15, 30, 500_000_000);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "\"10:15:30.500\"");
    let back: TimeOfDay = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
    assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    assert!(serde_json::from_str::<TimeOfDay>("36000").is_err());
}
