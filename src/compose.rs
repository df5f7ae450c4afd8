// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Combining a [`TimeOfDay`] with a date or a UTC offset.

use crate::accessor::{TemporalAccessor, UNIX_EPOCH_DAYS_FROM_CE};
use crate::error::Result;
use crate::field::{ClockField, Field};
use crate::time::SECONDS_PER_DAY;
use crate::unit::ClockUnit;
use crate::TimeOfDay;
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A time of day together with the UTC offset it was observed at.
///
/// No conversion happens: the time is exactly the wall-clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: TimeOfDay,
    offset: FixedOffset,
}

impl OffsetTime {
    /// Pair `time` with `offset`.
    pub const fn new(time: TimeOfDay, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    /// The wall-clock time.
    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Offset from UTC.
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

impl TemporalAccessor for OffsetTime {
    fn is_supported(&self, field: Field<'_>) -> bool {
        match field {
            Field::Clock(ClockField::OffsetSeconds) => true,
            Field::Clock(f) => f.is_time_based(),
            Field::Custom(f) => f.is_supported_by(self),
        }
    }

    fn get_long(&self, field: Field<'_>) -> Result<i64> {
        match field {
            Field::Clock(ClockField::OffsetSeconds) => {
                Ok(i64::from(self.offset.local_minus_utc()))
            }
            Field::Custom(f) => f.get_from(self),
            field => self.time.get_long(field),
        }
    }

    fn precision(&self) -> Option<ClockUnit> {
        Some(ClockUnit::Nanos)
    }

    fn local_time(&self) -> Option<TimeOfDay> {
        Some(self.time)
    }

    fn offset(&self) -> Option<FixedOffset> {
        Some(self.offset)
    }
}

impl TimeOfDay {
    /// Place this time on `date`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use walltime::TimeOfDay;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    /// let dt = TimeOfDay::from_hm(8, 45)?.at_date(date);
    /// assert_eq!(dt.to_string(), "2024-02-29 08:45:00");
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn at_date(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::from(self))
    }

    /// Attach a UTC offset.
    pub fn at_offset(self, offset: FixedOffset) -> OffsetTime {
        OffsetTime::new(self, offset)
    }

    /// Seconds since 1970-01-01T00:00Z of this time on `date` at `offset`.
    ///
    /// Sub-second precision is dropped.
    pub fn to_epoch_second(&self, date: NaiveDate, offset: FixedOffset) -> i64 {
        let epoch_day = i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE;
        epoch_day * SECONDS_PER_DAY + i64::from(self.to_second_of_day())
            - i64::from(offset.local_minus_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_at_date() {
        let t = TimeOfDay::new(23, 59, 59, 999_999_999).unwrap();
        let dt = t.at_date(ymd(2000, 1, 1));
        assert_eq!(dt.date(), ymd(2000, 1, 1));
        assert_eq!(TimeOfDay::from(dt.time()), t);
        assert_eq!(dt.get_long(ClockField::EpochDay.into()).unwrap(), 10_957);
    }

    #[test]
    fn test_offset_time_display_and_fields() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let ot = TimeOfDay::from_hm(10, 15).unwrap().at_offset(plus_one);
        assert_eq!(ot.to_string(), "10:15+01:00");
        assert_eq!(ot.get_long(ClockField::OffsetSeconds.into()).unwrap(), 3600);
        assert_eq!(ot.get_long(ClockField::MinuteOfDay.into()).unwrap(), 615);
        assert!(!ot.is_supported(ClockField::DayOfMonth.into()));
        assert_eq!(TemporalAccessor::offset(&ot), Some(plus_one));
        assert_eq!(TimeOfDay::from_temporal(&ot).unwrap(), ot.time());
    }

    #[test]
    fn test_to_epoch_second_agrees_with_chrono() {
        let cases = [
            (ymd(1970, 1, 1), TimeOfDay::MIDNIGHT, 0),
            (ymd(2024, 3, 15), TimeOfDay::from_hms(6, 30, 5).unwrap(), 3600),
            (ymd(1969, 12, 31), TimeOfDay::NOON, -18_000),
        ];
        for (date, time, offset_secs) in cases {
            let offset = FixedOffset::east_opt(offset_secs).unwrap();
            let expected = offset
                .from_local_datetime(&time.at_date(date))
                .unwrap()
                .timestamp();
            assert_eq!(time.to_epoch_second(date, offset), expected);
        }
    }
}
