// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Read-only access to temporal values.
//!
//! [`TemporalAccessor`] is the contract through which a temporal source
//! exposes its fields and answers the typed queries (precision, local time,
//! local date, offset).  Inapplicable queries answer `None`.
//!
//! Besides [`TimeOfDay`] and [`OffsetTime`](crate::OffsetTime), the trait is
//! implemented for `chrono::NaiveTime` and `chrono::NaiveDateTime`, so
//! [`TimeOfDay::from_temporal`] accepts chrono values directly.

use crate::error::{Result, TimeError};
use crate::field::{ClockField, Field, ValueRange};
use crate::unit::ClockUnit;
use crate::TimeOfDay;
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Contract for anything fields can be read from.
pub trait TemporalAccessor {
    /// Whether `field` can be read.
    fn is_supported(&self, field: Field<'_>) -> bool;

    /// Full-width value of `field`.
    fn get_long(&self, field: Field<'_>) -> Result<i64>;

    /// Legal values of `field` for this source.
    fn range(&self, field: Field<'_>) -> Result<ValueRange> {
        match field {
            Field::Clock(f) if self.is_supported(field) => Ok(f.range()),
            Field::Clock(f) => Err(TimeError::unsupported_field(f.name())),
            Field::Custom(f) => Ok(f.range()),
        }
    }

    /// Value of `field` narrowed to `i32`.
    ///
    /// Fails with [`TimeError::Overflow`] when the field's range is wider
    /// than an `i32`.
    fn get(&self, field: Field<'_>) -> Result<i32> {
        let range = self.range(field)?;
        let value = self.get_long(field)?;
        range.check_valid_int_value(value, field.name())
    }

    /// Smallest unit the source resolves, if it has one.
    fn precision(&self) -> Option<ClockUnit> {
        None
    }

    /// Time-of-day component, if the source has one.
    fn local_time(&self) -> Option<TimeOfDay> {
        None
    }

    /// Calendar-date component, if the source has one.
    fn local_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Offset from UTC, if the source has one.
    fn offset(&self) -> Option<FixedOffset> {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// chrono implementations
// ═══════════════════════════════════════════════════════════════════════════

/// Value of a date-based built-in field for `date`.
pub(crate) fn date_field(date: &NaiveDate, field: ClockField) -> Option<i64> {
    let value = match field {
        ClockField::DayOfWeek => date.weekday().number_from_monday() as i64,
        ClockField::DayOfMonth => date.day() as i64,
        ClockField::DayOfYear => date.ordinal() as i64,
        ClockField::MonthOfYear => date.month() as i64,
        ClockField::Year => date.year() as i64,
        ClockField::EpochDay => date.num_days_from_ce() as i64 - UNIX_EPOCH_DAYS_FROM_CE,
        _ => return None,
    };
    Some(value)
}

impl TemporalAccessor for NaiveTime {
    fn is_supported(&self, field: Field<'_>) -> bool {
        match field {
            Field::Clock(f) => f.is_time_based(),
            Field::Custom(f) => f.is_supported_by(self),
        }
    }

    fn get_long(&self, field: Field<'_>) -> Result<i64> {
        match field {
            Field::Custom(f) => f.get_from(self),
            field => TimeOfDay::from(*self).get_long(field),
        }
    }

    fn precision(&self) -> Option<ClockUnit> {
        Some(ClockUnit::Nanos)
    }

    fn local_time(&self) -> Option<TimeOfDay> {
        Some(TimeOfDay::from(*self))
    }
}

impl TemporalAccessor for NaiveDateTime {
    fn is_supported(&self, field: Field<'_>) -> bool {
        match field {
            Field::Clock(f) => f.is_time_based() || f.is_date_based(),
            Field::Custom(f) => f.is_supported_by(self),
        }
    }

    fn get_long(&self, field: Field<'_>) -> Result<i64> {
        match field {
            Field::Clock(f) if f.is_date_based() => date_field(&self.date(), f)
                .ok_or_else(|| TimeError::unsupported_field(f.name())),
            Field::Custom(f) => f.get_from(self),
            field => TimeOfDay::from(self.time()).get_long(field),
        }
    }

    fn precision(&self) -> Option<ClockUnit> {
        Some(ClockUnit::Nanos)
    }

    fn local_time(&self) -> Option<TimeOfDay> {
        Some(TimeOfDay::from(self.time()))
    }

    fn local_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}
