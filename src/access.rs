// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field access: reading, replacing and truncating the components of a
//! [`TimeOfDay`].
//!
//! Built-in time-based fields are resolved directly from the four stored
//! components with truncating integer arithmetic.  Built-in fields that are
//! not time-based are rejected.  Caller-supplied fields are handed the value
//! and do their own work.

use crate::accessor::TemporalAccessor;
use crate::error::{Result, TimeError};
use crate::field::{ClockField, Field, ValueRange};
use crate::time::NANOS_PER_DAY;
use crate::unit::{ClockUnit, Unit};
use crate::TimeOfDay;

impl TimeOfDay {
    // ── queries ───────────────────────────────────────────────────────

    /// Whether `field` can be read from and written to this value.
    pub fn is_supported<'a>(&self, field: impl Into<Field<'a>>) -> bool {
        match field.into() {
            Field::Clock(f) => f.is_time_based(),
            Field::Custom(f) => f.is_supported_by(self),
        }
    }

    /// Whether `unit` can be used for arithmetic on this value.
    pub fn is_supported_unit<'a>(&self, unit: impl Into<Unit<'a>>) -> bool {
        match unit.into() {
            Unit::Clock(u) => u.is_time_based(),
            Unit::Custom(u) => u.is_supported_by(self),
        }
    }

    /// Legal values of `field`.
    pub fn range<'a>(&self, field: impl Into<Field<'a>>) -> Result<ValueRange> {
        match field.into() {
            Field::Clock(f) if f.is_time_based() => Ok(f.range()),
            Field::Clock(f) => Err(TimeError::unsupported_field(f.name())),
            Field::Custom(f) => Ok(f.range()),
        }
    }

    /// Value of `field` as an `i32`.
    ///
    /// [`NanoOfDay`](ClockField::NanoOfDay) and
    /// [`MicroOfDay`](ClockField::MicroOfDay) do not fit and fail with
    /// [`TimeError::Overflow`]; read them with [`get_long`](Self::get_long).
    pub fn get<'a>(&self, field: impl Into<Field<'a>>) -> Result<i32> {
        match field.into() {
            Field::Clock(f) if f.is_time_based() => self.get_narrow(f),
            Field::Clock(f) => Err(TimeError::unsupported_field(f.name())),
            Field::Custom(f) => {
                tracing::trace!(field = f.name(), "delegating narrow read to external field");
                let value = f.get_from(self)?;
                f.range().check_valid_int_value(value, f.name())
            }
        }
    }

    /// Value of `field` as an `i64`.
    pub fn get_long<'a>(&self, field: impl Into<Field<'a>>) -> Result<i64> {
        match field.into() {
            Field::Clock(ClockField::NanoOfDay) => Ok(self.to_nano_of_day()),
            Field::Clock(ClockField::MicroOfDay) => Ok(self.to_nano_of_day() / 1_000),
            Field::Clock(f) if f.is_time_based() => self.get_narrow(f).map(i64::from),
            Field::Clock(f) => Err(TimeError::unsupported_field(f.name())),
            Field::Custom(f) => {
                tracing::trace!(field = f.name(), "delegating read to external field");
                f.get_from(self)
            }
        }
    }

    fn get_narrow(&self, field: ClockField) -> Result<i32> {
        let hour = self.hour() as i32;
        let nano = self.nanosecond() as i32;
        let value = match field {
            ClockField::NanoOfSecond => nano,
            ClockField::MicroOfSecond => nano / 1_000,
            ClockField::MilliOfSecond => nano / 1_000_000,
            ClockField::MilliOfDay => (self.to_nano_of_day() / 1_000_000) as i32,
            ClockField::SecondOfMinute => self.second() as i32,
            ClockField::SecondOfDay => self.to_second_of_day(),
            ClockField::MinuteOfHour => self.minute() as i32,
            ClockField::MinuteOfDay => hour * 60 + self.minute() as i32,
            ClockField::HourOfAmPm => hour % 12,
            ClockField::ClockHourOfAmPm => match hour % 12 {
                0 => 12,
                h => h,
            },
            ClockField::HourOfDay => hour,
            ClockField::ClockHourOfDay => match hour {
                0 => 24,
                h => h,
            },
            ClockField::AmPmOfDay => hour / 12,
            ClockField::NanoOfDay | ClockField::MicroOfDay => {
                return Err(TimeError::Overflow {
                    field: field.name().to_owned(),
                    value: self.get_long(field)?,
                })
            }
            _ => return Err(TimeError::unsupported_field(field.name())),
        };
        Ok(value)
    }

    // ── adjustment ────────────────────────────────────────────────────

    /// Return a copy with `field` set to `value`.
    ///
    /// The value is validated against the field's range before anything is
    /// derived.  Every field keeps the components finer than itself, e.g.
    /// setting [`SecondOfDay`](ClockField::SecondOfDay) keeps the nanosecond
    /// and setting [`MilliOfSecond`](ClockField::MilliOfSecond) keeps the
    /// sub-millisecond digits; [`NanoOfDay`](ClockField::NanoOfDay) replaces
    /// everything.  The clock-hour fields read 12 (resp. 24) as hour zero.
    ///
    /// ```
    /// use walltime::{ClockField, TimeOfDay};
    ///
    /// let t = TimeOfDay::from_hm(15, 45)?;
    /// assert_eq!(t.with(ClockField::ClockHourOfAmPm, 12)?, TimeOfDay::from_hm(12, 45)?);
    /// assert_eq!(t.with(ClockField::AmPmOfDay, 0)?, TimeOfDay::from_hm(3, 45)?);
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn with<'a>(self, field: impl Into<Field<'a>>, value: i64) -> Result<Self> {
        let f = match field.into() {
            Field::Clock(f) if f.is_time_based() => f,
            Field::Clock(f) => return Err(TimeError::unsupported_field(f.name())),
            Field::Custom(f) => {
                tracing::trace!(field = f.name(), value, "delegating adjustment to external field");
                return f.adjust_into(self, value);
            }
        };
        let value = f.check_valid_value(value)?;
        let hour = self.hour() as i64;
        let nano = self.nanosecond() as i64;
        // Ranges are int-sized for every arm that narrows below.
        let time = match f {
            ClockField::NanoOfSecond => self.with_nanosecond(value as i32)?,
            ClockField::NanoOfDay => Self::from_valid_nano_of_day(value),
            ClockField::MicroOfSecond => {
                self.with_nanosecond((value * 1_000 + nano % 1_000) as i32)?
            }
            ClockField::MicroOfDay => Self::from_valid_nano_of_day(value * 1_000 + nano % 1_000),
            ClockField::MilliOfSecond => {
                self.with_nanosecond((value * 1_000_000 + nano % 1_000_000) as i32)?
            }
            ClockField::MilliOfDay => {
                Self::from_valid_nano_of_day(value * 1_000_000 + nano % 1_000_000)
            }
            ClockField::SecondOfMinute => self.with_second(value as i32)?,
            ClockField::SecondOfDay => self.plus_seconds(value - self.to_second_of_day() as i64),
            ClockField::MinuteOfHour => self.with_minute(value as i32)?,
            ClockField::MinuteOfDay => {
                self.plus_minutes(value - (hour * 60 + self.minute() as i64))
            }
            ClockField::HourOfAmPm => self.plus_hours(value - hour % 12),
            ClockField::ClockHourOfAmPm => {
                let value = if value == 12 { 0 } else { value };
                self.plus_hours(value - hour % 12)
            }
            ClockField::HourOfDay => self.with_hour(value as i32)?,
            ClockField::ClockHourOfDay => {
                self.with_hour(if value == 24 { 0 } else { value as i32 })?
            }
            ClockField::AmPmOfDay => self.plus_hours((value - hour / 12) * 12),
            _ => return Err(TimeError::unsupported_field(f.name())),
        };
        Ok(time)
    }

    /// Return a copy with the hour replaced.
    pub fn with_hour(self, hour: i32) -> Result<Self> {
        if i32::from(self.hour()) == hour {
            return Ok(self);
        }
        let hour = ClockField::HourOfDay.check_valid_value(hour.into())?;
        Ok(Self::create(
            hour as u8,
            self.minute(),
            self.second(),
            self.nanosecond(),
        ))
    }

    /// Return a copy with the minute replaced.
    pub fn with_minute(self, minute: i32) -> Result<Self> {
        if i32::from(self.minute()) == minute {
            return Ok(self);
        }
        let minute = ClockField::MinuteOfHour.check_valid_value(minute.into())?;
        Ok(Self::create(
            self.hour(),
            minute as u8,
            self.second(),
            self.nanosecond(),
        ))
    }

    /// Return a copy with the second replaced.
    pub fn with_second(self, second: i32) -> Result<Self> {
        if i32::from(self.second()) == second {
            return Ok(self);
        }
        let second = ClockField::SecondOfMinute.check_valid_value(second.into())?;
        Ok(Self::create(
            self.hour(),
            self.minute(),
            second as u8,
            self.nanosecond(),
        ))
    }

    /// Return a copy with the nanosecond-of-second replaced.
    pub fn with_nanosecond(self, nanosecond: i32) -> Result<Self> {
        if i64::from(self.nanosecond()) == i64::from(nanosecond) {
            return Ok(self);
        }
        let nanosecond = ClockField::NanoOfSecond.check_valid_value(nanosecond.into())?;
        Ok(Self::create(
            self.hour(),
            self.minute(),
            self.second(),
            nanosecond as u32,
        ))
    }

    // ── truncation ────────────────────────────────────────────────────

    /// Zero every component finer than `unit`.
    ///
    /// The unit must be no longer than a day and must divide the day evenly;
    /// anything else fails with [`TimeError::UnsupportedUnit`].
    ///
    /// ```
    /// use walltime::{ClockUnit, TimeOfDay};
    ///
    /// let t = TimeOfDay::new(10, 15, 30, 123_456_789)?;
    /// assert_eq!(t.truncated_to(ClockUnit::Millis)?.to_string(), "10:15:30.123");
    /// assert_eq!(t.truncated_to(ClockUnit::Hours)?.to_string(), "10:00");
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn truncated_to<'a>(self, unit: impl Into<Unit<'a>>) -> Result<Self> {
        let unit = unit.into();
        if let Unit::Clock(ClockUnit::Nanos) = unit {
            return Ok(self);
        }
        let length = unit.duration_nanos();
        if length > NANOS_PER_DAY as i128 {
            return Err(TimeError::unsupported_unit(
                unit.name(),
                "unit is too large to be used for truncation",
            ));
        }
        if length <= 0 || NANOS_PER_DAY as i128 % length != 0 {
            return Err(TimeError::unsupported_unit(
                unit.name(),
                "unit must divide into a standard day without remainder",
            ));
        }
        // length divides the day, so it fits in i64.
        let length = length as i64;
        let nod = self.to_nano_of_day();
        Ok(Self::from_valid_nano_of_day(nod / length * length))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TemporalAccessor
// ═══════════════════════════════════════════════════════════════════════════

impl TemporalAccessor for TimeOfDay {
    fn is_supported(&self, field: Field<'_>) -> bool {
        TimeOfDay::is_supported(self, field)
    }

    fn get_long(&self, field: Field<'_>) -> Result<i64> {
        TimeOfDay::get_long(self, field)
    }

    fn range(&self, field: Field<'_>) -> Result<ValueRange> {
        TimeOfDay::range(self, field)
    }

    fn get(&self, field: Field<'_>) -> Result<i32> {
        TimeOfDay::get(self, field)
    }

    fn precision(&self) -> Option<ClockUnit> {
        Some(ClockUnit::Nanos)
    }

    fn local_time(&self) -> Option<TimeOfDay> {
        Some(*self)
    }
}
