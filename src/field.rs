// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Temporal fields.
//!
//! A **field** is a named, range-bounded numeric aspect of a temporal value,
//! such as minute-of-hour or nano-of-day.  Fields come in two flavours:
//!
//! - [`ClockField`] — the closed set of built-in fields.  The time-based ones
//!   are resolved by [`TimeOfDay`] directly on its stored components; the
//!   date- and offset-based ones are recognised but unsupported by it.
//! - Any implementor of [`TemporalField`] supplied by the caller.  Such a
//!   field carries its own extraction and adjustment logic, and the value
//!   type simply hands itself over.
//!
//! [`Field`] is the dispatch enum joining both flavours; every `get`/`with`
//! entry point accepts `impl Into<Field>`.
//!
//! | Field | Range |
//! |-------|-------|
//! | [`ClockField::NanoOfSecond`] | 0 – 999 999 999 |
//! | [`ClockField::NanoOfDay`] | 0 – 86 399 999 999 999 |
//! | [`ClockField::MicroOfSecond`] | 0 – 999 999 |
//! | [`ClockField::MicroOfDay`] | 0 – 86 399 999 999 |
//! | [`ClockField::MilliOfSecond`] | 0 – 999 |
//! | [`ClockField::MilliOfDay`] | 0 – 86 399 999 |
//! | [`ClockField::SecondOfMinute`] | 0 – 59 |
//! | [`ClockField::SecondOfDay`] | 0 – 86 399 |
//! | [`ClockField::MinuteOfHour`] | 0 – 59 |
//! | [`ClockField::MinuteOfDay`] | 0 – 1 439 |
//! | [`ClockField::HourOfAmPm`] | 0 – 11 |
//! | [`ClockField::ClockHourOfAmPm`] | 1 – 12 |
//! | [`ClockField::HourOfDay`] | 0 – 23 |
//! | [`ClockField::ClockHourOfDay`] | 1 – 24 |
//! | [`ClockField::AmPmOfDay`] | 0 – 1 |

use crate::accessor::TemporalAccessor;
use crate::error::{Result, TimeError};
use crate::time::{NANOS_PER_DAY, SECONDS_PER_DAY};
use crate::TimeOfDay;
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// ValueRange
// ═══════════════════════════════════════════════════════════════════════════

/// Inclusive bounds of the values a field may take.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Build a range from its inclusive bounds.
    #[inline]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Smallest legal value.
    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Largest legal value.
    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Whether `value` lies within the bounds.
    #[inline]
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether every legal value fits in an `i32`.
    #[inline]
    pub const fn is_int_value(&self) -> bool {
        self.min >= i32::MIN as i64 && self.max <= i32::MAX as i64
    }

    /// Validate `value` for the field called `field`.
    pub fn check_valid_value(&self, value: i64, field: &str) -> Result<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(TimeError::range(field, value, self.min, self.max))
        }
    }

    /// Validate `value` and narrow it to `i32`.
    ///
    /// Fails with [`TimeError::Overflow`] when the range itself is wider than
    /// an `i32`, even if this particular value would fit.
    pub fn check_valid_int_value(&self, value: i64, field: &str) -> Result<i32> {
        if !self.is_int_value() {
            return Err(TimeError::Overflow {
                field: field.to_owned(),
                value,
            });
        }
        let value = self.check_valid_value(value, field)?;
        // In range and the range is int-sized.
        Ok(value as i32)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TemporalField trait
// ═══════════════════════════════════════════════════════════════════════════

/// Capability contract for a field supplied from outside the crate.
///
/// The value type never inspects such a field: reads go through
/// [`get_from`](Self::get_from) and writes through
/// [`adjust_into`](Self::adjust_into).
pub trait TemporalField: fmt::Debug {
    /// Display name, used in error messages.
    fn name(&self) -> &str;

    /// Whether the field describes a time-of-day aspect.
    fn is_time_based(&self) -> bool;

    /// Whether the field describes a calendar-date aspect.
    fn is_date_based(&self) -> bool;

    /// Legal values of the field.
    fn range(&self) -> ValueRange;

    /// Validate a candidate value against [`range`](Self::range).
    fn check_valid_value(&self, value: i64) -> Result<i64> {
        self.range().check_valid_value(value, self.name())
    }

    /// Whether the field can be read from `temporal`.
    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    /// Extract the field's value from `temporal`.
    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64>;

    /// Return a copy of `time` with this field set to `value`.
    fn adjust_into(&self, time: TimeOfDay, value: i64) -> Result<TimeOfDay>;
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockField — built-in fields
// ═══════════════════════════════════════════════════════════════════════════

/// The built-in fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClockField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    MonthOfYear,
    Year,
    EpochDay,
    OffsetSeconds,
}

impl ClockField {
    /// Every built-in field, in declaration order.
    pub const ALL: [ClockField; 22] = [
        ClockField::NanoOfSecond,
        ClockField::NanoOfDay,
        ClockField::MicroOfSecond,
        ClockField::MicroOfDay,
        ClockField::MilliOfSecond,
        ClockField::MilliOfDay,
        ClockField::SecondOfMinute,
        ClockField::SecondOfDay,
        ClockField::MinuteOfHour,
        ClockField::MinuteOfDay,
        ClockField::HourOfAmPm,
        ClockField::ClockHourOfAmPm,
        ClockField::HourOfDay,
        ClockField::ClockHourOfDay,
        ClockField::AmPmOfDay,
        ClockField::DayOfWeek,
        ClockField::DayOfMonth,
        ClockField::DayOfYear,
        ClockField::MonthOfYear,
        ClockField::Year,
        ClockField::EpochDay,
        ClockField::OffsetSeconds,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ClockField::NanoOfSecond => "NanoOfSecond",
            ClockField::NanoOfDay => "NanoOfDay",
            ClockField::MicroOfSecond => "MicroOfSecond",
            ClockField::MicroOfDay => "MicroOfDay",
            ClockField::MilliOfSecond => "MilliOfSecond",
            ClockField::MilliOfDay => "MilliOfDay",
            ClockField::SecondOfMinute => "SecondOfMinute",
            ClockField::SecondOfDay => "SecondOfDay",
            ClockField::MinuteOfHour => "MinuteOfHour",
            ClockField::MinuteOfDay => "MinuteOfDay",
            ClockField::HourOfAmPm => "HourOfAmPm",
            ClockField::ClockHourOfAmPm => "ClockHourOfAmPm",
            ClockField::HourOfDay => "HourOfDay",
            ClockField::ClockHourOfDay => "ClockHourOfDay",
            ClockField::AmPmOfDay => "AmPmOfDay",
            ClockField::DayOfWeek => "DayOfWeek",
            ClockField::DayOfMonth => "DayOfMonth",
            ClockField::DayOfYear => "DayOfYear",
            ClockField::MonthOfYear => "MonthOfYear",
            ClockField::Year => "Year",
            ClockField::EpochDay => "EpochDay",
            ClockField::OffsetSeconds => "OffsetSeconds",
        }
    }

    /// Legal values of the field.
    pub const fn range(self) -> ValueRange {
        match self {
            ClockField::NanoOfSecond => ValueRange::new(0, 999_999_999),
            ClockField::NanoOfDay => ValueRange::new(0, NANOS_PER_DAY - 1),
            ClockField::MicroOfSecond => ValueRange::new(0, 999_999),
            ClockField::MicroOfDay => ValueRange::new(0, NANOS_PER_DAY / 1_000 - 1),
            ClockField::MilliOfSecond => ValueRange::new(0, 999),
            ClockField::MilliOfDay => ValueRange::new(0, NANOS_PER_DAY / 1_000_000 - 1),
            ClockField::SecondOfMinute => ValueRange::new(0, 59),
            ClockField::SecondOfDay => ValueRange::new(0, SECONDS_PER_DAY - 1),
            ClockField::MinuteOfHour => ValueRange::new(0, 59),
            ClockField::MinuteOfDay => ValueRange::new(0, 24 * 60 - 1),
            ClockField::HourOfAmPm => ValueRange::new(0, 11),
            ClockField::ClockHourOfAmPm => ValueRange::new(1, 12),
            ClockField::HourOfDay => ValueRange::new(0, 23),
            ClockField::ClockHourOfDay => ValueRange::new(1, 24),
            ClockField::AmPmOfDay => ValueRange::new(0, 1),
            ClockField::DayOfWeek => ValueRange::new(1, 7),
            ClockField::DayOfMonth => ValueRange::new(1, 31),
            ClockField::DayOfYear => ValueRange::new(1, 366),
            ClockField::MonthOfYear => ValueRange::new(1, 12),
            ClockField::Year => ValueRange::new(-999_999_999, 999_999_999),
            ClockField::EpochDay => ValueRange::new(-365_243_219_162, 365_241_780_471),
            ClockField::OffsetSeconds => ValueRange::new(-18 * 3600, 18 * 3600),
        }
    }

    /// Whether the field describes a time-of-day aspect.
    #[inline]
    pub const fn is_time_based(self) -> bool {
        (self as u8) <= (ClockField::AmPmOfDay as u8)
    }

    /// Whether the field describes a calendar-date aspect.
    #[inline]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            ClockField::DayOfWeek
                | ClockField::DayOfMonth
                | ClockField::DayOfYear
                | ClockField::MonthOfYear
                | ClockField::Year
                | ClockField::EpochDay
        )
    }

    /// Validate a candidate value against [`range`](Self::range).
    #[inline]
    pub fn check_valid_value(self, value: i64) -> Result<i64> {
        self.range().check_valid_value(value, self.name())
    }

    /// Validate a candidate value and narrow it to `i32`.
    #[inline]
    pub fn check_valid_int_value(self, value: i64) -> Result<i32> {
        self.range().check_valid_int_value(value, self.name())
    }
}

impl fmt::Display for ClockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TemporalField for ClockField {
    fn name(&self) -> &str {
        ClockField::name(*self)
    }

    fn is_time_based(&self) -> bool {
        ClockField::is_time_based(*self)
    }

    fn is_date_based(&self) -> bool {
        ClockField::is_date_based(*self)
    }

    fn range(&self) -> ValueRange {
        ClockField::range(*self)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(Field::Clock(*self))
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64> {
        temporal.get_long(Field::Clock(*self))
    }

    fn adjust_into(&self, time: TimeOfDay, value: i64) -> Result<TimeOfDay> {
        time.with(*self, value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Field — dispatch enum
// ═══════════════════════════════════════════════════════════════════════════

/// A field reference: either built-in or caller supplied.
#[derive(Debug, Copy, Clone)]
pub enum Field<'a> {
    /// One of the built-in fields, resolved on the fast path.
    Clock(ClockField),
    /// A caller-supplied field that carries its own logic.
    Custom(&'a dyn TemporalField),
}

impl Field<'_> {
    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Field::Clock(f) => f.name(),
            Field::Custom(f) => f.name(),
        }
    }

    /// Whether the field describes a time-of-day aspect.
    pub fn is_time_based(&self) -> bool {
        match self {
            Field::Clock(f) => f.is_time_based(),
            Field::Custom(f) => f.is_time_based(),
        }
    }

    /// Legal values of the field.
    pub fn range(&self) -> ValueRange {
        match self {
            Field::Clock(f) => f.range(),
            Field::Custom(f) => f.range(),
        }
    }
}

impl From<ClockField> for Field<'static> {
    #[inline]
    fn from(field: ClockField) -> Self {
        Field::Clock(field)
    }
}

impl<'a, F: TemporalField> From<&'a F> for Field<'a> {
    #[inline]
    fn from(field: &'a F) -> Self {
        Field::Custom(field)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
