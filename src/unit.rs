// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Temporal units.
//!
//! A **unit** is a duration granularity used for arithmetic, truncation and
//! differences.  As with fields, the built-in units form a closed enum,
//! [`ClockUnit`], and callers may plug in their own through
//! [`TemporalUnit`].  [`Unit`] joins both.
//!
//! | Unit | Length | Time-based |
//! |------|--------|------------|
//! | [`ClockUnit::Nanos`] | 1 ns | yes |
//! | [`ClockUnit::Micros`] | 1 µs | yes |
//! | [`ClockUnit::Millis`] | 1 ms | yes |
//! | [`ClockUnit::Seconds`] | 1 s | yes |
//! | [`ClockUnit::Minutes`] | 60 s | yes |
//! | [`ClockUnit::Hours`] | 3 600 s | yes |
//! | [`ClockUnit::HalfDays`] | 43 200 s | yes |
//! | [`ClockUnit::Days`] | 86 400 s (estimated) | no |
//! | [`ClockUnit::Weeks`] … [`ClockUnit::Eras`] | estimated | no |
//! | [`ClockUnit::Forever`] | effectively infinite | no |

use crate::error::Result;
use crate::time::{NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};
use crate::TimeOfDay;
use qtty::Seconds;
use std::fmt;

/// Length of the average Gregorian year in seconds (365.2425 days).
const SECONDS_PER_YEAR: i128 = 31_556_952;

const NANOS_PER_YEAR: i128 = SECONDS_PER_YEAR * NANOS_PER_SECOND as i128;

// ═══════════════════════════════════════════════════════════════════════════
// TemporalUnit trait
// ═══════════════════════════════════════════════════════════════════════════

/// Capability contract for a unit supplied from outside the crate.
pub trait TemporalUnit: fmt::Debug {
    /// Display name, used in error messages.
    fn name(&self) -> &str;

    /// Length of one unit in nanoseconds.
    fn duration_nanos(&self) -> i128;

    /// Whether [`duration_nanos`](Self::duration_nanos) is an estimate.
    fn is_duration_estimated(&self) -> bool;

    /// Whether the unit is a time-of-day granularity.
    fn is_time_based(&self) -> bool;

    /// Whether the unit is a calendar granularity.
    fn is_date_based(&self) -> bool;

    /// Whether [`add_to`](Self::add_to) accepts `time`.
    fn is_supported_by(&self, time: &TimeOfDay) -> bool;

    /// Return `time` moved by `amount` of this unit.
    fn add_to(&self, time: TimeOfDay, amount: i64) -> Result<TimeOfDay>;

    /// Whole units from `start` to `end`.
    fn between(&self, start: &TimeOfDay, end: &TimeOfDay) -> Result<i64>;
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockUnit — built-in units
// ═══════════════════════════════════════════════════════════════════════════

/// The built-in units, from finest to coarsest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClockUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl ClockUnit {
    /// Every built-in unit, finest first.
    pub const ALL: [ClockUnit; 16] = [
        ClockUnit::Nanos,
        ClockUnit::Micros,
        ClockUnit::Millis,
        ClockUnit::Seconds,
        ClockUnit::Minutes,
        ClockUnit::Hours,
        ClockUnit::HalfDays,
        ClockUnit::Days,
        ClockUnit::Weeks,
        ClockUnit::Months,
        ClockUnit::Years,
        ClockUnit::Decades,
        ClockUnit::Centuries,
        ClockUnit::Millennia,
        ClockUnit::Eras,
        ClockUnit::Forever,
    ];

    /// The units [`TimeOfDay`] performs arithmetic in.
    pub const TIME_BASED: [ClockUnit; 7] = [
        ClockUnit::Nanos,
        ClockUnit::Micros,
        ClockUnit::Millis,
        ClockUnit::Seconds,
        ClockUnit::Minutes,
        ClockUnit::Hours,
        ClockUnit::HalfDays,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ClockUnit::Nanos => "Nanos",
            ClockUnit::Micros => "Micros",
            ClockUnit::Millis => "Millis",
            ClockUnit::Seconds => "Seconds",
            ClockUnit::Minutes => "Minutes",
            ClockUnit::Hours => "Hours",
            ClockUnit::HalfDays => "HalfDays",
            ClockUnit::Days => "Days",
            ClockUnit::Weeks => "Weeks",
            ClockUnit::Months => "Months",
            ClockUnit::Years => "Years",
            ClockUnit::Decades => "Decades",
            ClockUnit::Centuries => "Centuries",
            ClockUnit::Millennia => "Millennia",
            ClockUnit::Eras => "Eras",
            ClockUnit::Forever => "Forever",
        }
    }

    /// Length of one unit in nanoseconds.
    ///
    /// `Forever` is `i64::MAX` seconds plus 999 999 999 ns, so the result
    /// needs the `i128` width.
    pub const fn duration_nanos(self) -> i128 {
        match self {
            ClockUnit::Nanos => 1,
            ClockUnit::Micros => 1_000,
            ClockUnit::Millis => 1_000_000,
            ClockUnit::Seconds => NANOS_PER_SECOND as i128,
            ClockUnit::Minutes => NANOS_PER_MINUTE as i128,
            ClockUnit::Hours => NANOS_PER_HOUR as i128,
            ClockUnit::HalfDays => 12 * NANOS_PER_HOUR as i128,
            ClockUnit::Days => 24 * NANOS_PER_HOUR as i128,
            ClockUnit::Weeks => 7 * 24 * NANOS_PER_HOUR as i128,
            ClockUnit::Months => NANOS_PER_YEAR / 12,
            ClockUnit::Years => NANOS_PER_YEAR,
            ClockUnit::Decades => NANOS_PER_YEAR * 10,
            ClockUnit::Centuries => NANOS_PER_YEAR * 100,
            ClockUnit::Millennia => NANOS_PER_YEAR * 1_000,
            ClockUnit::Eras => NANOS_PER_YEAR * 1_000_000_000,
            ClockUnit::Forever => {
                i64::MAX as i128 * NANOS_PER_SECOND as i128 + 999_999_999
            }
        }
    }

    /// Length of one unit as a [`Seconds`] quantity.
    #[inline]
    pub fn duration(self) -> Seconds {
        Seconds::new(self.duration_nanos() as f64 / NANOS_PER_SECOND as f64)
    }

    /// Days and everything coarser have estimated lengths.
    #[inline]
    pub const fn is_duration_estimated(self) -> bool {
        (self as u8) >= (ClockUnit::Days as u8)
    }

    /// Whether the unit is a time-of-day granularity.
    #[inline]
    pub const fn is_time_based(self) -> bool {
        (self as u8) < (ClockUnit::Days as u8)
    }

    /// Whether the unit is a calendar granularity.
    #[inline]
    pub const fn is_date_based(self) -> bool {
        (self as u8) >= (ClockUnit::Days as u8) && !matches!(self, ClockUnit::Forever)
    }
}

impl fmt::Display for ClockUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TemporalUnit for ClockUnit {
    fn name(&self) -> &str {
        ClockUnit::name(*self)
    }

    fn duration_nanos(&self) -> i128 {
        ClockUnit::duration_nanos(*self)
    }

    fn is_duration_estimated(&self) -> bool {
        ClockUnit::is_duration_estimated(*self)
    }

    fn is_time_based(&self) -> bool {
        ClockUnit::is_time_based(*self)
    }

    fn is_date_based(&self) -> bool {
        ClockUnit::is_date_based(*self)
    }

    fn is_supported_by(&self, time: &TimeOfDay) -> bool {
        time.is_supported_unit(*self)
    }

    fn add_to(&self, time: TimeOfDay, amount: i64) -> Result<TimeOfDay> {
        time.plus(amount, *self)
    }

    fn between(&self, start: &TimeOfDay, end: &TimeOfDay) -> Result<i64> {
        start.until(*end, *self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit — dispatch enum
// ═══════════════════════════════════════════════════════════════════════════

/// A unit reference: either built-in or caller supplied.
#[derive(Debug, Copy, Clone)]
pub enum Unit<'a> {
    /// One of the built-in units, handled on the fast path.
    Clock(ClockUnit),
    /// A caller-supplied unit that carries its own logic.
    Custom(&'a dyn TemporalUnit),
}

impl Unit<'_> {
    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Unit::Clock(u) => u.name(),
            Unit::Custom(u) => u.name(),
        }
    }

    /// Length of one unit in nanoseconds.
    pub fn duration_nanos(&self) -> i128 {
        match self {
            Unit::Clock(u) => u.duration_nanos(),
            Unit::Custom(u) => u.duration_nanos(),
        }
    }

    /// Whether the unit is a time-of-day granularity.
    pub fn is_time_based(&self) -> bool {
        match self {
            Unit::Clock(u) => u.is_time_based(),
            Unit::Custom(u) => u.is_time_based(),
        }
    }
}

impl From<ClockUnit> for Unit<'static> {
    #[inline]
    fn from(unit: ClockUnit) -> Self {
        Unit::Clock(unit)
    }
}

impl<'a, U: TemporalUnit> From<&'a U> for Unit<'a> {
    #[inline]
    fn from(unit: &'a U) -> Self {
        Unit::Custom(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Day, Days};

    #[test]
    fn test_durations() {
        assert_eq!(ClockUnit::Nanos.duration_nanos(), 1);
        assert_eq!(ClockUnit::HalfDays.duration_nanos(), 43_200_000_000_000);
        assert_eq!(ClockUnit::Days.duration_nanos(), 86_400_000_000_000);
        assert_eq!(ClockUnit::Months.duration_nanos(), 2_629_746_000_000_000);
        assert!(ClockUnit::Forever.duration_nanos() > i64::MAX as i128);
    }

    #[test]
    fn test_duration_as_quantity() {
        assert_eq!(ClockUnit::Minutes.duration(), Seconds::new(60.0));
        let day = ClockUnit::Days.duration().to::<Day>();
        assert!((day - Days::new(1.0)).abs() < Days::new(1e-12));
    }

    #[test]
    fn test_classification() {
        for unit in ClockUnit::TIME_BASED {
            assert!(unit.is_time_based(), "{unit}");
            assert!(!unit.is_duration_estimated(), "{unit}");
        }
        assert!(ClockUnit::Days.is_date_based());
        assert!(ClockUnit::Days.is_duration_estimated());
        assert!(!ClockUnit::Forever.is_date_based());
        assert!(!ClockUnit::Forever.is_time_based());
    }

    #[test]
    fn test_units_are_ordered_by_length() {
        for pair in ClockUnit::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].duration_nanos() < pair[1].duration_nanos());
        }
    }
}
