// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-free arithmetic on [`TimeOfDay`].
//!
//! Every operation wraps around midnight: the result is always a valid time
//! and no day overflow is reported.  Callers that need to carry whole days
//! into a date must track them separately.
//!
//! Adding a zero amount of any unit, or an amount that lands on the same
//! clock position, returns `self` untouched without rebuilding the value.

use crate::error::{Result, TimeError};
use crate::time::{
    HOURS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR, NANOS_PER_DAY, NANOS_PER_HOUR,
    NANOS_PER_MINUTE, NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::unit::{ClockUnit, Unit};
use crate::TimeOfDay;
use chrono::TimeDelta;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const MICROS_PER_DAY: i64 = NANOS_PER_DAY / 1_000;
const MILLIS_PER_DAY: i64 = NANOS_PER_DAY / 1_000_000;

impl TimeOfDay {
    // ── unit-based arithmetic ─────────────────────────────────────────

    /// Return a copy moved forward by `amount` of `unit`, wrapping around
    /// midnight.
    ///
    /// The built-in time-based units are handled here; any other built-in
    /// unit fails with [`TimeError::UnsupportedUnit`], and caller-supplied
    /// units do their own work through
    /// [`TemporalUnit::add_to`](crate::TemporalUnit::add_to).
    ///
    /// ```
    /// use walltime::{ClockUnit, TimeOfDay};
    ///
    /// let t = TimeOfDay::from_hm(23, 30)?;
    /// assert_eq!(t.plus(90, ClockUnit::Minutes)?, TimeOfDay::from_hm(1, 0)?);
    /// assert_eq!(t.plus(3, ClockUnit::HalfDays)?, TimeOfDay::from_hm(11, 30)?);
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn plus<'a>(self, amount: i64, unit: impl Into<Unit<'a>>) -> Result<Self> {
        let unit = match unit.into() {
            Unit::Clock(u) => u,
            Unit::Custom(u) => {
                tracing::trace!(unit = u.name(), amount, "delegating addition to external unit");
                return u.add_to(self, amount);
            }
        };
        let time = match unit {
            ClockUnit::Nanos => self.plus_nanos(amount),
            ClockUnit::Micros => self.plus_nanos((amount % MICROS_PER_DAY) * 1_000),
            ClockUnit::Millis => self.plus_nanos((amount % MILLIS_PER_DAY) * 1_000_000),
            ClockUnit::Seconds => self.plus_seconds(amount),
            ClockUnit::Minutes => self.plus_minutes(amount),
            ClockUnit::Hours => self.plus_hours(amount),
            ClockUnit::HalfDays => self.plus_hours((amount % 2) * 12),
            other => {
                return Err(TimeError::unsupported_unit(
                    other.name(),
                    "not a time-of-day unit",
                ))
            }
        };
        Ok(time)
    }

    /// Return a copy moved backward by `amount` of `unit`, wrapping around
    /// midnight.
    ///
    /// `i64::MIN` cannot be negated, so it is applied as `i64::MAX` followed
    /// by one more unit.
    pub fn minus<'a>(self, amount: i64, unit: impl Into<Unit<'a>>) -> Result<Self> {
        let unit = unit.into();
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// Whole units from `self` to `end`.
    ///
    /// The nanosecond difference is divided by the unit length with
    /// truncation toward zero, so partial units never count and a negative
    /// difference yields a negative (or zero) result.
    ///
    /// ```
    /// use walltime::{ClockUnit, TimeOfDay};
    ///
    /// let start = TimeOfDay::from_hm(11, 30)?;
    /// let end = TimeOfDay::from_hm(13, 29)?;
    /// assert_eq!(start.until(end, ClockUnit::Hours)?, 1);
    /// assert_eq!(end.until(start, ClockUnit::Hours)?, -1);
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn until<'a>(self, end: TimeOfDay, unit: impl Into<Unit<'a>>) -> Result<i64> {
        let unit = match unit.into() {
            Unit::Clock(u) => u,
            Unit::Custom(u) => {
                tracing::trace!(unit = u.name(), "delegating difference to external unit");
                return u.between(&self, &end);
            }
        };
        let nanos = end.to_nano_of_day() - self.to_nano_of_day();
        let count = match unit {
            ClockUnit::Nanos => nanos,
            ClockUnit::Micros => nanos / 1_000,
            ClockUnit::Millis => nanos / 1_000_000,
            ClockUnit::Seconds => nanos / NANOS_PER_SECOND,
            ClockUnit::Minutes => nanos / NANOS_PER_MINUTE,
            ClockUnit::Hours => nanos / NANOS_PER_HOUR,
            ClockUnit::HalfDays => nanos / (12 * NANOS_PER_HOUR),
            other => {
                return Err(TimeError::unsupported_unit(
                    other.name(),
                    "not a time-of-day unit",
                ))
            }
        };
        Ok(count)
    }

    // ── named shortcuts ───────────────────────────────────────────────

    /// Move forward by `hours`, wrapping around midnight.
    pub fn plus_hours(self, hours: i64) -> Self {
        if hours == 0 {
            return self;
        }
        let hour = ((hours % HOURS_PER_DAY) + self.hour() as i64 + HOURS_PER_DAY) % HOURS_PER_DAY;
        Self::create(hour as u8, self.minute(), self.second(), self.nanosecond())
    }

    /// Move forward by `minutes`, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        if minutes == 0 {
            return self;
        }
        let mofd = self.hour() as i64 * MINUTES_PER_HOUR + self.minute() as i64;
        let new_mofd = ((minutes % MINUTES_PER_DAY) + mofd + MINUTES_PER_DAY) % MINUTES_PER_DAY;
        if mofd == new_mofd {
            return self;
        }
        Self::create(
            (new_mofd / MINUTES_PER_HOUR) as u8,
            (new_mofd % MINUTES_PER_HOUR) as u8,
            self.second(),
            self.nanosecond(),
        )
    }

    /// Move forward by `seconds`, wrapping around midnight.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        if seconds == 0 {
            return self;
        }
        let sofd = self.to_second_of_day() as i64;
        let new_sofd = ((seconds % SECONDS_PER_DAY) + sofd + SECONDS_PER_DAY) % SECONDS_PER_DAY;
        if sofd == new_sofd {
            return self;
        }
        Self::create(
            (new_sofd / SECONDS_PER_HOUR) as u8,
            ((new_sofd / SECONDS_PER_MINUTE) % MINUTES_PER_HOUR) as u8,
            (new_sofd % SECONDS_PER_MINUTE) as u8,
            self.nanosecond(),
        )
    }

    /// Move forward by `nanos`, wrapping around midnight.
    pub fn plus_nanos(self, nanos: i64) -> Self {
        if nanos == 0 {
            return self;
        }
        let nofd = self.to_nano_of_day();
        let new_nofd = ((nanos % NANOS_PER_DAY) + nofd + NANOS_PER_DAY) % NANOS_PER_DAY;
        if nofd == new_nofd {
            return self;
        }
        Self::from_valid_nano_of_day(new_nofd)
    }

    /// Move backward by `hours`, wrapping around midnight.
    pub fn minus_hours(self, hours: i64) -> Self {
        self.plus_hours(-(hours % HOURS_PER_DAY))
    }

    /// Move backward by `minutes`, wrapping around midnight.
    pub fn minus_minutes(self, minutes: i64) -> Self {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    /// Move backward by `seconds`, wrapping around midnight.
    pub fn minus_seconds(self, seconds: i64) -> Self {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    /// Move backward by `nanos`, wrapping around midnight.
    pub fn minus_nanos(self, nanos: i64) -> Self {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }

    /// Move by a [`TimeDelta`], wrapping around midnight.
    pub fn wrapping_add(self, delta: TimeDelta) -> Self {
        self.plus_seconds(delta.num_seconds() % SECONDS_PER_DAY)
            .plus_nanos(delta.subsec_nanos().into())
    }

    /// Move back by a [`TimeDelta`], wrapping around midnight.
    pub fn wrapping_sub(self, delta: TimeDelta) -> Self {
        self.minus_seconds(delta.num_seconds() % SECONDS_PER_DAY)
            .minus_nanos(delta.subsec_nanos().into())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════════

impl Add<TimeDelta> for TimeOfDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: TimeDelta) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign<TimeDelta> for TimeOfDay {
    #[inline]
    fn add_assign(&mut self, rhs: TimeDelta) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub<TimeDelta> for TimeOfDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: TimeDelta) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign<TimeDelta> for TimeOfDay {
    #[inline]
    fn sub_assign(&mut self, rhs: TimeDelta) {
        *self = self.wrapping_sub(rhs);
    }
}

/// Signed distance from `rhs` to `self` within the same day.
impl Sub for TimeOfDay {
    type Output = TimeDelta;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        TimeDelta::nanoseconds(self.to_nano_of_day() - rhs.to_nano_of_day())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
