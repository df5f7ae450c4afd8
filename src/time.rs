// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The wall-clock time-of-day value.
//!
//! [`TimeOfDay`] is the core type of the crate.  It stores an hour, minute,
//! second and nanosecond on a single 24-hour clock with no date and no
//! offset.  Values are `Copy` and can only be produced by the validating
//! constructors below (or by operations that keep the invariants by
//! construction, such as wrapping arithmetic).
//!
//! The field engine (`get`/`with`), the arithmetic engine, the text form and
//! the binary codec live in sibling modules as further `impl TimeOfDay`
//! blocks.

use crate::accessor::TemporalAccessor;
use crate::error::{Result, TimeError};
use crate::field::{ClockField, Field};
use chrono::{NaiveTime, Timelike};
use qtty::Days;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE;
pub(crate) const NANOS_PER_HOUR: i64 = NANOS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const NANOS_PER_DAY: i64 = NANOS_PER_HOUR * HOURS_PER_DAY;

// ═══════════════════════════════════════════════════════════════════════════
// TimeOfDay
// ═══════════════════════════════════════════════════════════════════════════

/// A time of day with nanosecond resolution, such as `10:15:30.123`.
///
/// Equality, hashing and ordering are by value; ordering is lexicographic by
/// hour, minute, second and nanosecond, which coincides with the order of
/// the nanosecond-of-day.
///
/// ```
/// use walltime::TimeOfDay;
///
/// let t = TimeOfDay::new(10, 15, 30, 123_000_000)?;
/// assert_eq!(t.to_string(), "10:15:30.123");
/// assert_eq!(t.to_nano_of_day(), 36_930_123_000_000);
/// # Ok::<(), walltime::TimeError>(())
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

/// Hour-exact values, indexed by hour.
static HOURS: [TimeOfDay; 24] = build_hours();

const fn build_hours() -> [TimeOfDay; 24] {
    let mut hours = [TimeOfDay::MIDNIGHT; 24];
    let mut h = 0;
    while h < 24 {
        hours[h] = TimeOfDay::raw(h as u8, 0, 0, 0);
        h += 1;
    }
    hours
}

impl TimeOfDay {
    /// 00:00, the start of the day.
    pub const MIN: Self = Self::raw(0, 0, 0, 0);

    /// 23:59:59.999999999, the last representable instant of the day.
    pub const MAX: Self = Self::raw(23, 59, 59, 999_999_999);

    /// 00:00.
    pub const MIDNIGHT: Self = Self::raw(0, 0, 0, 0);

    /// 12:00.
    pub const NOON: Self = Self::raw(12, 0, 0, 0);

    #[inline]
    const fn raw(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Assemble already-validated components, sharing the hour table when
    /// the sub-hour components are all zero.
    #[inline]
    pub(crate) fn create(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        if (minute | second) == 0 && nanosecond == 0 {
            HOURS[hour as usize]
        } else {
            Self::raw(hour, minute, second, nanosecond)
        }
    }

    // ── constructors ──────────────────────────────────────────────────

    /// Create from hour, minute, second and nanosecond.
    ///
    /// Each component is checked against its field before anything is built.
    pub fn new(hour: i32, minute: i32, second: i32, nanosecond: i32) -> Result<Self> {
        let hour = ClockField::HourOfDay.check_valid_value(hour.into())?;
        let minute = ClockField::MinuteOfHour.check_valid_value(minute.into())?;
        let second = ClockField::SecondOfMinute.check_valid_value(second.into())?;
        let nanosecond = ClockField::NanoOfSecond.check_valid_value(nanosecond.into())?;
        Ok(Self::create(
            hour as u8,
            minute as u8,
            second as u8,
            nanosecond as u32,
        ))
    }

    /// Create from hour and minute; second and nanosecond are zero.
    pub fn from_hm(hour: i32, minute: i32) -> Result<Self> {
        Self::new(hour, minute, 0, 0)
    }

    /// Create from hour, minute and second; nanosecond is zero.
    pub fn from_hms(hour: i32, minute: i32, second: i32) -> Result<Self> {
        Self::new(hour, minute, second, 0)
    }

    /// Create from a second-of-day, `0..86_400`.
    pub fn from_second_of_day(second_of_day: i64) -> Result<Self> {
        Self::from_second_of_day_nanos(second_of_day, 0)
    }

    /// Create from a second-of-day and a nanosecond-of-second.
    pub fn from_second_of_day_nanos(second_of_day: i64, nanosecond: i64) -> Result<Self> {
        let sod = ClockField::SecondOfDay.check_valid_value(second_of_day)?;
        let nanosecond = ClockField::NanoOfSecond.check_valid_value(nanosecond)?;
        Ok(Self::create(
            (sod / SECONDS_PER_HOUR) as u8,
            (sod / SECONDS_PER_MINUTE % MINUTES_PER_HOUR) as u8,
            (sod % SECONDS_PER_MINUTE) as u8,
            nanosecond as u32,
        ))
    }

    /// Create from a nanosecond-of-day, `0..86_400_000_000_000`.
    pub fn from_nano_of_day(nano_of_day: i64) -> Result<Self> {
        let nod = ClockField::NanoOfDay.check_valid_value(nano_of_day)?;
        Ok(Self::from_valid_nano_of_day(nod))
    }

    /// `nano_of_day` must already lie in `0..NANOS_PER_DAY`.
    pub(crate) fn from_valid_nano_of_day(nano_of_day: i64) -> Self {
        debug_assert!((0..NANOS_PER_DAY).contains(&nano_of_day));
        let hour = nano_of_day / NANOS_PER_HOUR;
        let rem = nano_of_day - hour * NANOS_PER_HOUR;
        let minute = rem / NANOS_PER_MINUTE;
        let rem = rem - minute * NANOS_PER_MINUTE;
        let second = rem / NANOS_PER_SECOND;
        let nanosecond = rem - second * NANOS_PER_SECOND;
        Self::create(hour as u8, minute as u8, second as u8, nanosecond as u32)
    }

    /// Extract the time of day from any temporal source.
    ///
    /// The source's own [`local_time`](TemporalAccessor::local_time) answer
    /// wins; otherwise its [`NanoOfDay`](ClockField::NanoOfDay) field is
    /// used.  A source offering neither yields [`TimeError::Conversion`].
    pub fn from_temporal<T: TemporalAccessor + ?Sized>(temporal: &T) -> Result<Self> {
        if let Some(time) = temporal.local_time() {
            return Ok(time);
        }
        let field = Field::Clock(ClockField::NanoOfDay);
        if temporal.is_supported(field) {
            return Self::from_nano_of_day(temporal.get_long(field)?);
        }
        tracing::debug!("temporal source has no time-of-day component");
        Err(TimeError::Conversion {
            reason: "source supplies neither a local time nor a nano-of-day".to_owned(),
        })
    }

    /// Create from a fraction of the day in `[0, 1)`, rounded to the nearest
    /// nanosecond.
    pub fn from_day_fraction(fraction: Days) -> Result<Self> {
        let value = fraction.value();
        if !value.is_finite() || !(0.0..1.0).contains(&value) {
            return Err(TimeError::Conversion {
                reason: format!("day fraction {value} is outside [0, 1)"),
            });
        }
        let nanos = (value * NANOS_PER_DAY as f64).round() as i64;
        Ok(Self::from_valid_nano_of_day(nanos.min(NANOS_PER_DAY - 1)))
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Hour of day, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of minute, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Nanosecond of second, `0..=999_999_999`.
    #[inline]
    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Seconds elapsed since midnight.
    #[inline]
    pub const fn to_second_of_day(&self) -> i32 {
        self.hour as i32 * SECONDS_PER_HOUR as i32
            + self.minute as i32 * SECONDS_PER_MINUTE as i32
            + self.second as i32
    }

    /// Nanoseconds elapsed since midnight.
    #[inline]
    pub const fn to_nano_of_day(&self) -> i64 {
        self.hour as i64 * NANOS_PER_HOUR
            + self.minute as i64 * NANOS_PER_MINUTE
            + self.second as i64 * NANOS_PER_SECOND
            + self.nanosecond as i64
    }

    /// Fraction of the day elapsed since midnight.
    #[inline]
    pub fn day_fraction(&self) -> Days {
        Days::new(self.to_nano_of_day() as f64 / NANOS_PER_DAY as f64)
    }

    // ── comparisons ───────────────────────────────────────────────────

    /// Whether `self` is strictly earlier than `other`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Whether `self` is strictly later than `other`.
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

// ── chrono ────────────────────────────────────────────────────────────────

impl From<NaiveTime> for TimeOfDay {
    /// Leap-second representations (nanosecond ≥ 1e9) fold onto the last
    /// nanosecond of the second.
    fn from(time: NaiveTime) -> Self {
        Self::create(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            time.nanosecond().min(NANOS_PER_SECOND as u32 - 1),
        )
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_nano_opt(
            time.hour.into(),
            time.minute.into(),
            time.second.into(),
            time.nanosecond,
        )
        .unwrap_or(NaiveTime::MIN)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeVisitor;

        impl de::Visitor<'_> for TimeVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an ISO-8601 local time such as \"10:15:30\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<TimeOfDay, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
