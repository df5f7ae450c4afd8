// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sources of the current time.
//!
//! A [`Clock`] answers two questions: what instant it is, and which UTC
//! offset the wall clock shows.  [`TimeOfDay::now_with`] combines both into
//! the local time of day.  Tests can pin time with a [`FixedClock`].

use crate::time::{NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::TimeOfDay;
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Access to the current instant and the wall-clock offset.
pub trait Clock {
    /// Current instant.
    fn instant(&self) -> DateTime<Utc>;

    /// Offset of the wall clock from UTC.
    fn offset(&self) -> FixedOffset;
}

/// Operating-system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        Local::now().offset().fix()
    }
}

/// Operating-system clock read in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        Utc.fix()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Stop the clock at `instant`, viewed through `offset`.
    pub const fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl TimeOfDay {
    /// Current local time of day from the system clock.
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Current time of day in UTC.
    pub fn now_utc() -> Self {
        Self::now_with(&UtcClock)
    }

    /// Current time of day according to `clock`.
    ///
    /// A leap second reported by the clock is folded into the last
    /// nanosecond of the preceding second.
    ///
    /// ```
    /// use chrono::{DateTime, FixedOffset};
    /// use walltime::{FixedClock, TimeOfDay};
    ///
    /// let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    /// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    /// let t = TimeOfDay::now_with(&FixedClock::new(at, tokyo));
    /// assert_eq!(t.to_string(), "07:13:20");
    /// ```
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        let instant = clock.instant();
        let local = instant.timestamp() + i64::from(clock.offset().local_minus_utc());
        let second_of_day = local.rem_euclid(SECONDS_PER_DAY);
        let nanos = i64::from(instant.timestamp_subsec_nanos()).min(NANOS_PER_SECOND - 1);
        Self::from_valid_nano_of_day(second_of_day * NANOS_PER_SECOND + nanos)
    }
}
