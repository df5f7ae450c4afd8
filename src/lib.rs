// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time of day
//!
//! This crate provides an immutable, nanosecond-precision time of day with no
//! date and no time zone, such as `10:15:30.500`.
//!
//! # Core types
//!
//! - [`TimeOfDay`] — a validated `(hour, minute, second, nanosecond)` value.
//! - [`ClockField`] / [`TemporalField`] — named, range-bounded fields, built-in
//!   or supplied by the caller.
//! - [`ClockUnit`] / [`TemporalUnit`] — duration granularities, built-in or
//!   supplied by the caller.
//! - [`TemporalAccessor`] — read-only field access to any temporal value.
//! - [`ValueRange`] — inclusive bounds of a field.
//! - [`OffsetTime`] — a time of day paired with a UTC offset.
//! - [`Clock`] — source of the current instant.
//! - [`TimeFormatter`] — text rendering and parsing, with [`IsoLocalTime`] as
//!   the default.
//! - [`TimeError`] — every failure the crate can report.
//!
//! # Operations
//!
//! | Area | Entry points |
//! |------|--------------|
//! | Construction | [`TimeOfDay::new`], [`from_second_of_day`](TimeOfDay::from_second_of_day), [`from_nano_of_day`](TimeOfDay::from_nano_of_day), [`from_temporal`](TimeOfDay::from_temporal), [`parse`](TimeOfDay::parse), [`now`](TimeOfDay::now) |
//! | Field access | [`get`](TimeOfDay::get), [`get_long`](TimeOfDay::get_long), [`with`](TimeOfDay::with), [`range`](TimeOfDay::range), [`truncated_to`](TimeOfDay::truncated_to) |
//! | Arithmetic | [`plus`](TimeOfDay::plus), [`minus`](TimeOfDay::minus), [`until`](TimeOfDay::until), `+`/`-` with `chrono::TimeDelta` |
//! | Text | `Display`, `FromStr` |
//! | Binary | [`encode`](TimeOfDay::encode), [`decode`](TimeOfDay::decode), [`write_to`](TimeOfDay::write_to), [`read_from`](TimeOfDay::read_from) |
//! | Composition | [`at_date`](TimeOfDay::at_date), [`at_offset`](TimeOfDay::at_offset), [`to_epoch_second`](TimeOfDay::to_epoch_second) |
//!
//! All arithmetic wraps around midnight.
//!
//! ```
//! use walltime::{ClockField, ClockUnit, TimeOfDay};
//!
//! let t: TimeOfDay = "23:45".parse()?;
//! let later = t.plus(30, ClockUnit::Minutes)?;
//! assert_eq!(later.to_string(), "00:15");
//! assert_eq!(later.get(ClockField::MinuteOfDay)?, 15);
//! # Ok::<(), walltime::TimeError>(())
//! ```

mod access;
mod accessor;
mod arith;
mod clock;
mod codec;
mod compose;
mod error;
mod field;
mod format;
pub(crate) mod time;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use accessor::TemporalAccessor;
pub use clock::{Clock, FixedClock, SystemClock, UtcClock};
pub use compose::OffsetTime;
pub use error::{Result, TimeError};
pub use field::{ClockField, Field, TemporalField, ValueRange};
pub use format::{IsoLocalTime, TimeFormatter};
pub use time::TimeOfDay;
pub use unit::{ClockUnit, TemporalUnit, Unit};
