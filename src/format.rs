// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical text form of [`TimeOfDay`].
//!
//! The canonical rendering is the shortest ISO-8601 local time that keeps
//! every non-zero component:
//!
//! | value                 | text                 |
//! |-----------------------|----------------------|
//! | 10:15, second 0       | `10:15`              |
//! | 10:15:30              | `10:15:30`           |
//! | 10:15:30 + 500 ms     | `10:15:30.500`       |
//! | 10:15:30 + 1 500 ns   | `10:15:30.000001500` |
//!
//! Parsing goes through the [`TimeFormatter`] contract.  [`IsoLocalTime`] is
//! the default formatter and reads everything the canonical form writes,
//! plus fractions of any width from one to nine digits.

use crate::error::{Result, TimeError};
use crate::TimeOfDay;
use std::fmt;
use std::str::FromStr;

/// Renders and parses [`TimeOfDay`] values in some textual layout.
pub trait TimeFormatter {
    /// Render `time` as text.
    fn format(&self, time: TimeOfDay) -> String;

    /// Read a time from `text`, validating every component.
    fn parse(&self, text: &str) -> Result<TimeOfDay>;
}

/// ISO-8601 extended local time: `HH:mm[:ss[.fffffffff]]`.
///
/// Hours and minutes are mandatory and always two digits.  The fraction, if
/// present, has between one and nine digits and is read as a decimal
/// fraction of a second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoLocalTime;

impl TimeFormatter for IsoLocalTime {
    fn format(&self, time: TimeOfDay) -> String {
        time.to_string()
    }

    fn parse(&self, text: &str) -> Result<TimeOfDay> {
        let mut cursor = Cursor::new(text);
        let hour = cursor.two_digits("expected two-digit hour")?;
        cursor.expect(b':', "expected ':' after hour")?;
        let minute = cursor.two_digits("expected two-digit minute")?;

        let mut second = 0;
        let mut nano = 0;
        if cursor.eat(b':') {
            second = cursor.two_digits("expected two-digit second")?;
            if cursor.eat(b'.') {
                nano = cursor.fraction()?;
            }
        }
        cursor.finish()?;
        TimeOfDay::new(hour, minute, second, nano)
    }
}

/// Byte cursor over ASCII time text.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn fail(&self, reason: &'static str) -> TimeError {
        TimeError::Parse {
            input: self.input.to_owned(),
            position: self.pos,
            reason,
        }
    }

    fn digit(&mut self) -> Option<i32> {
        match self.peek() {
            Some(b @ b'0'..=b'9') => {
                self.pos += 1;
                Some(i32::from(b - b'0'))
            }
            _ => None,
        }
    }

    fn two_digits(&mut self, reason: &'static str) -> Result<i32> {
        let start = self.pos;
        match (self.digit(), self.digit()) {
            (Some(tens), Some(units)) => Ok(tens * 10 + units),
            _ => {
                self.pos = start;
                Err(self.fail(reason))
            }
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8, reason: &'static str) -> Result<()> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.fail(reason))
        }
    }

    /// Up to nine fraction digits, scaled to nanoseconds.
    fn fraction(&mut self) -> Result<i32> {
        let mut value = 0;
        let mut width = 0u32;
        while width < 9 {
            match self.digit() {
                Some(d) => {
                    value = value * 10 + d;
                    width += 1;
                }
                None => break,
            }
        }
        if width == 0 {
            return Err(self.fail("expected at least one fraction digit"));
        }
        if self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.fail("at most nine fraction digits are allowed"));
        }
        Ok(value * 10_i32.pow(9 - width))
    }

    fn finish(&self) -> Result<()> {
        if self.pos == self.input.len() {
            Ok(())
        } else {
            Err(self.fail("unexpected trailing text"))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeOfDay entry points
// ═══════════════════════════════════════════════════════════════════════════

impl TimeOfDay {
    /// Parse the ISO-8601 local time form, e.g. `"10:15"` or
    /// `"23:59:59.999999999"`.
    ///
    /// ```
    /// use walltime::TimeOfDay;
    ///
    /// let t = TimeOfDay::parse("10:15:30.5")?;
    /// assert_eq!(t, TimeOfDay::new(10, 15, 30, 500_000_000)?);
    /// assert!(TimeOfDay::parse("24:00").is_err());
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        IsoLocalTime.parse(text)
    }

    /// Parse `text` with a caller-chosen formatter.
    pub fn parse_with<F: TimeFormatter + ?Sized>(text: &str, formatter: &F) -> Result<Self> {
        formatter.parse(text)
    }

    /// Render with a caller-chosen formatter.
    pub fn format_with<F: TimeFormatter + ?Sized>(&self, formatter: &F) -> String {
        formatter.format(*self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        let nano = self.nanosecond();
        if self.second() == 0 && nano == 0 {
            return Ok(());
        }
        write!(f, ":{:02}", self.second())?;
        let (value, width): (u32, usize) = match nano {
            0 => return Ok(()),
            n if n % 1_000_000 == 0 => (n / 1_000_000, 3),
            n if n % 1_000 == 0 => (n / 1_000, 6),
            n => (n, 9),
        };
        write!(f, ".{value:0width$}")
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: i32, m: i32, s: i32, n: i32) -> TimeOfDay {
        TimeOfDay::new(h, m, s, n).unwrap()
    }

    #[test]
    fn test_display_canonical_forms() {
        assert_eq!(t(10, 15, 0, 0).to_string(), "10:15");
        assert_eq!(t(10, 15, 30, 0).to_string(), "10:15:30");
        assert_eq!(t(10, 15, 0, 1).to_string(), "10:15:00.000000001");
        assert_eq!(t(10, 15, 30, 500_000_000).to_string(), "10:15:30.500");
        assert_eq!(t(10, 15, 30, 500_100_000).to_string(), "10:15:30.500100");
        assert_eq!(t(10, 15, 30, 1_500).to_string(), "10:15:30.000001500");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
        assert_eq!(TimeOfDay::MAX.to_string(), "23:59:59.999999999");
    }

    #[test]
    fn test_parse_accepts_every_width() {
        assert_eq!(TimeOfDay::parse("10:15").unwrap(), t(10, 15, 0, 0));
        assert_eq!(TimeOfDay::parse("10:15:30").unwrap(), t(10, 15, 30, 0));
        assert_eq!(TimeOfDay::parse("10:15:30.1").unwrap(), t(10, 15, 30, 100_000_000));
        assert_eq!(TimeOfDay::parse("10:15:30.12345").unwrap(), t(10, 15, 30, 123_450_000));
        assert_eq!(
            TimeOfDay::parse("23:59:59.999999999").unwrap(),
            TimeOfDay::MAX
        );
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_parse_syntax_errors_report_position() {
        let cases = [
            ("1:15", 0),
            ("10-15", 2),
            ("10:1", 3),
            ("10:15:3", 6),
            ("10:15:30.", 9),
            ("10:15:30.1234567890", 18),
            ("10:15 ", 5),
            ("", 0),
        ];
        for (text, at) in cases {
            match TimeOfDay::parse(text) {
                Err(TimeError::Parse { position, input, .. }) => {
                    assert_eq!(position, at, "{text:?}");
                    assert_eq!(input, text);
                }
                other => panic!("{text:?}: expected parse error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_out_of_range_is_range_error() {
        for text in ["24:00", "12:60", "12:00:60"] {
            assert!(
                matches!(TimeOfDay::parse(text), Err(TimeError::Range { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn test_custom_formatter() {
        #[derive(Debug)]
        struct Compact;
        impl TimeFormatter for Compact {
            fn format(&self, time: TimeOfDay) -> String {
                format!("{:02}{:02}", time.hour(), time.minute())
            }
            fn parse(&self, text: &str) -> Result<TimeOfDay> {
                let digits: std::result::Result<Vec<i32>, _> = text
                    .get(0..2)
                    .into_iter()
                    .chain(text.get(2..4))
                    .map(str::parse)
                    .collect();
                match digits.as_deref() {
                    Ok([h, m]) => TimeOfDay::from_hm(*h, *m),
                    _ => Err(TimeError::Parse {
                        input: text.to_owned(),
                        position: 0,
                        reason: "expected HHmm",
                    }),
                }
            }
        }

        let v = t(7, 5, 0, 0);
        assert_eq!(v.format_with(&Compact), "0705");
        assert_eq!(TimeOfDay::parse_with("0705", &Compact).unwrap(), v);
        assert!(TimeOfDay::parse_with("07", &Compact).is_err());
        assert_eq!(v.format_with(&IsoLocalTime), "07:05");
    }
}
