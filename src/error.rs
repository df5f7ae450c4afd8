// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation in the crate.

/// Errors produced while building, querying, adjusting, rendering or decoding
/// a [`TimeOfDay`](crate::TimeOfDay).
///
/// Every failure is reported before any value is produced, so an `Err` never
/// leaves a half-applied result behind.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// A component value lies outside the legal bounds of its field.
    #[error("invalid value for {field} (valid values {min} - {max}): {value}")]
    Range {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },

    /// The field is not time-based, or not handled by the value it was asked of.
    #[error("unsupported field: {field}")]
    UnsupportedField {
        /// Name of the field.
        field: String,
    },

    /// The unit cannot be used for the requested arithmetic or truncation.
    #[error("unsupported unit {unit}: {reason}")]
    UnsupportedUnit {
        /// Name of the unit.
        unit: String,
        /// Why the unit was rejected.
        reason: &'static str,
    },

    /// The value of a field does not fit in the narrow (`i32`) accessor.
    #[error("value {value} of {field} does not fit in an i32, use get_long instead")]
    Overflow {
        /// Name of the field.
        field: String,
        /// The full-width value.
        value: i64,
    },

    /// A temporal source could not supply a time-of-day.
    #[error("unable to obtain a time of day: {reason}")]
    Conversion {
        /// What was missing from the source.
        reason: String,
    },

    /// A binary time stream is truncated, over-long or carries invalid
    /// components.
    #[error("malformed time stream: {reason}")]
    Codec {
        /// What was wrong with the stream.
        reason: String,
    },

    /// Text did not follow the expected time syntax.
    #[error("cannot parse {input:?} at position {position}: {reason}")]
    Parse {
        /// The full input text.
        input: String,
        /// Byte offset where parsing stopped.
        position: usize,
        /// What was expected at that offset.
        reason: &'static str,
    },

    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = TimeError> = std::result::Result<T, E>;

impl TimeError {
    pub(crate) fn range(field: &str, value: i64, min: i64, max: i64) -> Self {
        Self::Range {
            field: field.to_owned(),
            value,
            min,
            max,
        }
    }

    pub(crate) fn unsupported_field(field: &str) -> Self {
        Self::UnsupportedField {
            field: field.to_owned(),
        }
    }

    pub(crate) fn unsupported_unit(unit: &str, reason: &'static str) -> Self {
        Self::UnsupportedUnit {
            unit: unit.to_owned(),
            reason,
        }
    }

    pub(crate) fn codec(reason: impl Into<String>) -> Self {
        Self::Codec {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_names_field_and_bounds() {
        let err = TimeError::range("MinuteOfHour", 65, 0, 59);
        assert_eq!(
            err.to_string(),
            "invalid value for MinuteOfHour (valid values 0 - 59): 65"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: TimeError = io.into();
        assert!(matches!(err, TimeError::Io(_)));
    }
}
