// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Compact binary form of [`TimeOfDay`].
//!
//! Trailing zero components are dropped.  The last component written is
//! stored as its one's complement, which is always negative when read back as
//! an `i8`, so the reader knows where to stop:
//!
//! | value          | bytes                                    | length |
//! |----------------|------------------------------------------|--------|
//! | `HH:00`        | `!HH`                                    | 1      |
//! | `HH:mm`        | `HH !mm`                                 | 2      |
//! | `HH:mm:ss`     | `HH mm !ss`                              | 3      |
//! | `HH:mm:ss.n`   | `HH mm ss` + nanosecond as big-endian i32 | 7      |
//!
//! Decoding validates every component; a malformed stream is reported as
//! [`TimeError::Codec`] and never yields a value.

use crate::error::{Result, TimeError};
use crate::TimeOfDay;
use std::io::{self, Read, Write};

/// Longest possible encoding.
const MAX_LEN: usize = 7;

fn reject(reason: impl Into<String>) -> TimeError {
    let err = TimeError::codec(reason);
    tracing::debug!(%err, "rejected binary time");
    err
}

fn read_failure(err: io::Error) -> TimeError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        reject("stream ended before the time was complete")
    } else {
        TimeError::Io(err)
    }
}

fn read_i8<R: Read + ?Sized>(reader: &mut R) -> Result<i8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf).map_err(read_failure)?;
    Ok(i8::from_be_bytes(buf))
}

fn read_i32<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(read_failure)?;
    Ok(i32::from_be_bytes(buf))
}

impl TimeOfDay {
    /// Number of bytes [`encode`](Self::encode) produces for this value.
    pub fn encoded_len(&self) -> usize {
        match (self.minute(), self.second(), self.nanosecond()) {
            (0, 0, 0) => 1,
            (_, 0, 0) => 2,
            (_, _, 0) => 3,
            _ => MAX_LEN,
        }
    }

    /// Binary form as a fresh buffer.
    ///
    /// ```
    /// use walltime::TimeOfDay;
    ///
    /// let t = TimeOfDay::from_hm(10, 15)?;
    /// assert_eq!(t.encode(), vec![10, !15u8]);
    /// assert_eq!(TimeOfDay::decode(&t.encode())?, t);
    /// # Ok::<(), walltime::TimeError>(())
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }

    /// Append the binary form to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let (h, m, s, n) = (self.hour(), self.minute(), self.second(), self.nanosecond());
        if n == 0 {
            if s == 0 {
                if m == 0 {
                    out.push(!h);
                } else {
                    out.extend_from_slice(&[h, !m]);
                }
            } else {
                out.extend_from_slice(&[h, m, !s]);
            }
        } else {
            out.extend_from_slice(&[h, m, s]);
            // nanosecond < 10^9 always fits an i32
            out.extend_from_slice(&(n as i32).to_be_bytes());
        }
    }

    /// Write the binary form to `writer`.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        let mut buf = Vec::with_capacity(MAX_LEN);
        self.encode_into(&mut buf);
        writer.write_all(&buf)?;
        Ok(())
    }

    /// Read one binary time from `reader`, consuming exactly its bytes.
    ///
    /// A stream that ends early is a [`TimeError::Codec`]; any other reader
    /// failure is passed through as [`TimeError::Io`].
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let (mut minute, mut second, mut nano) = (0i8, 0i8, 0i32);
        let mut hour = read_i8(reader)?;
        if hour < 0 {
            hour = !hour;
        } else {
            minute = read_i8(reader)?;
            if minute < 0 {
                minute = !minute;
            } else {
                second = read_i8(reader)?;
                if second < 0 {
                    second = !second;
                } else {
                    nano = read_i32(reader)?;
                }
            }
        }
        TimeOfDay::new(hour.into(), minute.into(), second.into(), nano)
            .map_err(|err| reject(format!("invalid component: {err}")))
    }

    /// Decode a buffer holding exactly one binary time.
    ///
    /// Bytes left over after the time are an error.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut rest = bytes;
        let time = Self::read_from(&mut rest)?;
        if !rest.is_empty() {
            return Err(reject(format!(
                "{} trailing byte(s) after {time}",
                rest.len()
            )));
        }
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: i32, m: i32, s: i32, n: i32) -> TimeOfDay {
        TimeOfDay::new(h, m, s, n).unwrap()
    }

    #[test]
    fn test_layouts() {
        assert_eq!(TimeOfDay::MIDNIGHT.encode(), vec![0xFF]);
        assert_eq!(t(12, 0, 0, 0).encode(), vec![!12u8]);
        assert_eq!(t(12, 30, 0, 0).encode(), vec![12, !30u8]);
        assert_eq!(t(12, 30, 45, 0).encode(), vec![12, 30, !45u8]);
        assert_eq!(
            t(12, 30, 45, 0x0102_0304).encode(),
            vec![12, 30, 45, 0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(t(0, 0, 0, 1).encode(), vec![0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_encoded_len_matches_encoding() {
        for v in [
            TimeOfDay::MIDNIGHT,
            t(5, 1, 0, 0),
            t(5, 0, 1, 0),
            t(5, 0, 0, 1),
            TimeOfDay::MAX,
        ] {
            assert_eq!(v.encoded_len(), v.encode().len(), "{v}");
            assert_eq!(TimeOfDay::decode(&v.encode()).unwrap(), v);
        }
    }

    #[test]
    fn test_stream_of_several_values() {
        let values = [t(1, 0, 0, 0), t(2, 3, 0, 0), t(4, 5, 6, 7)];
        let mut buf = Vec::new();
        for v in &values {
            v.write_to(&mut buf).unwrap();
        }
        let mut reader = buf.as_slice();
        for v in &values {
            assert_eq!(TimeOfDay::read_from(&mut reader).unwrap(), *v);
        }
        assert!(reader.is_empty());
    }

    #[test]
    fn test_truncated_stream_is_codec_error() {
        for bytes in [&[][..], &[12][..], &[12, 30][..], &[12, 30, 45, 0, 0][..]] {
            assert!(
                matches!(TimeOfDay::decode(bytes), Err(TimeError::Codec { .. })),
                "{bytes:?}"
            );
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let err = TimeOfDay::decode(&[!12u8, 0]).unwrap_err();
        assert!(matches!(err, TimeError::Codec { .. }));
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        // hour 24
        assert!(matches!(
            TimeOfDay::decode(&[!24u8]),
            Err(TimeError::Codec { .. })
        ));
        // minute 60
        assert!(TimeOfDay::decode(&[1, !60u8]).is_err());
        // negative nanosecond
        assert!(TimeOfDay::decode(&[1, 2, 3, 0xFF, 0xFF, 0xFF, 0xFF]).is_err());
        // nanosecond of one full second
        let mut bytes = vec![1, 2, 3];
        bytes.extend_from_slice(&1_000_000_000i32.to_be_bytes());
        assert!(TimeOfDay::decode(&bytes).is_err());
    }

    #[test]
    fn test_reader_errors_pass_through() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }
        assert!(matches!(
            TimeOfDay::read_from(&mut Broken),
            Err(TimeError::Io(_))
        ));
    }
}
