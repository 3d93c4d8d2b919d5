//! DATE / TIMESTAMP wire codec.
//!
//! Oracle transmits DATE and TIMESTAMP values as a variable-length buffer
//! with no length tag; field presence is inferred from the total size:
//!
//! | Offset | Bytes | Meaning                | Bias |
//! |--------|-------|------------------------|------|
//! | 0      | 1     | century                | +100 |
//! | 1      | 1     | year within century    | +100 |
//! | 2      | 1     | month (1-12)           | none |
//! | 3      | 1     | day (1-31)             | none |
//! | 4      | 1     | hour                   | +1   |
//! | 5      | 1     | minute                 | +1   |
//! | 6      | 1     | second                 | +1   |
//! | 7-10   | 4     | nanoseconds, BE u32    | none |
//! | 11     | 1     | tz hour offset         | +20  |
//! | 12     | 1     | tz minute offset       | +60  |
//!
//! Bytes 7-10 are present only in the 11- and 13-byte forms, bytes 11-12
//! only in the 13-byte form. Any other length is rejected outright rather
//! than under- or over-read.

use bytes::BufMut;

use super::error::DecodeError;
use crate::types::{Timestamp, UtcOffset};

/// DATE: century, year, month, day, hour, minute, second.
pub const DATE_LEN: usize = 7;
/// TIMESTAMP: DATE plus a big-endian u32 nanosecond field.
pub const TIMESTAMP_LEN: usize = 11;
/// TIMESTAMP WITH TIME ZONE: TIMESTAMP plus biased offset bytes.
pub const TIMESTAMP_TZ_LEN: usize = 13;

const YEAR_BIAS: i64 = 100;
const CLOCK_BIAS: i64 = 1;
const TZ_HOUR_BIAS: i64 = 20;
const TZ_MINUTE_BIAS: i64 = 60;

/// How [`decode_date_as`] treats the offset bytes of a 13-byte buffer.
///
/// The offset is always applied as an arithmetic shift of the decoded hour
/// and minute; the variants differ only in how the result is tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetBehavior {
    /// Shift the clock and tag the result as UTC (`offset: None`). This is
    /// the historical driver behavior and the default.
    #[default]
    NormalizeToUtc,
    /// Shift the clock identically but record the decoded offset in
    /// [`Timestamp::offset`], so callers can see what the server sent.
    KeepOffset,
}

/// Encode the date components of `ts` into the 7-byte DATE wire form.
///
/// `nanosecond` and `offset` are not representable in this form and are
/// ignored. No bounds are enforced: each component is narrowed to a single
/// byte with wrapping (modulo 256) semantics, so a month of 300 encodes as
/// 44. Keeping components in range is the caller's concern.
pub fn encode_date(ts: &Timestamp) -> [u8; DATE_LEN] {
    [
        (ts.year / 100 + 100) as u8,
        (ts.year % 100 + 100) as u8,
        ts.month as u8,
        ts.day as u8,
        ts.hour.wrapping_add(1) as u8,
        ts.minute.wrapping_add(1) as u8,
        ts.second.wrapping_add(1) as u8,
    ]
}

/// Append the 7-byte DATE wire form of `ts` to a caller-owned buffer.
pub fn encode_date_into(ts: &Timestamp, buf: &mut impl BufMut) {
    buf.put_slice(&encode_date(ts));
}

/// Decode a DATE/TIMESTAMP wire buffer, normalizing any offset to UTC.
///
/// Equivalent to [`decode_date_as`] with [`OffsetBehavior::NormalizeToUtc`].
pub fn decode_date(data: &[u8]) -> Result<Timestamp, DecodeError> {
    decode_date_as(data, OffsetBehavior::NormalizeToUtc)
}

/// Decode a DATE/TIMESTAMP wire buffer.
///
/// Fails with [`DecodeError::MalformedInput`] unless the buffer is exactly
/// 7, 11 or 13 bytes. Field contents are not validated: month and day are
/// taken verbatim, and a shift that pushes the clock out of range carries
/// through day, month and year (a +7:00 offset on 20:00 Dec 31 lands on
/// 03:00 Jan 1).
pub fn decode_date_as(data: &[u8], behavior: OffsetBehavior) -> Result<Timestamp, DecodeError> {
    match data.len() {
        DATE_LEN | TIMESTAMP_LEN | TIMESTAMP_TZ_LEN => {}
        len => return Err(DecodeError::MalformedInput { len }),
    }

    let year = (i64::from(data[0]) - YEAR_BIAS) * 100 + (i64::from(data[1]) - YEAR_BIAS);

    let nanos = if data.len() > DATE_LEN {
        u32::from_be_bytes([data[7], data[8], data[9], data[10]])
    } else {
        0
    };

    let (tz_hour, tz_minute) = if data.len() > TIMESTAMP_LEN {
        (
            i64::from(data[11]) - TZ_HOUR_BIAS,
            i64::from(data[12]) - TZ_MINUTE_BIAS,
        )
    } else {
        (0, 0)
    };

    let mut ts = Timestamp::normalized(
        year,
        i64::from(data[2]),
        i64::from(data[3]),
        i64::from(data[4]) - CLOCK_BIAS + tz_hour,
        i64::from(data[5]) - CLOCK_BIAS + tz_minute,
        i64::from(data[6]) - CLOCK_BIAS,
        i64::from(nanos),
    );
    if behavior == OffsetBehavior::KeepOffset && data.len() > TIMESTAMP_LEN {
        ts.offset = Some(UtcOffset {
            hours: tz_hour as i32,
            minutes: tz_minute as i32,
        });
    }
    Ok(ts)
}
