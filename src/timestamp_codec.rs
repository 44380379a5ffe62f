//! Functions in this module convert calendar timestamps into a fixed
//! 7-byte representation and back.
//!
//! The layout stores seconds, minutes, hour (24-hour form), day of month
//! and month in one byte each, followed by the year split into its low and
//! high bytes. A year is reconstructed as `(byte6 << 8) | byte5`, covering
//! the range 0 to 65535.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::{
    error::{Error, Result},
    field_codec::{high_byte, low_byte, u16_from_high_low},
};

/// Returns the 7-byte representation of a calendar timestamp.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use wirebytes::timestamp_codec::bytes_from_timestamp;
///
/// let timestamp = NaiveDate::from_ymd_opt(2017, 7, 6)
///     .unwrap()
///     .and_hms_opt(10, 5, 56)
///     .unwrap();
///
/// assert_eq!([0x38, 0x05, 0x0A, 0x06, 0x07, 0xE1, 0x07], bytes_from_timestamp(timestamp));
/// ```
pub fn bytes_from_timestamp(timestamp: NaiveDateTime) -> [u8; 7] {
    let mut buf = [0u8; 7];
    write_timestamp(&mut buf, 0, timestamp);
    buf
}


/// Stores the 7-byte representation of a calendar timestamp at `offset`.
///
/// Years outside the range 0 to 65535 are truncated to their low 16 bits.
pub fn write_timestamp(buf: &mut [u8], offset: usize, timestamp: NaiveDateTime) {
    let year = timestamp.year() as u16;

    buf [offset] = timestamp.second() as u8;
    buf [offset + 1] = timestamp.minute() as u8;
    buf [offset + 2] = timestamp.hour() as u8;
    buf [offset + 3] = timestamp.day() as u8;
    buf [offset + 4] = timestamp.month() as u8;
    buf [offset + 5] = low_byte(year);
    buf [offset + 6] = high_byte(year);
}


/// Reads the 7-byte representation of a calendar timestamp starting at
/// `offset`.
///
/// Returns an `Err` if fewer than 7 bytes remain from `offset` or if the
/// stored field values do not form a valid calendar timestamp.
pub fn timestamp_from_bytes(buf: &[u8], offset: usize) -> Result<NaiveDateTime> {
    if buf.len() < offset + 7 {
        return Err(Error::new("Minimum of 7 bytes needed to decode a timestamp"));
    }

    let second = buf [offset] as u32;
    let minute = buf [offset + 1] as u32;
    let hour = buf [offset + 2] as u32;
    let day = buf [offset + 3] as u32;
    let month = buf [offset + 4] as u32;
    let year = u16_from_high_low(buf [offset + 6], buf [offset + 5]) as i32;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::new("Invalid calendar date in timestamp"))?;

    date.and_hms_opt(hour, minute, second)
        .ok_or_else(|| Error::new("Invalid time of day in timestamp"))
}
