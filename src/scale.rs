//! Mi Scale weight record layouts
//!
//! Both scale generations share the weight field tag but use incompatible
//! byte layouts; the payload length is the only thing telling them apart.
//! Each record also carries the wall-clock time the scale stamped on the
//! measurement, as a year/month/day hour:minute:second tuple.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{DecodeError, Result};
use crate::parse_result::ParseResult;

/// Record length of the original Mi Scale
pub const V1_RECORD_LENGTH: usize = 10;
/// Record length of the Mi Body Composition Scale
pub const V2_RECORD_LENGTH: usize = 13;

const LB_TO_KG: f64 = 0.453_592;
const CATTY_TO_KG: f64 = 0.6;

/// Decode a weight record into `result`
///
/// # Errors
///
/// * `DecodeError::UnknownScaleLayout` - length matches neither generation
/// * `DecodeError::UnknownDiscriminator` - unit byte outside the known set
/// * `DecodeError::MissingWeightFlag` - v2 record without a stabilized
///   weight; the whole record is rejected even when it carried a usable
///   impedance
pub fn decode(data: &[u8], result: &mut ParseResult) -> Result<()> {
    match data.len() {
        V1_RECORD_LENGTH => decode_v1(data, result),
        V2_RECORD_LENGTH => decode_v2(data, result),
        other => Err(DecodeError::UnknownScaleLayout(other)),
    }
}

/// Mi Scale v1: unit discriminator, 16-bit raw weight, 7-byte date-time
fn decode_v1(data: &[u8], result: &mut ParseResult) -> Result<()> {
    let raw_weight = u16::from_le_bytes([data[1], data[2]]);
    let weight = match data[0] {
        0x22 | 0xA2 => f64::from(raw_weight) * 0.01 / 2.0, // kilograms
        0x12 | 0xB2 => f64::from(raw_weight) * 0.01 * CATTY_TO_KG,
        0x03 | 0xB3 => f64::from(raw_weight) * 0.01 * LB_TO_KG,
        other => return Err(DecodeError::UnknownDiscriminator(other)),
    };

    result.timestamp = decode_datetime(&data[3..10]);
    result.weight = Some(weight);
    Ok(())
}

/// Body composition scale: unit discriminator, flags byte, 7-byte
/// date-time, 16-bit impedance, 16-bit raw weight
///
/// Impedance is written as soon as its validity bit checks out, but a clear
/// weight bit still rejects the record as a whole; the caller discards the
/// result, impedance included.
fn decode_v2(data: &[u8], result: &mut ParseResult) -> Result<()> {
    let flags = data[1];

    result.timestamp = decode_datetime(&data[2..9]);

    let impedance = u16::from_le_bytes([data[9], data[10]]);
    if flags & 0x02 == 0x02 && impedance != 0 && impedance < 3000 {
        result.impedance = Some(impedance);
    }

    if flags & 0x20 != 0x20 {
        return Err(DecodeError::MissingWeightFlag(flags));
    }

    let raw_weight = u16::from_le_bytes([data[11], data[12]]);
    result.weight = Some(match data[0] {
        0x02 => f64::from(raw_weight) * 0.01 / 2.0, // kilograms
        0x03 => f64::from(raw_weight) * 0.01 * LB_TO_KG,
        other => return Err(DecodeError::UnknownDiscriminator(other)),
    });
    Ok(())
}

/// Decode the embedded date-time: 16-bit year, then month, day, hour,
/// minute, second, one byte each
///
/// An impossible calendar date leaves the timestamp absent rather than
/// failing the record.
fn decode_datetime(data: &[u8]) -> Option<NaiveDateTime> {
    let year = i32::from(u16::from_le_bytes([data[0], data[1]]));
    NaiveDate::from_ymd_opt(year, u32::from(data[2]), u32::from(data[3]))?.and_hms_opt(
        u32::from(data[4]),
        u32::from(data[5]),
        u32::from(data[6]),
    )
}
