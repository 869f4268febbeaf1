//! Frame parsing for Xiaomi service data advertisements
//!
//! Three framing generations exist in the wild. The classic families
//! (Mijia, MiFlora, LYWSD02) wrap a single tagged field in a fixed-offset
//! envelope and identify themselves with magic bytes in the frame header.
//! The scales skip the envelope entirely: their service data *is* one
//! weight record, and the service UUID alone picks the framing.

use log::debug;

use crate::error::{DecodeError, Result};
use crate::field;
use crate::parse_result::{DeviceFamily, ParseResult};

/// Service data UUID advertised by the classic Xiaomi families
pub const UUID_XIAOMI: u16 = 0xFE95;
/// Weight Scale service UUID advertised by the original Mi Scale
pub const UUID_WEIGHT_SCALE: u16 = 0x181D;
/// Body Composition service UUID advertised by the body composition scale
pub const UUID_BODY_COMPOSITION: u16 = 0x181B;

/// Shortest service data any known family broadcasts
pub const MIN_SERVICE_DATA_LENGTH: usize = 9;

/// Decode one advertisement's service data
///
/// `service_uuids` holds the 16-bit service UUIDs the advertisement was
/// seen under; `raw` is the service data payload. The buffer is only read,
/// never held past the call.
///
/// # Errors
///
/// * `DecodeError::UnknownServiceUuid` - no Xiaomi service UUID advertised
/// * `DecodeError::TooShort` - payload below the minimum frame size
/// * `DecodeError::NoFamilyMatch` - header matches no known family
/// * `DecodeError::FrameLengthMismatch` - declared record length disagrees
///   with the payload length
/// * Any error from [`field::decode`]
pub fn decode(service_uuids: &[u16], raw: &[u8]) -> Result<ParseResult> {
    let advertised = |uuid| service_uuids.contains(&uuid);

    if !advertised(UUID_XIAOMI) && !advertised(UUID_WEIGHT_SCALE) && !advertised(UUID_BODY_COMPOSITION)
    {
        return Err(DecodeError::UnknownServiceUuid);
    }
    if raw.len() < MIN_SERVICE_DATA_LENGTH {
        return Err(DecodeError::TooShort(raw.len()));
    }

    // A scale service UUID settles the framing on its own, magic bytes or
    // not; only the classic envelope needs the header inspected.
    if advertised(UUID_WEIGHT_SCALE) || advertised(UUID_BODY_COMPOSITION) {
        return decode_scale_frame(raw);
    }

    match classify_classic(raw) {
        Some(family) => decode_classic_frame(family, raw),
        None => Err(DecodeError::NoFamilyMatch),
    }
}

/// Tell the classic families apart by their frame header magic bytes
///
/// The magic byte pairs are disjoint, so at most one family can match.
fn classify_classic(raw: &[u8]) -> Option<DeviceFamily> {
    if raw[1] & 0x20 != 0x20 {
        return None;
    }
    match (raw[2], raw[3]) {
        (0xAA, 0x01) => Some(DeviceFamily::Mijia),
        (0x98, 0x00) => Some(DeviceFamily::MiFlora),
        (0x5B, 0x04) => Some(DeviceFamily::Lywsd02),
        _ => None,
    }
}

/// Classic envelope: tagged record at a family-specific fixed offset
///
/// Layout at `offset`: field tag, one skipped byte, declared length, then
/// the field bytes. The declared length must land exactly on the end of
/// the payload.
fn decode_classic_frame(family: DeviceFamily, raw: &[u8]) -> Result<ParseResult> {
    let offset = if family == DeviceFamily::Mijia { 11 } else { 12 };

    if raw.len() < offset + 3 {
        return Err(DecodeError::TooShort(raw.len()));
    }

    let tag = raw[offset];
    let declared_length = usize::from(raw[offset + 2]);
    let expected = offset + 3 + declared_length;
    if expected != raw.len() {
        debug!(
            "Xiaomi field 0x{tag:02X} length mismatch ({expected} != {})",
            raw.len()
        );
        return Err(DecodeError::frame_length_mismatch(tag, expected, raw.len()));
    }

    let mut result = ParseResult::new(family);
    field::decode(tag, &raw[offset + 3..], &mut result)?;
    Ok(result)
}

/// Scale framing: the whole payload is one weight record, no envelope
fn decode_scale_frame(raw: &[u8]) -> Result<ParseResult> {
    let mut result = ParseResult::new(DeviceFamily::MiScale);
    field::decode(field::WEIGHT_TAG, raw, &mut result)?;
    Ok(result)
}
