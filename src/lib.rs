//! Xiaomi BLE Advertisement Decoders
//!
//! This crate decodes the service data advertisements broadcast by Xiaomi
//! consumer sensors:
//! - Mijia temperature/humidity sensors (LYWSDCGQ)
//! - MiFlora plant sensors
//! - LYWSD02 clock/hygrometers
//! - Mi Scale and Mi Body Composition Scale
//!
//! The decoder is a pure function of the advertised service UUIDs and the
//! service data bytes: no I/O, no state between calls. Malformed or
//! truncated payloads come back as `None`/an error, never as a partial
//! reading — the next broadcast supersedes a dropped one anyway.
//!
//! # Example
//!
//! ```rust
//! use xiaomi_decoders::{DeviceFamily, UUID_XIAOMI, parse};
//!
//! let raw = hex::decode("5020aa014cabcdef1234560d1004d7005802").unwrap();
//! let reading = parse(&[UUID_XIAOMI], &raw).unwrap();
//!
//! assert_eq!(reading.device_family, DeviceFamily::Mijia);
//! assert_eq!(reading.temperature, Some(21.5));
//! assert_eq!(reading.humidity, Some(60.0));
//! ```

pub mod error;
pub mod field;
pub mod frame;
pub mod parse_result;
pub mod scale;

pub use error::{DecodeError, Result};
pub use frame::{UUID_BODY_COMPOSITION, UUID_WEIGHT_SCALE, UUID_XIAOMI};
pub use parse_result::{DeviceFamily, ParseResult};

/// Decode one advertisement, keeping the rejection cause
///
/// # Arguments
///
/// * `service_uuids` - 16-bit service UUIDs the advertisement was seen under
/// * `service_data` - raw service data payload, borrowed for the call only
///
/// # Errors
///
/// Every way a payload can fail to be a usable Xiaomi reading maps to one
/// [`DecodeError`] variant; see [`frame::decode`].
pub fn decode(service_uuids: &[u16], service_data: &[u8]) -> Result<ParseResult> {
    frame::decode(service_uuids, service_data)
}

/// Decode one advertisement, treating every malformed payload as ignorable
///
/// This is the listener-facing entry point: `None` covers everything from
/// "not a Xiaomi device" to a corrupted frame. Use [`decode`] when the
/// cause matters.
#[must_use]
pub fn parse(service_uuids: &[u16], service_data: &[u8]) -> Option<ParseResult> {
    frame::decode(service_uuids, service_data).ok()
}

/// Decode service data given as a hex string
///
/// Convenience wrapper for logs and captures: trims whitespace, drops a
/// `0x` prefix and embedded spaces, then decodes as usual under the single
/// given service UUID.
///
/// # Example
///
/// ```rust
/// use xiaomi_decoders::{UUID_WEIGHT_SCALE, decode_hex};
///
/// let reading = decode_hex(UUID_WEIGHT_SCALE, "22 10 27 df 07 01 02 03 04 05").unwrap();
/// assert_eq!(reading.weight, Some(50.0));
/// ```
///
/// # Errors
///
/// * `DecodeError::InvalidHex` - not a valid hex string
/// * Anything [`decode`] returns
pub fn decode_hex(service_uuid: u16, hex_data: &str) -> Result<ParseResult> {
    let clean_hex = hex_data.trim().trim_start_matches("0x").replace(' ', "");
    let bytes =
        hex::decode(&clean_hex).map_err(|_| DecodeError::InvalidHex(clean_hex.clone()))?;
    frame::decode(&[service_uuid], &bytes)
}
