//! Error types for Xiaomi decoders

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding a Xiaomi advertisement
///
/// Every variant means the same thing to a caller: the packet is not a
/// usable Xiaomi reading and should be dropped. The next broadcast
/// supersedes it, so none of these are worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Invalid hex string format
    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    /// None of the advertised service UUIDs belong to a Xiaomi device
    #[error("No Xiaomi service data UUID advertised")]
    UnknownServiceUuid,

    /// Service data shorter than the smallest known frame
    #[error("Service data too short: {0} bytes")]
    TooShort(usize),

    /// Frame header matches no known device family
    #[error("No device family magic bytes matched")]
    NoFamilyMatch,

    /// Declared record length disagrees with the actual service data length
    #[error("Frame length mismatch for field 0x{tag:02X}: expected {expected} bytes, got {actual}")]
    FrameLengthMismatch {
        tag: u8,
        expected: usize,
        actual: usize,
    },

    /// Unknown field tag
    #[error("Unknown field tag: 0x{0:02X}")]
    UnknownFieldTag(u8),

    /// Field payload length differs from the tag's fixed length
    #[error("Invalid length for field 0x{tag:02X}: expected {expected} bytes, got {actual}")]
    InvalidFieldLength {
        tag: u8,
        expected: usize,
        actual: usize,
    },

    /// Weight record length matches neither scale generation
    #[error("No scale record layout for {0} byte payload")]
    UnknownScaleLayout(usize),

    /// Unrecognized weight unit discriminator byte
    #[error("Unknown weight unit discriminator: 0x{0:02X}")]
    UnknownDiscriminator(u8),

    /// Weight-stabilized flag bit is clear, so the record carries no weight
    #[error("Weight flag clear in flags byte 0x{0:02X}")]
    MissingWeightFlag(u8),
}

impl DecodeError {
    /// Create a new `FrameLengthMismatch` error
    #[must_use]
    pub fn frame_length_mismatch(tag: u8, expected: usize, actual: usize) -> Self {
        Self::FrameLengthMismatch {
            tag,
            expected,
            actual,
        }
    }

    /// Create a new `InvalidFieldLength` error
    #[must_use]
    pub fn invalid_field_length(tag: u8, expected: usize, actual: usize) -> Self {
        Self::InvalidFieldLength {
            tag,
            expected,
            actual,
        }
    }
}
