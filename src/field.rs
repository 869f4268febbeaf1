//! Field decoder for type-tagged measurement records
//!
//! Classic Xiaomi sensors wrap every measurement in a one-byte field tag
//! followed by a fixed-length value. Multi-byte integers are little-endian.
//! The weight tag (0x16) is the odd one out: its layout depends on which
//! scale generation sent it, so it is handed off to [`crate::scale`].

use crate::error::{DecodeError, Result};
use crate::parse_result::{DeviceFamily, ParseResult};
use crate::scale;

/// Field tag carried (implicitly) by every scale advertisement
pub const WEIGHT_TAG: u8 = 0x16;

/// Decode one type-tagged field into `result`
///
/// `data` is exactly the declared-length window the frame parser cut out of
/// the service data. Each tag checks it against its fixed expected length
/// before touching `result`, so a failed decode leaves the result as it was
/// (the one documented exception lives in [`crate::scale`]).
///
/// # Errors
///
/// * `DecodeError::InvalidFieldLength` - `data` is the wrong size for `tag`
/// * `DecodeError::UnknownFieldTag` - unrecognized tag, or a weight record
///   from a device that is not a scale
/// * Any error from [`scale::decode`] for weight records
pub fn decode(tag: u8, data: &[u8], result: &mut ParseResult) -> Result<()> {
    match tag {
        // temperature + humidity, two 16-bit signed, 0.1 °C / 0.1 %
        0x0D => {
            expect_len(tag, 4, data)?;
            result.temperature = Some(f64::from(i16::from_le_bytes([data[0], data[1]])) / 10.0);
            result.humidity = Some(f64::from(i16::from_le_bytes([data[2], data[3]])) / 10.0);
            Ok(())
        }
        // battery, 8-bit unsigned, 1 %
        0x0A => {
            expect_len(tag, 1, data)?;
            result.battery_level = Some(data[0]);
            Ok(())
        }
        // humidity, 16-bit signed, 0.1 %
        0x06 => {
            expect_len(tag, 2, data)?;
            result.humidity = Some(f64::from(i16::from_le_bytes([data[0], data[1]])) / 10.0);
            Ok(())
        }
        // temperature, 16-bit signed, 0.1 °C
        0x04 => {
            expect_len(tag, 2, data)?;
            result.temperature = Some(f64::from(i16::from_le_bytes([data[0], data[1]])) / 10.0);
            Ok(())
        }
        // conductivity, 16-bit unsigned, 1 µS/cm
        0x09 => {
            expect_len(tag, 2, data)?;
            result.conductivity = Some(u16::from_le_bytes([data[0], data[1]]));
            Ok(())
        }
        // illuminance, 24-bit unsigned, 1 lx
        0x07 => {
            expect_len(tag, 3, data)?;
            let illuminance =
                u32::from(data[0]) | (u32::from(data[1]) << 8) | (u32::from(data[2]) << 16);
            result.illuminance = Some(illuminance);
            Ok(())
        }
        // soil moisture, 8-bit unsigned, 1 %
        0x08 => {
            expect_len(tag, 1, data)?;
            result.moisture = Some(data[0]);
            Ok(())
        }
        // weight record; only scales broadcast these
        WEIGHT_TAG if result.device_family == DeviceFamily::MiScale => {
            scale::decode(data, result)
        }
        other => Err(DecodeError::UnknownFieldTag(other)),
    }
}

fn expect_len(tag: u8, expected: usize, data: &[u8]) -> Result<()> {
    if data.len() == expected {
        Ok(())
    } else {
        Err(DecodeError::invalid_field_length(tag, expected, data.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fresh(family: DeviceFamily) -> ParseResult {
        ParseResult::new(family)
    }

    #[rstest]
    #[case("d7005802", Some(21.5), Some(60.0))]
    #[case("4eff2c01", Some(-17.8), Some(30.0))]
    #[case("00000000", Some(0.0), Some(0.0))]
    fn temperature_humidity_cases(
        #[case] hex_str: &str,
        #[case] temperature: Option<f64>,
        #[case] humidity: Option<f64>,
    ) {
        let data = hex::decode(hex_str).unwrap();
        let mut result = fresh(DeviceFamily::Mijia);
        decode(0x0D, &data, &mut result).unwrap();
        assert_eq!(result.temperature, temperature);
        assert_eq!(result.humidity, humidity);
    }

    #[rstest]
    #[case("d700", Some(21.5))]
    #[case("4eff", Some(-17.8))]
    fn temperature_cases(#[case] hex_str: &str, #[case] expected: Option<f64>) {
        let data = hex::decode(hex_str).unwrap();
        let mut result = fresh(DeviceFamily::MiFlora);
        decode(0x04, &data, &mut result).unwrap();
        assert_eq!(result.temperature, expected);
        assert_eq!(result.humidity, None);
    }

    #[rstest]
    #[case("5802", Some(60.0))]
    #[case("e803", Some(100.0))]
    fn humidity_cases(#[case] hex_str: &str, #[case] expected: Option<f64>) {
        let data = hex::decode(hex_str).unwrap();
        let mut result = fresh(DeviceFamily::Mijia);
        decode(0x06, &data, &mut result).unwrap();
        assert_eq!(result.humidity, expected);
        assert_eq!(result.temperature, None);
    }

    #[test]
    fn battery_and_moisture() {
        let mut result = fresh(DeviceFamily::Mijia);
        decode(0x0A, &[87], &mut result).unwrap();
        assert_eq!(result.battery_level, Some(87));

        let mut result = fresh(DeviceFamily::MiFlora);
        decode(0x08, &[42], &mut result).unwrap();
        assert_eq!(result.moisture, Some(42));
    }

    #[test]
    fn conductivity_and_illuminance() {
        let mut result = fresh(DeviceFamily::MiFlora);
        decode(0x09, &[0x34, 0x12], &mut result).unwrap();
        assert_eq!(result.conductivity, Some(0x1234));

        let mut result = fresh(DeviceFamily::MiFlora);
        decode(0x07, &[0x64, 0x00, 0x01], &mut result).unwrap();
        assert_eq!(result.illuminance, Some(0x0001_0064));
    }

    // A slice of exactly the wrong size must fail and leave the result
    // untouched, for every fixed-length tag.
    #[rstest]
    #[case(0x0D, 4)]
    #[case(0x0A, 1)]
    #[case(0x06, 2)]
    #[case(0x04, 2)]
    #[case(0x09, 2)]
    #[case(0x07, 3)]
    #[case(0x08, 1)]
    fn wrong_length_rejected(#[case] tag: u8, #[case] expected: usize) {
        for actual in [expected - 1, expected + 1] {
            let data = vec![0u8; actual];
            let mut result = fresh(DeviceFamily::Mijia);
            let err = decode(tag, &data, &mut result).unwrap_err();
            assert_eq!(
                err,
                DecodeError::invalid_field_length(tag, expected, actual)
            );
            assert_eq!(result, fresh(DeviceFamily::Mijia));
        }
    }

    #[test]
    fn unknown_tag_rejected() {
        let mut result = fresh(DeviceFamily::Mijia);
        let err = decode(0x42, &[0x00], &mut result).unwrap_err();
        assert_eq!(err, DecodeError::UnknownFieldTag(0x42));
    }

    // Weight records from anything but a scale are as good as an unknown tag.
    #[rstest]
    #[case(DeviceFamily::Unknown)]
    #[case(DeviceFamily::Mijia)]
    #[case(DeviceFamily::MiFlora)]
    #[case(DeviceFamily::Lywsd02)]
    fn weight_outside_scale_rejected(#[case] family: DeviceFamily) {
        let data = hex::decode("22102adf070102030405").unwrap();
        let mut result = fresh(family);
        let err = decode(WEIGHT_TAG, &data, &mut result).unwrap_err();
        assert_eq!(err, DecodeError::UnknownFieldTag(WEIGHT_TAG));
        assert_eq!(result.weight, None);
        assert_eq!(result.timestamp, None);
    }

    #[test]
    fn weight_dispatches_for_scale() {
        let data = hex::decode("221027df070102030405").unwrap();
        let mut result = fresh(DeviceFamily::MiScale);
        decode(WEIGHT_TAG, &data, &mut result).unwrap();
        assert_eq!(result.weight, Some(50.0));
    }
}
