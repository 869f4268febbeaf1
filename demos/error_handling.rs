//! Error Handling Example for Xiaomi Decoders
//!
//! Walks through every way an advertisement can be rejected, using both the
//! cause-carrying `decode` entry point and the listener-facing `parse`.
//! Noisy radio input is the normal case here, not the exception.
//!
//! Run with: RUST_LOG=debug cargo run --example error_handling

use xiaomi_decoders::{
    UUID_BODY_COMPOSITION, UUID_WEIGHT_SCALE, UUID_XIAOMI, decode, parse,
};

fn main() {
    // Frame diagnostics (e.g. declared-length mismatches) go through the
    // `log` facade; run with RUST_LOG=debug to see them.
    env_logger::init();

    println!("⚠️  Xiaomi Decoders - Error Handling Example\n");

    let mijia = hex::decode("5020aa014cabcdef1234560d1004d7005802").unwrap();

    let mut truncated = mijia.clone();
    truncated.pop();

    let mut bad_magic = mijia.clone();
    bad_magic[2] = 0x13;

    let mut bad_tag = mijia.clone();
    bad_tag[11] = 0x42;

    let v2_no_weight = hex::decode("0202e0070203040506f401e02e").unwrap();
    let v1_bad_unit = hex::decode("421027df070102030405").unwrap();

    let cases: Vec<(&str, Vec<u16>, Vec<u8>)> = vec![
        ("Valid Mijia reading", vec![UUID_XIAOMI], mijia),
        ("Unknown service UUID", vec![0x1234], truncated.clone()),
        ("Service data too short", vec![UUID_XIAOMI], vec![0x50, 0x20]),
        ("No family magic bytes", vec![UUID_XIAOMI], bad_magic),
        ("Declared length mismatch", vec![UUID_XIAOMI], truncated),
        ("Unknown field tag", vec![UUID_XIAOMI], bad_tag),
        (
            "Scale record without weight flag",
            vec![UUID_BODY_COMPOSITION],
            v2_no_weight,
        ),
        (
            "Scale record with unknown unit",
            vec![UUID_WEIGHT_SCALE],
            v1_bad_unit,
        ),
    ];

    let mut accepted = 0;
    let total = cases.len();

    for (description, service_uuids, service_data) in cases {
        println!("🧪 {description}");
        match decode(&service_uuids, &service_data) {
            Ok(reading) => {
                accepted += 1;
                println!("   ✅ {}: {reading:?}", reading.device_family);
            }
            Err(e) => println!("   ❌ Rejected: {e}"),
        }

        // The listener-facing entry point flattens all of the above into
        // presence/absence.
        let surfaced = parse(&service_uuids, &service_data).is_some();
        println!("   parse() surfaced a reading: {surfaced}\n");
    }

    println!("📊 {accepted}/{total} payloads produced a reading");
    println!("Rejected packets are simply dropped; the next broadcast");
    println!("from the same sensor supersedes them.");
}
