//! Basic Usage Example for Xiaomi Decoders
//!
//! This example decodes one canonical advertisement per supported device
//! family and pretty-prints every measurement the payload carried.
//!
//! Run with: cargo run --example basic_usage

use xiaomi_decoders::{
    ParseResult, UUID_BODY_COMPOSITION, UUID_WEIGHT_SCALE, UUID_XIAOMI, decode_hex,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🦀 Xiaomi Decoders - Basic Usage Example\n");

    // Example 1: Mijia temperature/humidity sensor
    println!("🌡️  Example 1: Mijia (LYWSDCGQ)");
    println!("==============================");
    decode_and_display(UUID_XIAOMI, "5020aa014cabcdef1234560d1004d7005802")?;

    // Example 2: MiFlora plant sensor, one field per advertisement
    println!("🌱 Example 2: MiFlora");
    println!("=====================");
    for payload in [
        "7120980045abcdef12345678041002fa00", // temperature 25.0 °C
        "7120980046abcdef12345678071003640000", // illuminance 100 lx
        "7120980047abcdef1234567808100118",   // moisture 24 %
        "7120980048abcdef123456780910023412", // conductivity
    ] {
        decode_and_display(UUID_XIAOMI, payload)?;
    }

    // Example 3: Mi Scale (v1 record with embedded date-time)
    println!("⚖️  Example 3: Mi Scale");
    println!("======================");
    decode_and_display(UUID_WEIGHT_SCALE, "221027df070102030405")?;

    // Example 4: Mi Body Composition Scale (weight + impedance)
    println!("🧍 Example 4: Body Composition Scale");
    println!("====================================");
    decode_and_display(UUID_BODY_COMPOSITION, "0222e0070203040506f401e02e")?;

    Ok(())
}

/// Decode a hex payload and print it the way a listener would log it
fn decode_and_display(
    service_uuid: u16,
    hex_data: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Service data: {hex_data}");
    match decode_hex(service_uuid, hex_data) {
        Ok(reading) => {
            print_reading(&reading);
            Ok(())
        }
        Err(e) => {
            println!("❌ Decoding failed: {e}");
            Err(Box::new(e))
        }
    }
}

fn print_reading(reading: &ParseResult) {
    println!("✅ Got Xiaomi {}:", reading.device_family);

    if let Some(temperature) = reading.temperature {
        println!("   Temperature: {temperature:.1}°C");
    }
    if let Some(humidity) = reading.humidity {
        println!("   Humidity: {humidity:.1}%");
    }
    if let Some(battery_level) = reading.battery_level {
        println!("   Battery Level: {battery_level}%");
    }
    if let Some(conductivity) = reading.conductivity {
        println!("   Conductivity: {conductivity}µS/cm");
    }
    if let Some(illuminance) = reading.illuminance {
        println!("   Illuminance: {illuminance}lx");
    }
    if let Some(moisture) = reading.moisture {
        println!("   Moisture: {moisture}%");
    }
    if let Some(weight) = reading.weight {
        println!("   Weight: {weight:.1}kg");
    }
    if let Some(impedance) = reading.impedance {
        println!("   Impedance: {impedance}");
    }
    if let Some(timestamp) = reading.timestamp {
        println!("   Measured at: {timestamp}");
    }
    println!();
}
