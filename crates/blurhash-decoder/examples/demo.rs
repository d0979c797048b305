//! BlurHash Demo - Validate, inspect and decode a hash
//!
//! Run with: cargo run -p blurhash-decoder --example demo

use blurhash_decoder::{average_color, decode, is_valid, Blurhash};

fn main() {
    println!("=== BlurHash Demo ===\n");

    let hash = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

    println!("1. Hash: {}", hash);
    println!("   Valid: {}\n", is_valid(hash));

    let parsed = Blurhash::parse(hash).expect("Failed to parse hash");
    let header = parsed.header();
    println!(
        "2. Components: {}x{}",
        header.components_x, header.components_y
    );
    println!("   Max AC: {:.4}", header.max_ac());
    let [r, g, b] = average_color(hash).expect("Failed to read average colour");
    println!("   Average colour: #{:02x}{:02x}{:02x}\n", r, g, b);

    let width = 8;
    let height = 8;
    for punch in [1.0, 2.0] {
        let decoded = decode(hash, width, height, punch).expect("Failed to decode");
        println!(
            "3. Decoded to {}x{} RGBA ({} bytes), punch {}",
            width,
            height,
            decoded.len(),
            punch
        );
        println!(
            "   First pixel: ({}, {}, {})",
            decoded[0], decoded[1], decoded[2]
        );
        let last = decoded.len() - 4;
        println!(
            "   Last pixel: ({}, {}, {})",
            decoded[last],
            decoded[last + 1],
            decoded[last + 2]
        );
    }

    println!("\n=== Demo Complete ===");
}
