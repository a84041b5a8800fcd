//! Basic usage example for codicefiscale-core
//!
//! This example demonstrates how to:
//! - Load a birthplace registry
//! - Encode and decode a fiscal code
//! - List the omocodia variants of a code
//!
//! Run with `CODICEFISCALE_DATA=<dir>` to use a full dataset; the test
//! fixtures are used otherwise.

use codicefiscale_core::{Codec, Registry, RegistrySearch, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== codicefiscale-core Basic Usage Example ===\n");

    let dir = match std::env::var_os(codicefiscale_core::loader::DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
    };
    println!("Loading registry from {}...", dir.display());
    let registry = Registry::load_from_dir(&dir)?;
    let stats = registry.stats();
    println!(
        "✓ {} municipalities, {} countries, {} codes\n",
        stats.municipalities, stats.countries, stats.codes
    );

    let codec = Codec::new(&registry);

    println!("--- Example 1: Encode ---");
    let code = codec.encode("Caccamo", "Fabio", "M", "03/04/1985", "Torino")?;
    println!("Caccamo Fabio, 03/04/1985, Torino → {code}\n");

    println!("--- Example 2: Decode ---");
    let decoded = codec.decode(&code)?;
    println!("Gender: {}", decoded.gender);
    println!("Birthdate: {}", decoded.birthdate);
    println!(
        "Birthplace: {} ({}) [{}]\n",
        decoded.birthplace.name, decoded.birthplace.province, decoded.birthplace.code
    );

    println!("--- Example 3: Omocodia ---");
    for variant in decoded.omocodes.iter().take(5) {
        println!("{variant} valid={} omocode={}", codec.is_valid(variant), codec.is_omocode(variant));
    }
    println!("... and {} more", decoded.omocodes.len() - 5);

    Ok(())
}
