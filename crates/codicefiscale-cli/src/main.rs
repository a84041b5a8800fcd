//! codicefiscale: command-line interface for codicefiscale-core
//!
//! Encodes, decodes and validates Italian fiscal codes against a historical
//! birthplace registry, and lets you browse that registry.
//!
//! Usage examples
//! --------------
//!
//! - Encode
//!   $ codicefiscale encode --lastname Caccamo --firstname Fabio --gender M \
//!       --birthdate 03/04/1985 --birthplace "Torino (TO)"
//!
//! - Decode (JSON), with the omocodia variants
//!   $ codicefiscale decode CCCFBA85D03L21VE --omocodes
//!
//! - Validate (exit status 1 if any code is invalid)
//!   $ codicefiscale validate CCCFBA85D03L219P RSSMRA68A01H501Y
//!
//! - Search places
//!   $ codicefiscale places paterno
//!
//! Data source
//! -----------
//!
//! The registry is read from `--data <dir>` (or `$CODICEFISCALE_DATA`), by
//! default the `data/` directory of `codicefiscale-core`. A binary cache is
//! written next to the sources and reused while it is newer than them.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use codicefiscale_core::{Codec, Registry, RegistrySearch};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let data_dir = args.data.unwrap_or_else(Registry::default_data_dir);
    tracing::debug!(dir = %data_dir.display(), "loading registry");
    let registry = Registry::load_cached(&data_dir)
        .with_context(|| format!("cannot load registry from {}", data_dir.display()))?;
    let codec = Codec::new(&registry);

    match args.command {
        Commands::Encode {
            lastname,
            firstname,
            gender,
            birthdate,
            birthplace,
        } => {
            let code = codec.encode(&lastname, &firstname, &gender, birthdate.as_str(), &birthplace)?;
            if args.json {
                println!("{}", serde_json::json!({ "code": code }));
            } else {
                println!("{code}");
            }
        }

        Commands::Decode { code, omocodes } => {
            let mut decoded = codec.decode(&code)?;
            if !omocodes {
                decoded.omocodes.clear();
            }
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }

        Commands::Validate { codes } => {
            let mut all_valid = true;
            let mut report = Vec::with_capacity(codes.len());
            for code in &codes {
                let result = codec.decode(code);
                all_valid &= result.is_ok();
                let omocode = result
                    .as_ref()
                    .map(|d| d.omocodes[1..].contains(&d.code))
                    .unwrap_or(false);
                if args.json {
                    report.push(serde_json::json!({
                        "code": code,
                        "valid": result.is_ok(),
                        "omocode": omocode,
                        "error": result.as_ref().err().map(ToString::to_string),
                    }));
                } else {
                    match &result {
                        Ok(_) if omocode => println!("{code}: valid (omocode)"),
                        Ok(_) => println!("{code}: valid"),
                        Err(e) => println!("{code}: invalid ({e})"),
                    }
                }
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            if !all_valid {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Stats => {
            let stats = registry.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Registry statistics:");
                println!("  Municipalities: {}", stats.municipalities);
                println!("  Countries: {}", stats.countries);
                println!("  Place codes: {}", stats.codes);
            }
        }

        Commands::Places { query } => {
            let matches = registry.find_by_substring(&query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No places found matching: {query}");
            } else {
                for place in matches {
                    let created = place.date_created.map(|d| d.to_string()).unwrap_or_default();
                    let deleted = place.date_deleted.map(|d| d.to_string()).unwrap_or_default();
                    println!(
                        "{} {} ({}) {created}..{deleted}",
                        place.code, place.name, place.province
                    );
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
