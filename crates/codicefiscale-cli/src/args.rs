use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for codicefiscale-cli
#[derive(Debug, Parser)]
#[command(
    name = "codicefiscale",
    version,
    about = "Encode, decode and validate Italian fiscal codes (codice fiscale)"
)]
pub struct CliArgs {
    /// Directory holding municipalities.json and countries.json
    /// (default: the data/ directory of codicefiscale-core)
    #[arg(short = 'd', long = "data", env = "CODICEFISCALE_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Print JSON instead of text (decode always prints JSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the fiscal code of a person
    Encode {
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        firstname: String,
        /// M or F
        #[arg(long)]
        gender: String,
        /// e.g. 03/04/1985 or 1985-04-03
        #[arg(long)]
        birthdate: String,
        /// Municipality or country name, optionally qualified ("Torino (TO)"), or a place code
        #[arg(long)]
        birthplace: String,
    },

    /// Decode a fiscal code and print it as JSON
    Decode {
        code: String,
        /// Also list the 128 omocodia variants
        #[arg(long)]
        omocodes: bool,
    },

    /// Check one or more fiscal codes; exits non-zero if any is invalid
    Validate {
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Show a summary of the registry contents
    Stats,

    /// Search municipalities and countries by name
    Places {
        /// Substring to search (case and accent insensitive)
        query: String,
    },
}
