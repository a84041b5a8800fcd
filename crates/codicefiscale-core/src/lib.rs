// crates/codicefiscale-core/src/lib.rs

//! Encoder and decoder for the Italian fiscal code (*codice fiscale*).
//!
//! The pure parts of the codec (name, birthdate and check character
//! encoders, omocodia) are plain functions. Everything that touches a
//! birthplace goes through a [`Codec`] bound to a [`Registry`] of historical
//! municipalities and countries.
//!
//! ```rust,no_run
//! use codicefiscale_core::{Codec, Registry};
//!
//! # fn main() -> codicefiscale_core::Result<()> {
//! let registry = Registry::load()?;
//! let codec = Codec::new(registry);
//! let code = codec.encode("Caccamo", "Fabio", "M", "03/04/1985", "Torino")?;
//! assert_eq!(code, "CCCFBA85D03L219P");
//! assert!(codec.is_valid("CCCFBA85D03L21VE"));
//! # Ok(())
//! # }
//! ```

pub mod birthdate;
pub mod checksum;
pub mod codec;
pub mod common;
pub mod error;
pub mod loader;
pub mod name;
pub mod omocodia;
pub mod registry;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::birthdate::{encode_birthdate, Gender, IntoBirthdate};
pub use crate::checksum::encode_cin;
pub use crate::codec::{decode_raw, Codec, DecodedIdentity, RawCode};
pub use crate::common::RegistryStats;
pub use crate::error::{CodiceError, Result};
pub use crate::name::{encode_firstname, encode_lastname, encode_surname};
pub use crate::omocodia::omocodes;
pub use crate::registry::{Registry, RegistryEntry};
pub use crate::traits::{NameMatch, RegistrySearch};
