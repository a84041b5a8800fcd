// crates/codicefiscale-core/src/registry/mod.rs

//! # Birthplace registry
//!
//! The in-memory index of historical municipalities and foreign countries,
//! plus the resolver that picks the entry valid at a given birthdate.

pub mod entry;
mod index;
mod resolver;
mod search;

pub use entry::{parse_registry_date, RegistryEntry, RegistryEntryRaw, FOREIGN_PROVINCE};
pub use index::Registry;
pub use resolver::select_by_date;
