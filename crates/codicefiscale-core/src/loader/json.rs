// crates/codicefiscale-core/src/loader/json.rs
#![cfg(feature = "json")]

use super::{
    find_source, open_stream, COUNTRIES_FILE, DATA_DIR_ENV, DELETED_COUNTRIES_FILE, MUNICIPALITIES_FILE,
};
use crate::error::{CodiceError, Result};
use crate::registry::{Registry, RegistryEntryRaw};
use std::io::Read;
use std::path::Path;

impl Registry {
    /// Builds a registry from two JSON arrays of registry records.
    pub fn from_json_readers<M: Read, C: Read>(municipalities: M, countries: C) -> Result<Self> {
        let municipalities: Vec<RegistryEntryRaw> = serde_json::from_reader(municipalities)?;
        let countries: Vec<RegistryEntryRaw> = serde_json::from_reader(countries)?;
        Registry::from_raw(municipalities, countries)
    }

    /// Parses the source datasets in `dir`.
    ///
    /// Expects `municipalities.json` and `countries.json`; a
    /// `deleted-countries.json` is merged in front of the countries when
    /// present. With `compact`, each file may also be gzipped (`*.json.gz`).
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CodiceError::NotFound(format!(
                "registry data directory {} does not exist: set {DATA_DIR_ENV} (or pass --data to the CLI) \
                 to a directory holding {MUNICIPALITIES_FILE} and {COUNTRIES_FILE}",
                dir.display()
            )));
        }
        let municipalities = read_records(&require_source(dir, MUNICIPALITIES_FILE)?)?;

        let mut countries = match find_source(dir, DELETED_COUNTRIES_FILE) {
            Some(path) => read_records(&path)?,
            None => Vec::new(),
        };
        countries.extend(read_records(&require_source(dir, COUNTRIES_FILE)?)?);

        Registry::from_raw(municipalities, countries)
    }
}

pub(super) fn require_source(dir: &Path, name: &str) -> Result<std::path::PathBuf> {
    find_source(dir, name).ok_or_else(|| {
        CodiceError::NotFound(format!("Dataset {name} not found in {}", dir.display()))
    })
}

fn read_records(path: &Path) -> Result<Vec<RegistryEntryRaw>> {
    let reader = open_stream(path)?;
    let records: Vec<RegistryEntryRaw> = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), records = records.len(), "dataset parsed");
    Ok(records)
}
