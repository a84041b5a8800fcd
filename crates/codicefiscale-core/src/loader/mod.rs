// crates/codicefiscale-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary cache vs JSON sources). Nothing here is used
//! while encoding or decoding: the codec only sees the built [`Registry`].

use crate::error::{CodiceError, Result};
use crate::registry::Registry;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

mod cache;
#[cfg(feature = "json")]
mod json;

/// Environment variable overriding [`Registry::default_data_dir`].
pub const DATA_DIR_ENV: &str = "CODICEFISCALE_DATA";

pub const MUNICIPALITIES_FILE: &str = "municipalities.json";
pub const COUNTRIES_FILE: &str = "countries.json";
/// Optional: countries that no longer exist, loaded before [`COUNTRIES_FILE`].
pub const DELETED_COUNTRIES_FILE: &str = "deleted-countries.json";

#[cfg(not(feature = "compact"))]
pub const CACHE_FILE: &str = "registry.bin";
#[cfg(feature = "compact")]
pub const CACHE_FILE: &str = "registry.comp.bin";

// Single in-process cache so we only build once per process.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
static REGISTRY_CACHE: OnceCell<Registry> = OnceCell::new();

impl Registry {
    /// `$CODICEFISCALE_DATA` if set, otherwise `data/` inside this crate.
    ///
    /// The datasets are not bundled: `data/` has to be populated (or the
    /// variable set) before [`Registry::load`] can succeed.
    pub fn default_data_dir() -> PathBuf {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        }
    }

    /// The process-wide registry, built from [`Registry::default_data_dir`]
    /// on first use (through the binary cache when it is fresh).
    #[cfg(feature = "json")]
    pub fn load() -> Result<&'static Registry> {
        REGISTRY_CACHE.get_or_try_init(|| Registry::load_cached(Registry::default_data_dir()))
    }
}

/// Locates `name` in `dir`, also trying the `.gz` variant with `compact`.
#[cfg_attr(not(feature = "json"), allow(dead_code))]
pub(crate) fn find_source(dir: &Path, name: &str) -> Option<PathBuf> {
    let plain = dir.join(name);
    if plain.is_file() {
        return Some(plain);
    }
    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{name}.gz"));
        if gz.is_file() {
            return Some(gz);
        }
    }
    None
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the file
/// name ends in `.gz`.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CodiceError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    if gzipped {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(CodiceError::InvalidData(format!(
                "{} is gzipped but 'compact' is disabled",
                path.display()
            )));
        }
    }
    Ok(Box::new(reader))
}
