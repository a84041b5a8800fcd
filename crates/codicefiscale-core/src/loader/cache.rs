// crates/codicefiscale-core/src/loader/cache.rs

//! Bincode snapshot of a built [`Registry`].

use crate::error::{CodiceError, Result};
use crate::registry::Registry;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// Refuses absurd payloads instead of allocating them.
const SIZE_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SIZE_LIMIT)
        .allow_trailing_bytes()
}

impl Registry {
    /// Deserializes a registry from an uncompressed bincode snapshot.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(options().deserialize(data)?)
    }

    /// Serializes the registry (gzipped with `compact`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        // The gzip trailer is only written by finish(); errors there must surface.
        #[cfg(feature = "compact")]
        let mut writer = {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            options().serialize_into(&mut encoder, self)?;
            encoder.finish()?
        };
        #[cfg(not(feature = "compact"))]
        let mut writer = {
            let mut writer = writer;
            options().serialize_into(&mut writer, self)?;
            writer
        };

        writer.flush()?;
        Ok(())
    }

    /// Reads a snapshot written by [`Registry::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            CodiceError::NotFound(format!("Registry cache not found at {}: {}", path.display(), e))
        })?;

        #[cfg(feature = "compact")]
        let mut stream = GzDecoder::new(file);
        #[cfg(not(feature = "compact"))]
        let mut stream = file;

        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Registry::from_bytes(&data)
    }

    /// **Smart Load:** uses `dir/registry*.bin` when it is newer than every
    /// source file, otherwise parses the sources and rewrites the cache.
    #[cfg(feature = "json")]
    pub fn load_cached(dir: impl AsRef<Path>) -> Result<Self> {
        use super::{find_source, COUNTRIES_FILE, DELETED_COUNTRIES_FILE, MUNICIPALITIES_FILE};

        let dir = dir.as_ref();
        let cache_path = dir.join(super::CACHE_FILE);
        let sources: Vec<_> = [MUNICIPALITIES_FILE, COUNTRIES_FILE, DELETED_COUNTRIES_FILE]
            .iter()
            .filter_map(|name| find_source(dir, name))
            .collect();

        if is_cache_fresh(&sources, &cache_path) {
            match Registry::load_binary_file(&cache_path) {
                Ok(db) => {
                    tracing::info!(path = %cache_path.display(), "registry loaded from cache");
                    return Ok(db);
                }
                Err(error) => tracing::warn!(%error, "ignoring unreadable registry cache"),
            }
        }

        let db = Registry::load_from_dir(dir)?;
        // Best-effort: a read-only data dir just means no cache.
        if let Err(error) = db.save_as(&cache_path) {
            tracing::warn!(path = %cache_path.display(), %error, "could not write registry cache");
        }
        Ok(db)
    }
}

#[cfg_attr(not(feature = "json"), allow(dead_code))]
fn is_cache_fresh(sources: &[std::path::PathBuf], cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    sources.iter().all(|source| {
        fs::metadata(source)
            .and_then(|m| m.modified())
            .map_or(false, |source_time| source_time <= cache_time)
    })
}
