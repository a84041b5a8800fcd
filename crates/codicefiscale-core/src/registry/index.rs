// crates/codicefiscale-core/src/registry/index.rs
use super::entry::{RegistryEntry, RegistryEntryRaw};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The master registry struct.
///
/// Entries live in one contiguous vector; the three indexes map a key to the
/// positions of its entries, ordered by `date_created`. Built once, then
/// read-only, so it can be shared between threads without locking.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Master list: municipalities first, then countries.
    pub(crate) entries: Vec<RegistryEntry>,
    /// Number of leading municipality entries in `entries`.
    pub(crate) municipality_count: usize,
    /// `slug` and `slug-province` → municipality ids.
    pub(crate) municipalities: HashMap<String, Vec<u32>>,
    /// `slug` → country ids.
    pub(crate) countries: HashMap<String, Vec<u32>>,
    /// place code → ids of every entry that used it.
    pub(crate) codes: HashMap<String, Vec<u32>>,
}

impl Registry {
    /// Converts the raw dataset records and builds the indexes.
    ///
    /// Fails with [`CodiceError::InvalidData`](crate::CodiceError::InvalidData)
    /// on the first malformed record.
    pub fn from_raw(
        municipalities: Vec<RegistryEntryRaw>,
        countries: Vec<RegistryEntryRaw>,
    ) -> Result<Self> {
        let municipalities = municipalities
            .into_iter()
            .map(RegistryEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        let countries = countries
            .into_iter()
            .map(RegistryEntry::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entries(municipalities, countries))
    }

    /// Builds the indexes from already converted entries.
    pub fn from_entries(municipalities: Vec<RegistryEntry>, countries: Vec<RegistryEntry>) -> Self {
        let mut db = Registry {
            entries: Vec::with_capacity(municipalities.len() + countries.len()),
            municipality_count: municipalities.len(),
            ..Default::default()
        };

        for municipality in municipalities {
            let id = db.entries.len() as u32;
            let province = municipality.province.to_lowercase();
            for slug in &municipality.name_slugs {
                push_id(&mut db.municipalities, slug.clone(), id);
                push_id(&mut db.municipalities, format!("{slug}-{province}"), id);
            }
            push_id(&mut db.codes, municipality.code.clone(), id);
            db.entries.push(municipality);
        }

        for country in countries {
            let id = db.entries.len() as u32;
            for slug in &country.name_slugs {
                push_id(&mut db.countries, slug.clone(), id);
            }
            push_id(&mut db.codes, country.code.clone(), id);
            db.entries.push(country);
        }

        let entries = &db.entries;
        for ids in db
            .municipalities
            .values_mut()
            .chain(db.countries.values_mut())
            .chain(db.codes.values_mut())
        {
            // Stable: records created on the same day keep the dataset order.
            ids.sort_by_key(|&id| entries[id as usize].date_created);
        }

        tracing::info!(
            municipalities = db.municipality_count,
            countries = db.entries.len() - db.municipality_count,
            codes = db.codes.len(),
            "registry index built"
        );
        db
    }

    pub(crate) fn collect(&self, ids: Option<&Vec<u32>>) -> Vec<&RegistryEntry> {
        ids.map(|ids| ids.iter().map(|&id| &self.entries[id as usize]).collect())
            .unwrap_or_default()
    }
}

fn push_id(index: &mut HashMap<String, Vec<u32>>, key: String, id: u32) {
    let ids = index.entry(key).or_default();
    // A slug can be listed twice for the same record.
    if ids.last() != Some(&id) {
        ids.push(id);
    }
}
