// crates/codicefiscale-core/src/registry/resolver.rs

//! Maps a place name or code to the registry entry valid at a birthdate.

use super::{Registry, RegistryEntry};
use crate::text::slugify;
use crate::traits::RegistrySearch;
use chrono::NaiveDate;

impl Registry {
    /// Every candidate entry for `key`, tried as municipality slug, country
    /// slug and finally as a literal place code.
    pub fn lookup(&self, key: &str) -> Vec<&RegistryEntry> {
        let slug = slugify(key);
        if slug.is_empty() {
            return Vec::new();
        }
        let found = self.find_municipalities(&slug);
        if !found.is_empty() {
            return found;
        }
        let found = self.find_countries(&slug);
        if !found.is_empty() {
            return found;
        }
        self.find_by_code(&slug.to_uppercase())
    }

    /// Resolves `key` to a single entry, disambiguating by `birthdate`.
    ///
    /// Places whose names share a slug (`Paternò`, `Paterno`) are told apart
    /// by the exact name: among the entries valid at the birthdate, one
    /// named like `key` wins. Without a birthdate the first candidate named
    /// like `key` wins, then the first candidate.
    pub fn resolve(&self, key: &str, birthdate: Option<NaiveDate>) -> Option<&RegistryEntry> {
        let options = self.lookup(key);
        let named = match birthdate {
            Some(date) => options.iter().find(|e| e.contains(date) && e.has_name(key)),
            None => options.iter().find(|e| e.has_name(key)),
        };
        match named {
            Some(entry) => Some(*entry),
            None => select_by_date(&options, birthdate),
        }
    }

    /// Like [`Registry::resolve`], but retries without a trailing qualifier
    /// (`"Torino (TO), Italy"` → `"Torino "`) when the full input is unknown.
    pub fn resolve_place(&self, place: &str, birthdate: Option<NaiveDate>) -> Option<&RegistryEntry> {
        self.resolve(place, birthdate).or_else(|| {
            let head = place.split(|c: char| c == ',' || c == '(').next().unwrap_or(place);
            if head.len() < place.len() {
                self.resolve(head, birthdate)
            } else {
                None
            }
        })
    }
}

/// Picks the candidate whose validity interval contains `birthdate`.
///
/// `options` must be ordered by creation date. When no interval contains the
/// date, the gap and future-creation heuristics are applied in that order.
pub fn select_by_date<'a>(
    options: &[&'a RegistryEntry],
    birthdate: Option<NaiveDate>,
) -> Option<&'a RegistryEntry> {
    let first = *options.first()?;
    let Some(birthdate) = birthdate else {
        return Some(first);
    };

    if let Some(entry) = options.iter().find(|entry| entry.contains(birthdate)) {
        return Some(*entry);
    }

    let entry = fallback(options, birthdate);
    if let Some(entry) = entry {
        tracing::debug!(
            code = %entry.code,
            name = %entry.name,
            %birthdate,
            "birthdate outside every validity interval, resolved by fallback"
        );
    }
    entry
}

fn fallback<'a>(options: &[&'a RegistryEntry], birthdate: NaiveDate) -> Option<&'a RegistryEntry> {
    // The birthdate falls after a deletion that precedes the next creation:
    // a hole in the source data. A record that lived for at most one day
    // most likely carries a wrong deletion date, so it keeps the birthdate.
    for pair in options.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if let (Some(deleted), Some(created)) = (current.date_deleted, next.date_created) {
            if birthdate >= deleted && deleted <= created {
                if current.active_span_days().is_some_and(|days| days <= 1) {
                    return Some(current);
                }
                return Some(next);
            }
        }
    }

    // The code was registered shortly after the birth.
    options
        .iter()
        .copied()
        .find(|entry| entry.date_created.is_some_and(|created| birthdate <= created))
}
