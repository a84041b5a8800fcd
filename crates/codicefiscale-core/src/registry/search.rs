// crates/codicefiscale-core/src/registry/search.rs
use super::{Registry, RegistryEntry};
use crate::common::RegistryStats;
use crate::text::{fold_key, slugify};
use crate::traits::{NameMatch, RegistrySearch};

impl RegistrySearch for Registry {
    fn stats(&self) -> RegistryStats {
        RegistryStats {
            municipalities: self.municipality_count,
            countries: self.entries.len() - self.municipality_count,
            codes: self.codes.len(),
        }
    }

    fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    fn find_municipalities(&self, slug: &str) -> Vec<&RegistryEntry> {
        self.collect(self.municipalities.get(slug))
    }

    fn find_countries(&self, slug: &str) -> Vec<&RegistryEntry> {
        self.collect(self.countries.get(slug))
    }

    fn find_by_code(&self, code: &str) -> Vec<&RegistryEntry> {
        self.collect(self.codes.get(code.trim()))
    }

    fn find_by_substring(&self, substr: &str) -> Vec<&RegistryEntry> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        let q_slug = slugify(&q);

        self.entries
            .iter()
            .filter(|entry| {
                entry.name_contains(&q)
                    || (!q_slug.is_empty() && entry.name_slugs.iter().any(|s| s.contains(&q_slug)))
            })
            .collect()
    }
}
