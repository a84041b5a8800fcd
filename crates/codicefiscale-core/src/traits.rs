// crates/codicefiscale-core/src/traits.rs
use crate::common::RegistryStats;
use crate::registry::RegistryEntry;
use crate::text::fold_key;

/// Accent and case insensitive name comparison, on top of [`fold_key`].
///
/// Implementors only expose their display name through
/// [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use codicefiscale_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Paternò").is_named("paterno"));
/// assert!(Place("Forlì").name_contains("FORL"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for RegistryEntry {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Read-only lookups over the birthplace registry.
///
/// Every list returned here is ordered by `date_created` (entries without a
/// creation date first), which is the order the birthplace resolver relies on.
pub trait RegistrySearch {
    fn stats(&self) -> RegistryStats;

    /// All entries, municipalities first.
    fn entries(&self) -> &[RegistryEntry];

    /// Municipalities indexed under `slug` (or `slug-province`).
    fn find_municipalities(&self, slug: &str) -> Vec<&RegistryEntry>;

    /// Foreign countries indexed under `slug`.
    fn find_countries(&self, slug: &str) -> Vec<&RegistryEntry>;

    /// Every historical entry that used the 4-character `code`.
    fn find_by_code(&self, code: &str) -> Vec<&RegistryEntry>;

    /// Entries whose name contains `substr`, ignoring case and accents.
    fn find_by_substring(&self, substr: &str) -> Vec<&RegistryEntry>;
}
