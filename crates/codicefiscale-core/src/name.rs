// crates/codicefiscale-core/src/name.rs

//! Surname and first name fragments (characters 1-6 of the code).

use crate::text::slugify;

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
const VOWELS: &str = "aeiou";

fn consonants(slug: &str) -> Vec<char> {
    slug.chars().filter(|c| CONSONANTS.contains(*c)).collect()
}

fn vowels(slug: &str) -> Vec<char> {
    slug.chars().filter(|c| VOWELS.contains(*c)).collect()
}

/// Up to three consonants, then vowels, then `X` padding.
fn assemble(consonants: &[char], vowels: &[char]) -> String {
    consonants
        .iter()
        .take(3)
        .chain(vowels.iter().take(3))
        .copied()
        .chain(std::iter::repeat('x'))
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Encodes a surname to its 3-letter fragment.
///
/// ```rust
/// use codicefiscale_core::encode_lastname;
///
/// assert_eq!(encode_lastname("Caccamo"), "CCC");
/// assert_eq!(encode_lastname("Fò"), "FOX");
/// assert_eq!(encode_lastname(""), "XXX");
/// ```
pub fn encode_lastname(lastname: &str) -> String {
    let slug = slugify(lastname);
    assemble(&consonants(&slug), &vowels(&slug))
}

/// Alias of [`encode_lastname`].
pub fn encode_surname(surname: &str) -> String {
    encode_lastname(surname)
}

/// Encodes a first name to its 3-letter fragment.
///
/// With more than three consonants the second one is skipped
/// (`Alessandro` → `LSN`, not `LSS`).
pub fn encode_firstname(firstname: &str) -> String {
    let slug = slugify(firstname);
    let mut consonants = consonants(&slug);
    if consonants.len() > 3 {
        consonants.remove(1);
    }
    assemble(&consonants, &vowels(&slug))
}
