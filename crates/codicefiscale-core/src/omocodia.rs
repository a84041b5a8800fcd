// crates/codicefiscale-core/src/omocodia.rs

//! Omocodia: letter substitutes for the digits of colliding codes.

use crate::checksum::encode_cin;
use crate::error::{CodiceError, Result};
use once_cell::sync::Lazy;

/// Substitutable positions (0-based), in enumeration order.
pub const OMOCODIA_POSITIONS: [usize; 7] = [14, 13, 12, 10, 9, 7, 6];

/// Letter standing in for each digit `0..=9`.
pub const OMOCODIA_LETTERS: [char; 10] = ['L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V'];

/// Number of variants of every code: one per subset of the positions.
pub const OMOCODES_COUNT: usize = 1 << OMOCODIA_POSITIONS.len();

/// Every subset of [`OMOCODIA_POSITIONS`]: the empty one first, then by
/// increasing size, each size in lexicographic combination order.
static COMBINATIONS: Lazy<Vec<Vec<usize>>> = Lazy::new(|| {
    let mut out = Vec::with_capacity(OMOCODES_COUNT);
    for size in 0..=OMOCODIA_POSITIONS.len() {
        push_combinations(&OMOCODIA_POSITIONS, size, 0, &mut Vec::new(), &mut out);
    }
    out
});

fn push_combinations(
    items: &[usize],
    size: usize,
    start: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    for i in start..items.len() {
        current.push(items[i]);
        push_combinations(items, size, i + 1, current, out);
        current.pop();
    }
}

/// `3` → `P`; anything else is returned unchanged.
pub fn digit_to_letter(c: char) -> char {
    c.to_digit(10)
        .map(|d| OMOCODIA_LETTERS[d as usize])
        .unwrap_or(c)
}

/// `P` → `3`; anything else is returned unchanged.
pub fn letter_to_digit(c: char) -> char {
    OMOCODIA_LETTERS
        .iter()
        .position(|&l| l == c)
        .and_then(|d| char::from_digit(d as u32, 10))
        .unwrap_or(c)
}

/// Rewrites `positions` with `map` and appends a fresh check character.
fn substitute(chars: &[char], positions: &[usize], map: fn(char) -> char) -> Result<String> {
    let mut body: Vec<char> = chars[..15].to_vec();
    for &i in positions {
        body[i] = map(body[i]);
    }
    let mut code: String = body.into_iter().collect();
    let cin = encode_cin(&code)?;
    code.push(cin);
    Ok(code)
}

fn code_chars(code: &str) -> Result<Vec<char>> {
    let chars: Vec<char> = code.trim().to_ascii_uppercase().chars().collect();
    if chars.len() != 15 && chars.len() != 16 {
        return Err(CodiceError::InvalidArgument(format!(
            "'code' length must be 15 or 16, not: {}",
            chars.len()
        )));
    }
    Ok(chars)
}

/// The canonical (all-digit) form of `code`, check character recomputed.
pub fn canonical(code: &str) -> Result<String> {
    substitute(&code_chars(code)?, &OMOCODIA_POSITIONS, letter_to_digit)
}

/// All 128 variants of `code`; element 0 is the canonical form.
///
/// ```rust
/// use codicefiscale_core::omocodes;
///
/// let codes = omocodes("CCCFBA85D03L21VE").unwrap();
/// assert_eq!(codes.len(), 128);
/// assert_eq!(codes[0], "CCCFBA85D03L219P");
/// assert_eq!(codes[1], "CCCFBA85D03L21VE");
/// ```
pub fn omocodes(code: &str) -> Result<Vec<String>> {
    let root: Vec<char> = canonical(code)?.chars().collect();
    COMBINATIONS
        .iter()
        .map(|positions| substitute(&root, positions, digit_to_letter))
        .collect()
}
