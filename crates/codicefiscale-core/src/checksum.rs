// crates/codicefiscale-core/src/checksum.rs

//! The trailing check character (CIN).

use crate::error::{CodiceError, Result};

/// Values of characters at odd (1-based) positions, indexed `A..Z`.
/// Digits share the values of the first ten letters.
const ODD_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

fn char_index(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

fn char_value(c: char, position: usize) -> Option<u32> {
    let index = char_index(c)?;
    if position % 2 == 1 {
        Some(ODD_VALUES[index])
    } else {
        Some(index as u32)
    }
}

/// Computes the check character over the first 15 characters of `code`.
///
/// Accepts the 15-character body or a full 16-character code (its last
/// character is ignored).
///
/// ```rust
/// use codicefiscale_core::encode_cin;
///
/// assert_eq!(encode_cin("CCCFBA85D03L219").unwrap(), 'P');
/// assert_eq!(encode_cin("CCCFBA85D03L219B").unwrap(), 'P');
/// assert!(encode_cin("CCCFBA85D03").is_err());
/// ```
pub fn encode_cin(code: &str) -> Result<char> {
    if code.is_empty() {
        return Err(CodiceError::InvalidArgument("'code' argument cant be empty".into()));
    }
    let len = code.chars().count();
    if len != 15 && len != 16 {
        return Err(CodiceError::InvalidArgument(format!(
            "'code' length must be 15 or 16, not: {len}"
        )));
    }

    let mut total = 0;
    for (i, c) in code.chars().take(15).enumerate() {
        let c = c.to_ascii_uppercase();
        total += char_value(c, i + 1).ok_or_else(|| {
            CodiceError::InvalidArgument(format!("invalid character {c:?} in code {code:?}"))
        })?;
    }
    Ok((b'A' + (total % 26) as u8) as char)
}
