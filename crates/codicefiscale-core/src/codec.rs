// crates/codicefiscale-core/src/codec.rs

//! Encoding and decoding of complete fiscal codes.

use crate::birthdate::{decode_day, encode_birthdate_at, infer_year, month_from_code, Gender, IntoBirthdate};
use crate::checksum::encode_cin;
use crate::error::{CodiceError, Result};
use crate::name::{encode_firstname, encode_lastname};
use crate::omocodia::{letter_to_digit, omocodes};
use crate::registry::{select_by_date, Registry, RegistryEntry};
use crate::text::slugify;
use crate::traits::RegistrySearch;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CODICEFISCALE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^",
        r"(?P<lastname>[A-Z]{3})",
        r"(?P<firstname>[A-Z]{3})",
        r"(?P<birthdate>(?P<birthdate_year>[A-Z0-9]{2})(?P<birthdate_month>[ABCDEHLMPRST])(?P<birthdate_day>[A-Z0-9]{2}))",
        r"(?P<birthplace>[A-Z][A-Z0-9]{3})",
        r"(?P<cin>[A-Z])",
        r"$",
    ))
    .expect("fiscal code grammar is a valid regex")
});

/// The grammar fields of a code, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCode {
    /// Normalized input: separators removed, uppercase.
    pub code: String,
    pub lastname: String,
    pub firstname: String,
    pub birthdate: String,
    pub birthdate_year: String,
    pub birthdate_month: String,
    pub birthdate_day: String,
    pub birthplace: String,
    pub cin: String,
}

/// Everything a valid code tells about its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedIdentity {
    pub code: String,
    pub gender: Gender,
    pub birthdate: NaiveDate,
    pub birthplace: RegistryEntry,
    /// The 128 variants of the code, canonical form first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omocodes: Vec<String>,
    pub raw: RawCode,
}

/// Splits `code` into its grammar fields.
///
/// Whitespace, hyphens and letter case are ignored. Only the grammar is
/// checked: dates, places and the check character are not.
///
/// ```rust
/// use codicefiscale_core::decode_raw;
///
/// let raw = decode_raw("ccc-fba 85D03 L219P").unwrap();
/// assert_eq!(raw.code, "CCCFBA85D03L219P");
/// assert_eq!(raw.birthplace, "L219");
/// assert!(decode_raw("CCCFBA85X03L219P").is_err());
/// ```
pub fn decode_raw(code: &str) -> Result<RawCode> {
    let normalized = slugify(code).replace('-', "").to_uppercase();
    let caps = CODICEFISCALE_RE
        .captures(&normalized)
        .ok_or_else(|| CodiceError::InvalidSyntax(normalized.clone()))?;
    let field = |name: &str| caps.name(name).map_or_else(String::new, |m| m.as_str().to_string());

    Ok(RawCode {
        lastname: field("lastname"),
        firstname: field("firstname"),
        birthdate: field("birthdate"),
        birthdate_year: field("birthdate_year"),
        birthdate_month: field("birthdate_month"),
        birthdate_day: field("birthdate_day"),
        birthplace: field("birthplace"),
        cin: field("cin"),
        code: normalized,
    })
}

/// Reads a numeric field that may carry omocodia letters.
fn numeric_field(field: &str, code: &str) -> Result<u32> {
    let digits: String = field.chars().map(letter_to_digit).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CodiceError::InvalidSyntax(format!(
            "non numeric field {field:?} in {code}"
        )));
    }
    digits
        .parse()
        .map_err(|_| CodiceError::InvalidSyntax(format!("non numeric field {field:?} in {code}")))
}

/// Encoder/decoder bound to a birthplace registry.
///
/// The reference date ("today") drives the century of two-digit years, in
/// free-text birthdates and in decoded codes alike; it defaults to the local
/// clock.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'r> {
    registry: &'r Registry,
    today: NaiveDate,
}

impl<'r> Codec<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Codec {
            registry,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Overrides the reference date used for century inference.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Encodes a birthplace to its 4-character code.
    ///
    /// `birthplace` may be a municipality or country name (with or without a
    /// `", province"` / `"(XX)"` qualifier) or a place code.
    pub fn encode_birthplace(&self, birthplace: &str, birthdate: Option<NaiveDate>) -> Result<String> {
        if birthplace.trim().is_empty() {
            return Err(CodiceError::InvalidArgument("'birthplace' argument cant be empty".into()));
        }
        self.registry
            .resolve_place(birthplace, birthdate)
            .map(|entry| entry.code.clone())
            .ok_or_else(|| CodiceError::unmapped(birthplace, birthdate))
    }

    /// Encodes a complete fiscal code.
    ///
    /// The result is decoded before being returned, so a code this method
    /// hands out always passes [`Codec::decode`].
    pub fn encode<D: IntoBirthdate + ?Sized>(
        &self,
        lastname: &str,
        firstname: &str,
        gender: &str,
        birthdate: &D,
        birthplace: &str,
    ) -> Result<String> {
        let lastname_code = encode_lastname(lastname);
        let firstname_code = encode_firstname(firstname);
        let birthdate_code = encode_birthdate_at(birthdate, gender, self.today)?;
        let birthplace_code = self.encode_birthplace(birthplace, birthdate.to_birthdate_at(self.today))?;

        let mut code = format!("{lastname_code}{firstname_code}{birthdate_code}{birthplace_code}");
        let cin = encode_cin(&code)?;
        code.push(cin);

        self.decode(&code)?;
        Ok(code)
    }

    /// Decodes a fiscal code, omocodes included.
    pub fn decode(&self, code: &str) -> Result<DecodedIdentity> {
        let raw = decode_raw(code)?;

        let year_field = numeric_field(&raw.birthdate_year, &raw.code)?;
        let day_field = numeric_field(&raw.birthdate_day, &raw.code)?;
        let month = raw
            .birthdate_month
            .chars()
            .next()
            .and_then(month_from_code)
            .ok_or_else(|| CodiceError::InvalidSyntax(raw.code.clone()))?;
        let (day, gender) = decode_day(day_field);

        let mut place_chars = raw.birthplace.chars();
        let birthplace_code: String = place_chars
            .next()
            .into_iter()
            .chain(place_chars.map(letter_to_digit))
            .collect();

        let year = infer_year(year_field, self.today);
        let (birthdate, birthplace) = match self.resolve_birth(year, month, day, &birthplace_code) {
            Ok(found) => found,
            Err(error) => {
                // People over 100 years old.
                tracing::debug!(code = %raw.code, year, %error, "retrying with the previous century");
                self.resolve_birth(year - 100, month, day, &birthplace_code)
                    .map_err(|_| error)?
            }
        };

        let found = raw.cin.chars().next().unwrap_or_default();
        let expected = encode_cin(&raw.code)?;
        if found != expected {
            return Err(CodiceError::ChecksumMismatch { expected, found });
        }

        Ok(DecodedIdentity {
            code: raw.code.clone(),
            gender,
            birthdate,
            birthplace: birthplace.clone(),
            omocodes: omocodes(&raw.code)?,
            raw,
        })
    }

    fn resolve_birth(
        &self,
        year: i32,
        month: u32,
        day: u32,
        birthplace_code: &str,
    ) -> Result<(NaiveDate, &'r RegistryEntry)> {
        let birthdate = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CodiceError::InvalidArgument(format!("invalid date: {year}/{month}/{day}"))
        })?;
        let options = self.registry.find_by_code(birthplace_code);
        let birthplace = select_by_date(&options, Some(birthdate))
            .ok_or_else(|| CodiceError::unmapped(birthplace_code, Some(birthdate)))?;
        Ok((birthdate, birthplace))
    }

    /// `true` when `code` decodes without errors.
    pub fn is_valid(&self, code: &str) -> bool {
        self.decode(code).is_ok()
    }

    /// `true` when `code` is valid and is one of its own non-canonical
    /// variants.
    pub fn is_omocode(&self, code: &str) -> bool {
        match self.decode(code) {
            Ok(decoded) => decoded.omocodes[1..].contains(&decoded.code),
            Err(_) => false,
        }
    }
}
