// crates/codicefiscale-core/src/birthdate.rs

//! Birthdate and gender fragment (characters 7-11 of the code).

use crate::error::{CodiceError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month letters, January first.
pub const MONTHS: [char; 12] = ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Added to the day of month for women.
pub const FEMALE_DAY_OFFSET: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CodiceError;

    /// Accepts `M`/`F` in any case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Err(CodiceError::InvalidArgument("'gender' argument cant be empty".into())),
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            _ => Err(CodiceError::InvalidArgument(format!(
                "'gender' argument must be 'M' or 'F', not {s:?}"
            ))),
        }
    }
}

/// Anything a birthdate can be read from: structured dates or free text.
pub trait IntoBirthdate {
    /// Reads the date; `today` places two-digit years of free text.
    fn to_birthdate_at(&self, today: NaiveDate) -> Option<NaiveDate>;

    fn to_birthdate(&self) -> Option<NaiveDate> {
        self.to_birthdate_at(chrono::Local::now().date_naive())
    }
}

impl IntoBirthdate for NaiveDate {
    fn to_birthdate_at(&self, _today: NaiveDate) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl IntoBirthdate for NaiveDateTime {
    fn to_birthdate_at(&self, _today: NaiveDate) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl IntoBirthdate for str {
    fn to_birthdate_at(&self, today: NaiveDate) -> Option<NaiveDate> {
        parse_date_relative(self, today)
    }
}

impl IntoBirthdate for String {
    fn to_birthdate_at(&self, today: NaiveDate) -> Option<NaiveDate> {
        parse_date_relative(self, today)
    }
}

impl<T: IntoBirthdate + ?Sized> IntoBirthdate for &T {
    fn to_birthdate_at(&self, today: NaiveDate) -> Option<NaiveDate> {
        (**self).to_birthdate_at(today)
    }
}

impl<T: IntoBirthdate> IntoBirthdate for Option<T> {
    fn to_birthdate_at(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.as_ref().and_then(|date| date.to_birthdate_at(today))
    }
}

/// Parses a free-text date.
///
/// A 4-digit first token means year-month-day (`1985-04-03`, `1985/4/3`),
/// anything else day-month-year (`03/04/1985`, `3.4.85`). When the month
/// would exceed 12 and the day would not, the two are swapped
/// (`04/13/1985`). Tokens after the third (a time part) are ignored;
/// 8-digit `YYYYMMDD` is accepted too.
///
/// ```rust
/// use chrono::NaiveDate;
/// use codicefiscale_core::birthdate::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(1985, 4, 3);
/// assert_eq!(parse_date("03/04/1985"), expected);
/// assert_eq!(parse_date("1985.4.3"), expected);
/// assert_eq!(parse_date("04/03/1985"), NaiveDate::from_ymd_opt(1985, 3, 4));
/// assert_eq!(parse_date("03/13/1985"), NaiveDate::from_ymd_opt(1985, 3, 13));
/// assert_eq!(parse_date("1985/1985/1985"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_date_relative(text, chrono::Local::now().date_naive())
}

pub(crate) fn parse_date_relative(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let tokens: Vec<&str> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|t| !t.is_empty())
        .collect();

    let (year, month, day) = match tokens.as_slice() {
        [compact] if compact.len() == 8 => (&compact[..4], &compact[4..6], &compact[6..]),
        [first, second, third, ..] if first.len() == 4 => (*first, *second, *third),
        [first, second, third, ..] => (*third, *second, *first),
        _ => return None,
    };

    let mut full_year: i32 = year.parse().ok()?;
    if year.len() <= 2 {
        full_year = expand_two_digit_year(full_year, today.year());
    }
    let (mut month, mut day): (u32, u32) = (month.parse().ok()?, day.parse().ok()?);
    if month > 12 && day <= 12 {
        std::mem::swap(&mut month, &mut day);
    }
    NaiveDate::from_ymd_opt(full_year, month, day)
}

/// Puts a two-digit year in the century that keeps it within 50 years of
/// `current_year`.
fn expand_two_digit_year(year: i32, current_year: i32) -> i32 {
    let year = current_year - current_year.rem_euclid(100) + year;
    if year >= current_year + 50 {
        year - 100
    } else if year < current_year - 50 {
        year + 100
    } else {
        year
    }
}

/// Month letter for a 1-based month.
pub fn month_code(month: u32) -> Option<char> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// 1-based month for a month letter.
pub fn month_from_code(code: char) -> Option<u32> {
    MONTHS
        .iter()
        .position(|&m| m == code.to_ascii_uppercase())
        .map(|i| i as u32 + 1)
}

/// Splits a decoded day field into day of month and gender.
pub fn decode_day(day_field: u32) -> (u32, Gender) {
    if day_field > FEMALE_DAY_OFFSET {
        (day_field - FEMALE_DAY_OFFSET, Gender::Female)
    } else {
        (day_field, Gender::Male)
    }
}

/// Full year for a two-digit year field: the current century, or the
/// previous one when that would put the birth in the future.
pub fn infer_year(year_field: u32, today: NaiveDate) -> i32 {
    let current_year = today.year();
    let year = current_year - current_year.rem_euclid(100) + year_field as i32;
    if year > current_year {
        year - 100
    } else {
        year
    }
}

/// Encodes birthdate and gender to the 5-character fragment.
///
/// ```rust
/// use codicefiscale_core::encode_birthdate;
///
/// assert_eq!(encode_birthdate("03/04/1985", "M").unwrap(), "85D03");
/// assert_eq!(encode_birthdate("03/04/1985", "f").unwrap(), "85D43");
/// assert!(encode_birthdate("03/04/1985", "X").is_err());
/// ```
pub fn encode_birthdate<D: IntoBirthdate + ?Sized>(birthdate: &D, gender: &str) -> Result<String> {
    encode_birthdate_at(birthdate, gender, chrono::Local::now().date_naive())
}

/// [`encode_birthdate`] with an explicit reference date for two-digit years.
pub(crate) fn encode_birthdate_at<D: IntoBirthdate + ?Sized>(
    birthdate: &D,
    gender: &str,
    today: NaiveDate,
) -> Result<String> {
    let date = birthdate
        .to_birthdate_at(today)
        .ok_or_else(|| CodiceError::InvalidArgument("'birthdate' argument is missing or invalid".into()))?;
    let gender: Gender = gender.parse()?;
    Ok(encode_date(date, gender))
}

pub(crate) fn encode_date(date: NaiveDate, gender: Gender) -> String {
    let offset = match gender {
        Gender::Male => 0,
        Gender::Female => FEMALE_DAY_OFFSET,
    };
    // month0() is always < 12
    let month = MONTHS[date.month0() as usize];
    format!(
        "{:02}{}{:02}",
        date.year().rem_euclid(100),
        month,
        date.day() + offset
    )
}
