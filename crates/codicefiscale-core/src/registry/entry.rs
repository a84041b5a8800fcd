// crates/codicefiscale-core/src/registry/entry.rs

use crate::error::{CodiceError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Province sentinel used by foreign countries.
pub const FOREIGN_PROVINCE: &str = "EE";

/// Raw registry record as it comes from the JSON datasets.
///
/// Dates are ISO-8601 date-times (`1958-01-26T00:00:00`) or the empty string.
/// The `active` flag of the source is informational only: the model derives
/// it from `date_deleted`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryEntryRaw {
    #[serde(default)]
    pub active: bool,
    pub code: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub date_deleted: String,
    pub name: String,
    #[serde(default)]
    pub name_trans: String,
    #[serde(default)]
    pub name_alt: String,
    #[serde(default)]
    pub name_alt_trans: String,
    #[serde(default)]
    pub name_slugs: Vec<String>,
    #[serde(default)]
    pub province: String,
}

/// One historical municipality or country record.
///
/// Entries sharing a `code` describe the same place across renames and
/// boundary changes; the registry keeps them ordered by `date_created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub active: bool,
    pub code: String,
    pub date_created: Option<NaiveDate>,
    pub date_deleted: Option<NaiveDate>,
    pub name: String,
    #[serde(default)]
    pub name_trans: String,
    #[serde(default)]
    pub name_alt: String,
    #[serde(default)]
    pub name_alt_trans: String,
    pub name_slugs: Vec<String>,
    pub province: String,
}

impl RegistryEntry {
    /// `true` for foreign countries (province `EE`).
    pub fn is_foreign(&self) -> bool {
        self.province == FOREIGN_PROVINCE
    }

    /// Whether `date` lies inside `[date_created, date_deleted]`.
    /// Missing bounds are open-ended.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = self.date_created.map_or(true, |start| date >= start);
        let before_end = self.date_deleted.map_or(true, |end| date <= end);
        after_start && before_end
    }

    /// Whether `name` is one of the entry's names, ignoring case but not
    /// accents (`Paternò` is not `Paterno`).
    pub fn has_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        !wanted.is_empty()
            && [&self.name, &self.name_trans, &self.name_alt, &self.name_alt_trans]
                .iter()
                .any(|candidate| candidate.to_lowercase() == wanted)
    }

    /// Length of the validity interval in days, if both bounds are known.
    pub fn active_span_days(&self) -> Option<i64> {
        match (self.date_created, self.date_deleted) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

impl TryFrom<RegistryEntryRaw> for RegistryEntry {
    type Error = CodiceError;

    fn try_from(raw: RegistryEntryRaw) -> Result<Self> {
        let code = raw.code.trim().to_uppercase();
        if code.len() != 4 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CodiceError::InvalidData(format!(
                "invalid place code {:?} for {:?}",
                raw.code, raw.name
            )));
        }
        let date_created = parse_registry_date(&raw.date_created)?;
        let date_deleted = parse_registry_date(&raw.date_deleted)?;

        // Source slugs are trusted, but a record without any still has to be
        // reachable by name.
        let mut name_slugs = raw.name_slugs;
        if name_slugs.is_empty() {
            name_slugs.push(crate::text::slugify(&raw.name));
        }

        Ok(RegistryEntry {
            active: date_deleted.is_none(),
            code,
            date_created,
            date_deleted,
            name: raw.name,
            name_trans: raw.name_trans,
            name_alt: raw.name_alt,
            name_alt_trans: raw.name_alt_trans,
            name_slugs,
            province: raw.province.trim().to_uppercase(),
        })
    }
}

/// Parses the dataset date format: empty, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_registry_date(value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Some(dt.date()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| CodiceError::InvalidData(format!("invalid registry date {value:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(code: &str, created: &str, deleted: &str) -> RegistryEntryRaw {
        RegistryEntryRaw {
            code: code.into(),
            date_created: created.into(),
            date_deleted: deleted.into(),
            name: "Nuxis".into(),
            province: "ca".into(),
            ..Default::default()
        }
    }

    #[test]
    fn converts_raw_dates_and_derives_active() {
        let entry = RegistryEntry::try_from(raw("f991", "1958-01-26T00:00:00", "1965-01-07T00:00:00"))
            .unwrap();
        assert_eq!(entry.code, "F991");
        assert_eq!(entry.province, "CA");
        assert!(!entry.active);
        assert_eq!(entry.date_created, NaiveDate::from_ymd_opt(1958, 1, 26));
        assert_eq!(entry.name_slugs, vec!["nuxis".to_string()]);

        let open = RegistryEntry::try_from(raw("F991", "", "")).unwrap();
        assert!(open.active);
        assert!(open.contains(NaiveDate::from_ymd_opt(1800, 1, 1).unwrap()));
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(RegistryEntry::try_from(raw("F99", "", "")).is_err());
        assert!(RegistryEntry::try_from(raw("F991", "26/01/1958", "")).is_err());
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let entry = RegistryEntry::try_from(raw("F991", "1958-01-26", "1965-01-07")).unwrap();
        assert!(entry.contains(NaiveDate::from_ymd_opt(1958, 1, 26).unwrap()));
        assert!(entry.contains(NaiveDate::from_ymd_opt(1965, 1, 7).unwrap()));
        assert!(!entry.contains(NaiveDate::from_ymd_opt(1965, 1, 8).unwrap()));
        assert_eq!(entry.active_span_days(), Some(2538));
    }
}
