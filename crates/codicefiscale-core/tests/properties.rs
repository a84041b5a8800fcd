//! Property-based tests for the codec.
//!
//! 1. **Round trip**: every encoded identity decodes back to itself
//! 2. **Check character**: total over the code alphabet, case-insensitive
//! 3. **Omocodia**: variants share one identity and one variant list
//! 4. **Gender**: women are encoded with the day offset by 40

mod common;

use chrono::{Datelike, Duration, NaiveDate};
use codicefiscale_core::{encode_birthdate, encode_cin, omocodes, Gender};
use common::{codec, date};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Proptest Strategies
// ─────────────────────────────────────────────────────────────────────────────

fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ']{0,14}"
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Dates less than a century before the pinned reference date.
fn birthdate() -> impl Strategy<Value = NaiveDate> {
    let start = date(1930, 1, 1);
    let days = (common::today() - start).num_days();
    (0..=days).prop_map(move |offset| start + Duration::days(offset))
}

/// Places whose single record covers every date from 1930 on.
fn birthplace() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop_oneof![
        Just(("Torino", "L219")),
        Just(("Pinerolo", "G674")),
        Just(("Roma", "H501")),
        Just(("Marocco", "Z330")),
        Just(("Lettonia", "Z145")),
    ]
}

fn code_body() -> impl Strategy<Value = String> {
    "[A-Z0-9]{15}"
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn encode_then_decode_preserves_identity(
        lastname in name(),
        firstname in name(),
        gender in gender(),
        birthdate in birthdate(),
        (place, place_code) in birthplace(),
    ) {
        let codec = codec();
        let code = codec
            .encode(&lastname, &firstname, gender.as_str(), &birthdate, place)
            .unwrap();
        prop_assert_eq!(code.len(), 16);

        let decoded = codec.decode(&code).unwrap();
        prop_assert_eq!(decoded.gender, gender);
        prop_assert_eq!(decoded.birthdate, birthdate);
        prop_assert_eq!(decoded.birthplace.code.as_str(), place_code);
        prop_assert_eq!(&decoded.omocodes[0], &code);
    }

    #[test]
    fn check_character_is_total(body in code_body()) {
        let cin = encode_cin(&body).unwrap();
        prop_assert!(cin.is_ascii_uppercase());
        prop_assert_eq!(encode_cin(&body.to_lowercase()).unwrap(), cin);
    }

    #[test]
    fn female_day_is_offset_by_forty(birthdate in birthdate()) {
        let male = encode_birthdate(&birthdate, "M").unwrap();
        let female = encode_birthdate(&birthdate, "F").unwrap();
        prop_assert_eq!(&male[..3], &female[..3]);

        let male_day: u32 = male[3..].parse().unwrap();
        let female_day: u32 = female[3..].parse().unwrap();
        prop_assert_eq!(male_day, birthdate.day());
        prop_assert_eq!(female_day, male_day + 40);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn omocodes_share_identity(
        birthdate in birthdate(),
        gender in gender(),
        pick in 0usize..128,
    ) {
        let codec = codec();
        let code = codec
            .encode("Caccamo", "Fabio", gender.as_str(), &birthdate, "Torino")
            .unwrap();
        let variants = omocodes(&code).unwrap();
        prop_assert_eq!(variants.len(), 128);

        let variant = &variants[pick];
        prop_assert_eq!(&omocodes(variant).unwrap(), &variants);

        let decoded = codec.decode(variant).unwrap();
        prop_assert_eq!(decoded.birthdate, birthdate);
        prop_assert_eq!(decoded.gender, gender);
        prop_assert_eq!(decoded.birthplace.code.as_str(), "L219");
        prop_assert_eq!(codec.is_omocode(variant), pick != 0);
    }
}
