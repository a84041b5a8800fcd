//! Regressions on historical registry data.

mod common;

use codicefiscale_core::Gender;
use common::{codec, date};

#[test]
fn suppressed_name_does_not_shadow_current_one() {
    let decoded = codec().decode("LNNFNC80A01A089K").unwrap();
    assert_eq!(decoded.birthplace.code, "A089");
    assert_eq!(decoded.birthplace.name.to_uppercase(), "AGRIGENTO");
    assert_eq!(decoded.birthplace.province, "AG");
}

#[test]
fn historical_country_names() {
    let codec = codec();
    for (code, country) in [
        ("CCCFBA85D03Z118W", "Jugoslavia"),
        ("CCCFBA85D03Z135S", "Unione Repubbliche Socialiste Sovietiche"),
        ("CCCFBA05D03Z157G", "Serbia e Montenegro"),
    ] {
        let decoded = codec.decode(code).unwrap_or_else(|e| panic!("{code}: {e}"));
        assert_eq!(decoded.birthplace.name, country);
        assert!(decoded.birthplace.is_foreign());
    }
}

#[test]
fn single_digit_years() {
    let codec = codec();
    let code = codec
        .encode("Rossi", "Mario", "M", "29/11/2004", "Torino")
        .unwrap();
    assert_eq!(code, "RSSMRA04S29L219G");

    let decoded = codec.decode("RSSMRA00S29L219C").unwrap();
    assert_eq!(decoded.birthdate, date(2000, 11, 29));
    assert_eq!(decoded.birthplace.code, "L219");
    assert_eq!(decoded.birthplace.date_created, Some(date(1889, 8, 12)));
    assert!(decoded.birthplace.active);
}

#[test]
fn birthdate_in_a_gap_between_records() {
    let decoded = codec().decode("DFLNTN42T20B860H").unwrap();
    assert_eq!(decoded.gender, Gender::Male);
    assert_eq!(decoded.birthdate, date(1942, 12, 20));

    let place = &decoded.birthplace;
    assert_eq!(place.code, "B860");
    assert_eq!(place.name, "Casagiove");
    assert_eq!(place.province, "NA");
    assert_eq!(place.date_created, Some(date(1927, 1, 12)));
    assert_eq!(place.date_deleted, Some(date(1928, 6, 27)));
    assert!(!place.active);
}

#[test]
fn people_over_one_hundred_years_old() {
    let codec = codec();
    let code = codec
        .encode("Michele", "Faedi", "m", "01/01/1907", "Gallico")
        .unwrap();
    assert_eq!(code, "MCHFDA07A01D877A");

    let decoded = codec.decode(&code).unwrap();
    assert_eq!(decoded.birthdate, date(1907, 1, 1));
    assert_eq!(decoded.birthplace.province, "RC");
    assert_eq!(decoded.birthplace.date_deleted, Some(date(1927, 8, 2)));
}

#[test]
fn municipality_created_after_birthdate() {
    let codec = codec();

    let decoded = codec.decode("CCCFBA30H66F991T").unwrap();
    assert_eq!(decoded.gender, Gender::Female);
    assert_eq!(decoded.birthdate, date(1930, 6, 26));
    assert_eq!(decoded.birthplace.name, "Nuxis");
    assert_eq!(decoded.birthplace.province, "CA");
    assert_eq!(decoded.birthplace.date_created, Some(date(1958, 1, 26)));

    let decoded = codec.decode("DBRGRZ53R66F059C").unwrap();
    assert_eq!(decoded.gender, Gender::Female);
    assert_eq!(decoded.birthdate, date(1953, 10, 26));
    assert_eq!(decoded.birthplace.name, "Mattinata");
    assert_eq!(decoded.birthplace.date_created, Some(date(1955, 8, 19)));
}

#[test]
fn names_equal_once_slugified() {
    let codec = codec();
    let code = codec
        .encode("DE GREGORI", "FRANCESCO", "M", "31/12/1984", "PATERNÒ")
        .unwrap();
    assert_eq!(code, "DGRFNC84T31G371E");

    let decoded = codec.decode(&code).unwrap();
    let place = &decoded.birthplace;
    assert_eq!(place.code, "G371");
    assert_eq!(place.name, "Paternò");
    assert_eq!(place.name_trans, "Paterno'");
    assert_eq!(place.province, "CT");
    assert_eq!(place.date_deleted, Some(date(1985, 5, 16)));
}

#[test]
fn exact_name_disambiguates_after_renumbering() {
    let codec = codec();
    let born = Some(date(1990, 1, 1));
    assert_eq!(codec.encode_birthplace("PATERNÒ", born).unwrap(), "G371");
    assert_eq!(codec.encode_birthplace("Paternò", born).unwrap(), "G371");
    assert_eq!(codec.encode_birthplace("Paterno", born).unwrap(), "M269");

    let code = codec
        .encode("DE GREGORI", "FRANCESCO", "M", "01/01/1990", "PATERNÒ")
        .unwrap();
    let decoded = codec.decode(&code).unwrap();
    assert_eq!(decoded.birthplace.code, "G371");
    assert_eq!(decoded.birthplace.date_created, Some(date(1985, 5, 17)));
}

#[test]
fn province_qualifier_disambiguates() {
    let codec = codec();
    assert_eq!(
        codec.encode_birthplace("Paterno (PZ)", Some(date(1984, 12, 31))).unwrap(),
        "M269"
    );
    assert_eq!(
        codec.encode_birthplace("Paternò (CT)", Some(date(1984, 12, 31))).unwrap(),
        "G371"
    );
}
