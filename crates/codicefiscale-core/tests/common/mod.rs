#![allow(dead_code)]

use chrono::NaiveDate;
use codicefiscale_core::{Codec, Registry};
use once_cell::sync::Lazy;
use std::path::PathBuf;

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    Registry::load_from_dir(fixtures_dir()).expect("fixture registry must load")
});

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Reference date pinned so century inference does not drift with the clock.
pub fn today() -> NaiveDate {
    date(2026, 10, 18)
}

pub fn codec() -> Codec<'static> {
    Codec::new(registry()).with_today(today())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
