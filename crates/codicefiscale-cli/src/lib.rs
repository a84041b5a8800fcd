//! codicefiscale-cli
//! =================
//!
//! Command-line interface for the `codicefiscale-core` fiscal code codec.
//!
//! This crate primarily provides a binary (`codicefiscale`). The library
//! target only exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install codicefiscale-cli
//! codicefiscale --help
//! codicefiscale encode --lastname Caccamo --firstname Fabio --gender M --birthdate 03/04/1985 --birthplace Torino
//! codicefiscale decode CCCFBA85D03L219P --omocodes
//! codicefiscale validate CCCFBA85D03L21VE
//! codicefiscale --data ./data stats
//! ```
//!
//! For programmatic access, use the [`codicefiscale-core`] crate directly.
//!
//! [`codicefiscale-core`]: https://docs.rs/codicefiscale-core
