// crates/codicefiscale-core/src/common.rs

use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the registry.
///
/// Returned by [`RegistrySearch::stats`](crate::traits::RegistrySearch::stats);
/// the counts reflect the in-memory index, historical entries included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub municipalities: usize,
    pub countries: usize,
    /// Distinct place codes.
    pub codes: usize,
}
