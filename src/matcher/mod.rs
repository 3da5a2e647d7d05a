//! Free-text query matching against a [`Directory`].

use crate::directory::{Directory, MedicationRecord};
use log::debug;

/// Trim surrounding whitespace and lowercase (Unicode aware, so Å/Ä/Ö fold to å/ä/ö)
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Find the first record matching `query`.
///
/// A record matches when the normalized query equals its canonical name,
/// equals one of its brands (case-insensitive), or is a substring of its
/// canonical name. Brand names are never substring-matched. Records are
/// tried in directory order and the first hit wins.
pub fn find_medication<'a>(query: &str, directory: &'a Directory) -> Option<&'a MedicationRecord> {
    let normalized = normalize_query(query);

    let found = directory.iter().find(|record| {
        normalized == record.canonical_name
            || record.matches_brand(&normalized)
            || record.canonical_name.contains(normalized.as_str())
    });

    match found {
        Some(record) => debug!("Query {:?} matched {}", normalized, record.canonical_name),
        None => debug!("Query {:?} matched nothing", normalized),
    }

    found
}
