//! Merge stage: one roster from persisted universities and names that only
//! appear on professor records.

use std::collections::HashSet;

use prof_core::entities::{Professor, University};

/// Distinct non-empty `universityName` values in first-seen order.
///
/// Names equal ignoring case collapse to the first spelling seen.
#[must_use]
pub fn inferred_university_names(professors: &[Professor]) -> Vec<String> {
    let mut seen = HashSet::new();
    professors
        .iter()
        .filter_map(|p| p.university_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Persisted universities first, then a placeholder for every inferred name
/// with no persisted counterpart.
///
/// No two entries in the result share a name ignoring case. A persisted
/// entry is never replaced by an inferred one; if two persisted records
/// differ only by case, the first is kept and the collision is logged.
#[must_use]
pub fn merge_roster(persisted: &[University], inferred: &[String]) -> Vec<University> {
    let mut seen: HashSet<String> = HashSet::with_capacity(persisted.len() + inferred.len());
    let mut roster = Vec::with_capacity(persisted.len() + inferred.len());

    for university in persisted {
        if seen.insert(university.name_key()) {
            roster.push(university.clone());
        } else {
            tracing::warn!(
                name = %university.name,
                id = ?university.id,
                "persisted university differs from another only by case; keeping the first"
            );
        }
    }

    for name in inferred {
        if seen.insert(name.to_lowercase()) {
            roster.push(University::placeholder(name.clone()));
        }
    }

    roster
}
