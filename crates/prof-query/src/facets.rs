//! Option lists for search dropdowns and summary counts.

use std::collections::BTreeSet;

use prof_core::entities::{Professor, University};

fn narrowed(options: BTreeSet<String>, fragment: &str) -> Vec<String> {
    let fragment = fragment.trim().to_lowercase();
    options
        .into_iter()
        .filter(|option| fragment.is_empty() || option.to_lowercase().contains(&fragment))
        .collect()
}

/// Distinct non-empty university names on professor records, sorted and
/// narrowed by a case-insensitive fragment.
#[must_use]
pub fn university_options(professors: &[Professor], fragment: &str) -> Vec<String> {
    let names = professors
        .iter()
        .filter_map(|p| p.university_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    narrowed(names, fragment)
}

/// Distinct research-interest tokens, sorted and narrowed by a fragment.
#[must_use]
pub fn interest_options(professors: &[Professor], fragment: &str) -> Vec<String> {
    let tokens = professors
        .iter()
        .flat_map(Professor::interest_tokens)
        .map(str::to_string)
        .collect();
    narrowed(tokens, fragment)
}

#[must_use]
pub fn state_options(universities: &[University]) -> Vec<String> {
    universities
        .iter()
        .filter_map(|u| u.state.as_deref())
        .map(str::trim)
        .filter(|state| !state.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Universities that list a CS faculty page.
#[must_use]
pub fn with_faculty_url(universities: &[University]) -> usize {
    universities
        .iter()
        .filter(|u| u.cs_faculty_website_url.as_deref().is_some_and(|url| !url.trim().is_empty()))
        .count()
}
