//! Helpers for submitting a faculty listing URL for processing.

use prof_core::entities::Professor;
use url::Url;

/// The host of `input`, or the trimmed input itself when it is not a URL.
fn match_key(input: &str) -> String {
    let trimmed = input.trim();
    Url::parse(trimmed)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| trimmed.to_string())
}

/// Records already scraped from the same site as `faculty_url`.
#[must_use]
pub fn existing_for_faculty_url<'a>(
    professors: &'a [Professor],
    faculty_url: &str,
) -> Vec<&'a Professor> {
    let key = match_key(faculty_url);
    if key.is_empty() {
        return Vec::new();
    }
    professors
        .iter()
        .filter(|p| p.source_url.as_deref().is_some_and(|src| src.contains(&key)))
        .collect()
}

/// Short university name from a faculty URL: `https://www.usf.edu/...` → `USF`.
#[must_use]
pub fn university_name_from_url(faculty_url: &str) -> Option<String> {
    let url = Url::parse(faculty_url.trim()).ok()?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.split('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_uppercase)
}
