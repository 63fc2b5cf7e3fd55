//! University search predicates and ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use prof_core::entities::University;
use prof_core::errors::CoreError;
use serde::{Deserialize, Serialize};

/// Rank used for ordering when a university has none.
pub const UNRANKED_SORT_VALUE: i64 = 9999;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityFilter {
    /// Case-insensitive substring of `name`.
    pub name: String,
    /// Case-insensitive substring of `state`; records with no state fail.
    pub state: String,
    /// Inclusive bounds. A set bound excludes unranked records.
    pub min_ranking: Option<i64>,
    pub max_ranking: Option<i64>,
}

impl UniversityFilter {
    #[must_use]
    pub fn matches(&self, university: &University) -> bool {
        let name = self.name.trim().to_lowercase();
        if !name.is_empty() && !university.name.to_lowercase().contains(&name) {
            return false;
        }

        let state = self.state.trim().to_lowercase();
        if !state.is_empty()
            && !university
                .state
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&state))
        {
            return false;
        }

        if let Some(min) = self.min_ranking {
            if !university.ranking.is_some_and(|rank| rank >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_ranking {
            if !university.ranking.is_some_and(|rank| rank <= max) {
                return false;
            }
        }
        true
    }

    /// Records that pass, in roster order.
    #[must_use]
    pub fn apply<'a>(&self, universities: &'a [University]) -> Vec<&'a University> {
        universities.iter().filter(|u| self.matches(u)).collect()
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Ranking,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "ranking" | "rank" => Ok(Self::Ranking),
            other => Err(CoreError::Validation(format!(
                "sort key must be name or ranking; got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Ranking => "ranking",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "sort direction must be asc or desc; got '{other}'"
            ))),
        }
    }
}

/// Sort column plus direction for the university list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversitySort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl UniversitySort {
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Selecting the active column flips direction; a new column starts
    /// ascending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.flipped())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }

    #[must_use]
    pub fn compare(self, a: &University, b: &University) -> Ordering {
        let ordering = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Ranking => sort_rank(a).cmp(&sort_rank(b)),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable sort in place.
    pub fn sort(self, universities: &mut [&University]) {
        universities.sort_by(|a, b| self.compare(a, b));
    }
}

fn sort_rank(university: &University) -> i64 {
    university.ranking.unwrap_or(UNRANKED_SORT_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn uni(name: &str, state: Option<&str>, ranking: Option<i64>) -> University {
        let mut u = University::placeholder(name);
        u.state = state.map(str::to_string);
        u.ranking = ranking;
        u
    }

    fn names(found: &[&University]) -> Vec<String> {
        found.iter().map(|u| u.name.clone()).collect()
    }

    fn fixture() -> Vec<University> {
        vec![
            uni("Stanford", Some("California"), Some(2)),
            uni("Berkeley", Some("California"), None),
            uni("MIT", Some("Massachusetts"), Some(1)),
            uni("Purdue", None, Some(40)),
        ]
    }

    #[test]
    fn state_is_substring_and_requires_a_state() {
        let list = fixture();
        let filter = UniversityFilter {
            state: "calif".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&list)), vec!["Stanford", "Berkeley"]);
        let filter = UniversityFilter {
            state: "a".into(),
            ..Default::default()
        };
        assert!(!names(&filter.apply(&list)).contains(&"Purdue".to_string()));
    }

    #[test]
    fn ranking_bounds_are_inclusive_and_drop_unranked() {
        let list = fixture();
        let filter = UniversityFilter {
            min_ranking: Some(2),
            max_ranking: Some(40),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&list)), vec!["Stanford", "Purdue"]);

        let filter = UniversityFilter {
            max_ranking: Some(100),
            ..Default::default()
        };
        assert_eq!(filter.apply(&list).len(), 3);
    }

    #[test]
    fn name_filter_ignores_case() {
        let list = fixture();
        let filter = UniversityFilter {
            name: "STAN".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&list)), vec!["Stanford"]);
    }

    #[test]
    fn ranking_sort_puts_unranked_last_ascending() {
        let list = fixture();
        let mut view: Vec<&University> = list.iter().collect();
        UniversitySort::new(SortKey::Ranking, SortDirection::Asc).sort(&mut view);
        assert_eq!(names(&view), vec!["MIT", "Stanford", "Purdue", "Berkeley"]);

        UniversitySort::new(SortKey::Ranking, SortDirection::Desc).sort(&mut view);
        assert_eq!(names(&view), vec!["Berkeley", "Purdue", "Stanford", "MIT"]);
    }

    #[test]
    fn name_sort_ignores_case_and_is_stable() {
        let list = vec![uni("b", None, None), uni("A", None, None), uni("B", None, Some(3))];
        let mut view: Vec<&University> = list.iter().collect();
        UniversitySort::default().sort(&mut view);
        assert_eq!(names(&view), vec!["A", "b", "B"]);
    }

    #[test]
    fn toggling_flips_then_resets() {
        let sort = UniversitySort::default();
        let sort = sort.toggled(SortKey::Name);
        assert_eq!(sort.direction, SortDirection::Desc);
        let sort = sort.toggled(SortKey::Ranking);
        assert_eq!(sort, UniversitySort::new(SortKey::Ranking, SortDirection::Asc));
    }
}
