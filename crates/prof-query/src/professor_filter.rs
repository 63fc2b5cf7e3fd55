//! Professor search predicates.

use std::fmt;
use std::str::FromStr;

use prof_core::entities::Professor;
use prof_core::enums::HiringSemester;
use prof_core::errors::CoreError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Choice enums
// ---------------------------------------------------------------------------

/// `yes` keeps records recruiting in either sense; `no` keeps the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitingFilter {
    #[default]
    All,
    Yes,
    No,
}

impl FromStr for RecruitingFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(CoreError::Validation(format!(
                "recruiting filter must be yes, no, or all; got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailedFilter {
    #[default]
    All,
    Mailed,
    NotMailed,
}

impl FromStr for MailedFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all" => Ok(Self::All),
            "mailed" => Ok(Self::Mailed),
            "not_mailed" => Ok(Self::NotMailed),
            other => Err(CoreError::Validation(format!(
                "mailed filter must be mailed, not_mailed, or all; got '{other}'"
            ))),
        }
    }
}

/// `Only(Both)` keeps only `Both`; `Only(Fall)` also keeps `Both`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemesterFilter {
    #[default]
    All,
    Only(HiringSemester),
}

impl SemesterFilter {
    #[must_use]
    pub fn matches(self, semester: Option<HiringSemester>) -> bool {
        match (self, semester) {
            (Self::All, _) => true,
            (Self::Only(_), None) => false,
            (Self::Only(HiringSemester::Both), Some(actual)) => actual == HiringSemester::Both,
            (Self::Only(wanted), Some(actual)) => {
                actual == wanted || actual == HiringSemester::Both
            }
        }
    }
}

impl FromStr for SemesterFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for SemesterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(semester) => write!(f, "{semester}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ProfessorFilter
// ---------------------------------------------------------------------------

/// Filter values for the professor search, applied as a logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessorFilter {
    /// Case-insensitive substring of `name`; blank means no filtering.
    pub name: String,
    /// Exact `universityName`.
    pub university: Option<String>,
    /// Any selected interest is a substring of any record token.
    pub interests: Vec<String>,
    pub recruiting: RecruitingFilter,
    pub mailed: MailedFilter,
    pub semester: SemesterFilter,
}

impl ProfessorFilter {
    #[must_use]
    pub fn matches(&self, professor: &Professor) -> bool {
        self.matches_name(professor)
            && self.matches_university(professor)
            && self.matches_interests(professor)
            && self.matches_recruiting(professor)
            && self.matches_mailed(professor)
            && self.semester.matches(professor.hiring_semester)
    }

    /// Records that pass every predicate, in master-list order.
    #[must_use]
    pub fn apply<'a>(&self, professors: &'a [Professor]) -> Vec<&'a Professor> {
        professors.iter().filter(|p| self.matches(p)).collect()
    }

    /// Add `interest` to the selection, or remove it if already selected.
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name.trim().is_empty()
            && self.university.as_deref().is_none_or(str::is_empty)
            && self.interests.is_empty()
            && self.recruiting == RecruitingFilter::All
            && self.mailed == MailedFilter::All
            && self.semester == SemesterFilter::All
    }

    fn matches_name(&self, professor: &Professor) -> bool {
        let needle = self.name.trim();
        if needle.is_empty() {
            return true;
        }
        professor
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle.to_lowercase()))
    }

    fn matches_university(&self, professor: &Professor) -> bool {
        match self.university.as_deref() {
            None | Some("") => true,
            Some(wanted) => professor.university_name.as_deref() == Some(wanted),
        }
    }

    fn matches_interests(&self, professor: &Professor) -> bool {
        if self.interests.is_empty() {
            return true;
        }
        let tokens: Vec<String> = professor.interest_tokens().map(str::to_lowercase).collect();
        self.interests.iter().any(|selected| {
            let selected = selected.to_lowercase();
            tokens.iter().any(|token| token.contains(&selected))
        })
    }

    fn matches_recruiting(&self, professor: &Professor) -> bool {
        match self.recruiting {
            RecruitingFilter::All => true,
            RecruitingFilter::Yes => professor.is_recruiting(),
            RecruitingFilter::No => !professor.is_recruiting(),
        }
    }

    fn matches_mailed(&self, professor: &Professor) -> bool {
        match self.mailed {
            MailedFilter::All => true,
            MailedFilter::Mailed => professor.mailed,
            MailedFilter::NotMailed => !professor.mailed,
        }
    }
}
