//! Professor update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::enums::{HiringSemester, TriState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_scholar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiting_phd_students: Option<TriState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_recruiting: Option<TriState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiring_semester: Option<Option<HiringSemester>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_mail_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_mail_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gre_required: Option<bool>,
}

impl ProfessorUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Builds a [`ProfessorUpdate`] and applies the coupling rules on `build`:
///
/// - `recruiting_phd_students = Yes` also sends `currently_recruiting = Yes`
/// - `mailed = false` sends `mailing_date = null`; `mailed = true` sends the
///   date only when one was given
/// - the same pairing for `follow_up_mail_sent` / `follow_up_mail_date`
#[derive(Debug, Default)]
pub struct ProfessorUpdateBuilder(ProfessorUpdate);

impl ProfessorUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn university_name(mut self, university: impl Into<String>) -> Self {
        self.0.university_name = Some(university.into());
        self
    }

    #[must_use]
    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.0.designation = Some(designation.into());
        self
    }

    #[must_use]
    pub fn portfolio_website(mut self, url: impl Into<String>) -> Self {
        self.0.portfolio_website = Some(url.into());
        self
    }

    #[must_use]
    pub fn lab_website(mut self, url: impl Into<String>) -> Self {
        self.0.lab_website = Some(url.into());
        self
    }

    #[must_use]
    pub fn research_interests(mut self, interests: impl Into<String>) -> Self {
        self.0.research_interests = Some(interests.into());
        self
    }

    #[must_use]
    pub fn google_scholar_url(mut self, url: impl Into<String>) -> Self {
        self.0.google_scholar_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn recruiting_phd_students(mut self, value: TriState) -> Self {
        self.0.recruiting_phd_students = Some(value);
        self
    }

    #[must_use]
    pub fn currently_recruiting(mut self, value: TriState) -> Self {
        self.0.currently_recruiting = Some(value);
        self
    }

    #[must_use]
    pub fn hiring_semester(mut self, semester: Option<HiringSemester>) -> Self {
        self.0.hiring_semester = Some(semester);
        self
    }

    #[must_use]
    pub fn mailed(mut self, mailed: bool, at: Option<DateTime<Utc>>) -> Self {
        self.0.mailed = Some(mailed);
        self.0.mailing_date = match (mailed, at) {
            (false, _) => Some(None),
            (true, Some(at)) => Some(Some(at)),
            (true, None) => None,
        };
        self
    }

    #[must_use]
    pub fn follow_up_mail_sent(mut self, sent: bool, at: Option<DateTime<Utc>>) -> Self {
        self.0.follow_up_mail_sent = Some(sent);
        self.0.follow_up_mail_date = match (sent, at) {
            (false, _) => Some(None),
            (true, Some(at)) => Some(Some(at)),
            (true, None) => None,
        };
        self
    }

    #[must_use]
    pub fn comments(mut self, comments: impl Into<String>) -> Self {
        self.0.comments = Some(comments.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: bool) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.0.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn gre_required(mut self, required: bool) -> Self {
        self.0.gre_required = Some(required);
        self
    }

    #[must_use]
    pub fn build(mut self) -> ProfessorUpdate {
        if self.0.recruiting_phd_students == Some(TriState::Yes) {
            self.0.currently_recruiting = Some(TriState::Yes);
        }
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn recruiting_phd_yes_forces_currently_recruiting() {
        let update = ProfessorUpdateBuilder::new()
            .currently_recruiting(TriState::No)
            .recruiting_phd_students(TriState::Yes)
            .build();
        assert_eq!(update.currently_recruiting, Some(TriState::Yes));
    }

    #[test]
    fn recruiting_phd_no_leaves_currently_recruiting_alone() {
        let update = ProfessorUpdateBuilder::new()
            .recruiting_phd_students(TriState::No)
            .build();
        assert_eq!(update.currently_recruiting, None);
    }

    #[test]
    fn unmailed_sends_null_date() {
        let update = ProfessorUpdateBuilder::new().mailed(false, None).build();
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({ "mailed": false, "mailingDate": null }));
    }

    #[test]
    fn mailed_without_date_omits_date() {
        let update = ProfessorUpdateBuilder::new().mailed(true, None).build();
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({ "mailed": true }));
    }

    #[test]
    fn follow_up_with_date_sends_both() {
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
        let update = ProfessorUpdateBuilder::new()
            .follow_up_mail_sent(true, Some(at))
            .build();
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["followUpMailSent"], json!(true));
        assert_eq!(body["followUpMailDate"], json!("2025-02-01T09:00:00Z"));
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(ProfessorUpdateBuilder::new().build().is_empty());
        assert!(!ProfessorUpdateBuilder::new().priority(true).build().is_empty());
    }
}
