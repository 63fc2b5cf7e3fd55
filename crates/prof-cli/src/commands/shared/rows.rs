//! Flat row shapes for table output.

use chrono::{DateTime, Utc};
use prof_core::entities::{ApiKey, Professor, University, User, VisitorPassword};
use prof_query::tasks::days_until;
use serde::Serialize;

fn date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(String::new, |at| at.format("%Y-%m-%d").to_string())
}

#[derive(Serialize)]
pub struct ProfessorRow {
    pub id: String,
    pub name: String,
    pub university: String,
    pub recruiting: &'static str,
    pub semester: String,
    pub mailed: String,
    pub follow_up: &'static str,
    pub priority: bool,
}

impl ProfessorRow {
    pub fn new(professor: &Professor, needs_follow_up: bool) -> Self {
        let follow_up = if professor.follow_up_mail_sent {
            "sent"
        } else if needs_follow_up {
            "due"
        } else {
            ""
        };
        Self {
            id: professor.id.to_string(),
            name: professor.display_name().to_string(),
            university: professor.university_name.clone().unwrap_or_default(),
            recruiting: if professor.is_recruiting() { "yes" } else { "no" },
            semester: professor
                .hiring_semester
                .map(|s| s.to_string())
                .unwrap_or_default(),
            mailed: match (professor.mailed, professor.mailing_date) {
                (false, _) => String::new(),
                (true, None) => "yes".to_string(),
                (true, at) => date(at),
            },
            follow_up,
            priority: professor.priority,
        }
    }
}

#[derive(Serialize)]
pub struct TaskRow {
    pub id: String,
    pub name: String,
    pub university: String,
    pub deadline: String,
    pub days_left: Option<i64>,
    pub status: &'static str,
}

impl TaskRow {
    pub fn new(professor: &Professor, now: DateTime<Utc>) -> Self {
        let days_left = professor.deadline.map(|deadline| days_until(deadline, now));
        let status = match days_left {
            Some(days) if days < 0 => "overdue",
            Some(days) if days <= 7 => "due",
            _ => "",
        };
        Self {
            id: professor.id.to_string(),
            name: professor.display_name().to_string(),
            university: professor.university_name.clone().unwrap_or_default(),
            deadline: date(professor.deadline),
            days_left,
            status,
        }
    }
}

#[derive(Serialize)]
pub struct UniversityRow {
    pub id: String,
    pub name: String,
    pub state: String,
    pub ranking: Option<i64>,
    pub gre: String,
    pub deadline: String,
    pub faculty_url: String,
    pub status: String,
}

impl From<&University> for UniversityRow {
    fn from(university: &University) -> Self {
        Self {
            id: university
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            name: university.name.clone(),
            state: university.state.clone().unwrap_or_default(),
            ranking: university.ranking,
            gre: university.gre_required.as_str().to_string(),
            deadline: date(university.deadline),
            faculty_url: university.cs_faculty_website_url.clone().unwrap_or_default(),
            status: if university.from_professors {
                "placeholder".to_string()
            } else {
                university.status.to_string()
            },
        }
    }
}

#[derive(Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub university: String,
    pub status: String,
    pub access_days: Option<i64>,
    pub expires: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            university: user.university.clone().unwrap_or_default(),
            status: user.status.map(|s| s.to_string()).unwrap_or_default(),
            access_days: user.access_days,
            expires: if user.is_access_expired {
                "expired".to_string()
            } else {
                date(user.access_expires_at)
            },
        }
    }
}

#[derive(Serialize)]
pub struct ApiKeyRow {
    pub id: String,
    pub name: String,
    pub key: String,
    pub active: bool,
}

impl From<&ApiKey> for ApiKeyRow {
    fn from(key: &ApiKey) -> Self {
        Self {
            id: key.id.to_string(),
            name: key.key_name.clone(),
            key: key.api_key.clone().unwrap_or_default(),
            active: key.is_active,
        }
    }
}

#[derive(Serialize)]
pub struct VisitorPasswordRow {
    pub id: String,
    pub password: String,
    pub expires: String,
    pub used: bool,
    pub processed: Option<i64>,
    pub state: &'static str,
}

impl VisitorPasswordRow {
    pub fn new(password: &VisitorPassword, now: DateTime<Utc>) -> Self {
        Self {
            id: password.id.to_string(),
            password: password.password.clone(),
            expires: date(password.expires_at),
            used: password.used,
            processed: password.process_count,
            state: if password.is_expired(now) {
                "expired"
            } else {
                "valid"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use prof_core::enums::TriState;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 10, 8, 0, 0).unwrap()
    }

    #[test]
    fn professor_row_marks_follow_up_state() {
        let mut p = Professor::new(3, "Barbara Liskov");
        p.currently_recruiting = TriState::Yes;
        p.set_mailed(true, Some(now() - Duration::days(9)));
        let row = ProfessorRow::new(&p, true);
        assert_eq!(row.recruiting, "yes");
        assert_eq!(row.mailed, "2025-04-01");
        assert_eq!(row.follow_up, "due");

        p.set_follow_up_sent(true, Some(now()));
        assert_eq!(ProfessorRow::new(&p, false).follow_up, "sent");
    }

    #[test]
    fn mailed_without_date_still_shows() {
        let mut p = Professor::new(1, "A");
        p.mailed = true;
        assert_eq!(ProfessorRow::new(&p, false).mailed, "yes");
    }

    #[test]
    fn task_row_flags_overdue() {
        let mut p = Professor::new(1, "A");
        p.deadline = Some(now() - Duration::days(2));
        let row = TaskRow::new(&p, now());
        assert_eq!(row.days_left, Some(-2));
        assert_eq!(row.status, "overdue");
    }

    #[test]
    fn placeholder_university_row() {
        let row = UniversityRow::from(&University::placeholder("Stanford"));
        assert_eq!(row.id, "");
        assert_eq!(row.status, "placeholder");
    }
}
