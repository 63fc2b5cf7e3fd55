//! Decoding tests against payload shapes the backend actually emits.

use chrono::{Datelike, Timelike};
use pretty_assertions::assert_eq;
use prof_core::entities::{DashboardStats, Professor, University, VisitorPassword};
use prof_core::enums::{HiringSemester, TriState, UniversityStatus};
use prof_core::ids::RecordId;
use serde_json::json;

#[test]
fn professor_with_form_blanks_normalizes() {
    let professor: Professor = serde_json::from_value(json!({
        "id": 17,
        "name": "Grace Hopper",
        "email": "",
        "universityName": "Yale",
        "researchInterests": "Compilers, Programming Languages ,",
        "recruitingPhdStudents": "Yes",
        "currentlyRecruiting": "",
        "hiringSemester": "",
        "mailed": true,
        "mailingDate": "2025-01-10T08:30",
        "followUpMailSent": null,
        "followUpMailDate": null,
        "priority": false,
        "deadline": "2025-12-15",
        "greRequired": null,
        "comments": null
    }))
    .expect("professor should decode");

    assert_eq!(professor.id, RecordId::Int(17));
    assert_eq!(professor.email, None);
    assert_eq!(professor.recruiting_phd_students, TriState::Yes);
    assert_eq!(professor.currently_recruiting, TriState::Unspecified);
    assert_eq!(professor.hiring_semester, None);
    assert!(professor.is_recruiting());
    assert!(!professor.follow_up_mail_sent);
    assert!(!professor.gre_required);

    let mailed_at = professor.mailing_date.expect("mailing date");
    assert_eq!((mailed_at.day(), mailed_at.hour(), mailed_at.minute()), (10, 8, 30));
    assert_eq!(professor.deadline.expect("deadline").month(), 12);

    let tokens: Vec<&str> = professor.interest_tokens().collect();
    assert_eq!(tokens, vec!["Compilers", "Programming Languages"]);
}

#[test]
fn professor_missing_optional_keys_decodes() {
    let professor: Professor =
        serde_json::from_value(json!({ "id": "abc", "hiringSemester": "Both" })).unwrap();
    assert_eq!(professor.name, None);
    assert_eq!(professor.hiring_semester, Some(HiringSemester::Both));
    assert!(!professor.mailed);
}

#[test]
fn professor_survives_serialize_and_decode() {
    let mut professor = Professor::new(5, "Alan Turing");
    professor.university_name = Some("Manchester".into());
    professor.hiring_semester = Some(HiringSemester::Fall);
    professor.set_recruiting_phd_students(TriState::Yes);
    professor.set_mailed(true, Some(chrono::Utc::now()));

    let json = serde_json::to_string(&professor).unwrap();
    let decoded: Professor = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, professor);
}

#[test]
fn coupling_helpers_clear_dates() {
    let mut professor = Professor::new(1, "X");
    professor.set_mailed(true, Some(chrono::Utc::now()));
    professor.set_follow_up_sent(true, Some(chrono::Utc::now()));
    professor.set_mailed(false, Some(chrono::Utc::now()));
    professor.set_follow_up_sent(false, None);
    assert_eq!(professor.mailing_date, None);
    assert_eq!(professor.follow_up_mail_date, None);

    professor.currently_recruiting = TriState::No;
    professor.set_recruiting_phd_students(TriState::Yes);
    assert_eq!(professor.currently_recruiting, TriState::Yes);
}

#[test]
fn university_reads_string_ranking_and_comment_alias() {
    let university: University = serde_json::from_value(json!({
        "id": 1,
        "name": "MIT",
        "ranking": "4",
        "state": "MA",
        "greRequired": false,
        "notes": null,
        "comments": "Strong systems group",
        "status": "active"
    }))
    .unwrap();
    assert_eq!(university.ranking, Some(4));
    assert_eq!(university.gre_required, TriState::No);
    assert_eq!(university.notes(), Some("Strong systems group"));
    assert_eq!(university.status, UniversityStatus::Active);
    assert!(university.is_persisted());
    assert!(!university.from_professors);
}

#[test]
fn university_input_carries_notes_alias() {
    let mut university = University::placeholder("Stanford");
    university.comments = Some("from comments".into());
    let input = university.to_input();
    assert_eq!(input.notes.as_deref(), Some("from comments"));
    assert!(input.validated().is_ok());
}

#[test]
fn visitor_password_expiry() {
    let password: VisitorPassword = serde_json::from_value(json!({
        "id": 9,
        "password": "VIS-123",
        "expiresAt": "2020-01-01T00:00:00Z",
        "used": false,
        "processCount": 2
    }))
    .unwrap();
    assert!(password.is_expired(chrono::Utc::now()));
    assert_eq!(password.process_count, Some(2));
}

#[test]
fn dashboard_stats_default_missing_maps() {
    let stats: DashboardStats = serde_json::from_value(json!({
        "totalProfessors": 120,
        "monthlyMails": { "2025-01": 4 }
    }))
    .unwrap();
    assert_eq!(stats.total_professors, 120);
    assert_eq!(stats.monthly_mails.get("2025-01"), Some(&4));
    assert!(stats.state_stats.is_empty());
}
