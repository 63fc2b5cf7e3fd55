//! Decoding of recorded backend envelopes through the shared response path.

use pretty_assertions::assert_eq;
use prof_auth::{Session, SessionState};
use prof_client::ClientError;
use prof_client::http::read_envelope;
use prof_core::entities::{ApiKey, DashboardStats, Professor, University, User};
use prof_core::enums::{TriState, UserStatus};

fn mock_response(status: u16, body: &str) -> reqwest::Response {
    reqwest::Response::from(
        http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap(),
    )
}

fn session() -> Session {
    Session::in_memory(SessionState::authenticated("jwt", None, None))
}

#[tokio::test]
async fn professor_list_envelope() {
    let body = r#"{
        "success": true,
        "professors": [
            {"id": 1, "name": "Ada", "universityName": "MIT", "mailed": true,
             "mailingDate": "2025-01-02T10:00:00.000Z", "recruitingPhdStudents": "Yes"},
            {"id": 2, "name": "Grace", "universityName": "", "mailed": null,
             "currentlyRecruiting": "No"}
        ]
    }"#;
    let envelope = read_envelope(mock_response(200, body), &session(), "/professor/all")
        .await
        .unwrap()
        .ensure_success()
        .unwrap();
    let professors: Vec<Professor> = envelope
        .field_or_default("professors", "/professor/all")
        .unwrap();

    assert_eq!(professors.len(), 2);
    assert!(professors[0].mailed);
    assert!(professors[0].mailing_date.is_some());
    assert_eq!(professors[1].university_name, None);
    assert_eq!(professors[1].currently_recruiting, TriState::No);
}

#[tokio::test]
async fn university_list_envelope() {
    let body = r#"{"success": true, "universities": [
        {"id": 3, "name": "Stanford", "ranking": null, "state": "CA", "greRequired": "Yes"}
    ]}"#;
    let envelope = read_envelope(mock_response(200, body), &session(), "/university")
        .await
        .unwrap();
    let universities: Vec<University> = envelope.field_or_default("universities", "/university").unwrap();
    assert_eq!(universities[0].ranking, None);
    assert_eq!(universities[0].gre_required, TriState::Yes);
    assert!(universities[0].is_persisted());
}

#[tokio::test]
async fn users_keys_and_stats_envelopes() {
    let users = read_envelope(
        mock_response(
            200,
            r#"{"success":true,"users":[{"id":5,"email":"a@b.edu","status":"PENDING"}]}"#,
        ),
        &session(),
        "/admin/users",
    )
    .await
    .unwrap();
    let users: Vec<User> = users.field_or_default("users", "/admin/users").unwrap();
    assert_eq!(users[0].status, Some(UserStatus::Pending));

    let keys = read_envelope(
        mock_response(
            200,
            r#"{"success":true,"keys":[{"id":1,"keyName":"primary","apiKey":"AIza****","isActive":true}]}"#,
        ),
        &session(),
        "/gemini-keys",
    )
    .await
    .unwrap();
    let keys: Vec<ApiKey> = keys.field_or_default("keys", "/gemini-keys").unwrap();
    assert!(keys[0].is_active);

    let stats = read_envelope(
        mock_response(
            200,
            r#"{"success":true,"stats":{"totalProfessors":3,"stateStats":{"FL":2}}}"#,
        ),
        &session(),
        "/dashboard/stats",
    )
    .await
    .unwrap();
    let stats: DashboardStats = stats.field_or_default("stats", "/dashboard/stats").unwrap();
    assert_eq!(stats.total_professors, 3);
    assert_eq!(stats.state_stats.get("FL"), Some(&2));
}

#[tokio::test]
async fn malformed_record_is_decode_error() {
    let envelope = read_envelope(
        mock_response(200, r#"{"success":true,"professors":[{"name":"no id"}]}"#),
        &session(),
        "/professor/all",
    )
    .await
    .unwrap();
    let err = envelope
        .field_or_default::<Vec<Professor>>("professors", "/professor/all")
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
    assert!(err.to_string().contains("/professor/all"));
}

#[tokio::test]
async fn unauthorized_anywhere_logs_out_every_clone() {
    let session = session();
    let observer = session.clone();
    let err = read_envelope(mock_response(401, "{}"), &session, "/university")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert!(!observer.is_authenticated());
}
