//! A file-backed session survives reopening and a forced logout wipes it.

use pretty_assertions::assert_eq;
use prof_auth::{FileStore, Session, SessionState, open_session};
use prof_config::SessionConfig;
use prof_core::enums::Role;

#[test]
fn session_persists_across_reopen() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let config = SessionConfig {
        path: Some(tmp.path().join("session.json")),
        ..Default::default()
    };

    let session = open_session(&config).expect("open");
    assert!(!session.is_authenticated());
    session
        .set(SessionState::authenticated(
            "jwt-1",
            Some(Role::User),
            Some("42".into()),
        ))
        .expect("set");

    let reopened = open_session(&config).expect("reopen");
    assert_eq!(reopened.token().as_deref(), Some("jwt-1"));
    assert_eq!(reopened.role(), Role::User);
    assert_eq!(reopened.get().user_id.as_deref(), Some("42"));
}

#[test]
fn clear_removes_session_file() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");
    let session = Session::open(Box::new(FileStore::new(path.clone()))).expect("open");

    session
        .set(SessionState::authenticated("jwt-2", None, None))
        .expect("set");
    assert!(path.exists());

    session.clear().expect("clear");
    assert!(!path.exists());
    assert_eq!(session.role(), Role::Admin);
}

#[test]
fn stored_file_uses_local_storage_keys() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");
    std::fs::write(&path, r#"{"authToken":"hand-written","userRole":"visitor"}"#).expect("write");

    let session = Session::open(Box::new(FileStore::new(path))).expect("open");
    assert_eq!(session.token().as_deref(), Some("hand-written"));
    assert_eq!(session.role(), Role::Visitor);
}
