use prof_core::enums::Role;
use serde::{Deserialize, Serialize};

/// The persisted client-side session: bearer token, role, and user id.
///
/// Field names match the keys the web console kept in local storage so a
/// session file can be inspected or hand-edited with the same vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "userRole", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn authenticated(token: impl Into<String>, role: Option<Role>, user_id: Option<String>) -> Self {
        Self {
            token: Some(token.into()),
            role,
            user_id,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Stored role, or `Admin` when none was recorded.
    ///
    /// Tokens issued before roles existed carry no role; the backend still
    /// authorizes every call, so this only affects what the console offers.
    #[must_use]
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(Role::Admin)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.role.is_none() && self.user_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uses_storage_key_names() {
        let state = SessionState::authenticated("tok", Some(Role::User), Some("12".into()));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"authToken": "tok", "userRole": "user", "userId": "12"})
        );
    }

    #[test]
    fn missing_role_is_admin() {
        let state: SessionState = serde_json::from_str(r#"{"authToken":"tok"}"#).unwrap();
        assert_eq!(state.effective_role(), Role::Admin);
        assert!(state.is_authenticated());
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let state = SessionState::authenticated("", None, None);
        assert!(!state.is_authenticated());
        assert!(SessionState::default().is_empty());
    }
}
