//! `/auth` endpoints: login, token verification, and visitor passwords.

use prof_auth::{SessionState, permissions};
use prof_core::entities::{Permissions, VisitorPassword};
use prof_core::enums::Role;
use prof_core::ids::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiClient, ClientError};

/// Days a generated visitor password stays valid unless overridden.
pub const DEFAULT_VISITOR_PASSWORD_DAYS: u32 = 7;

#[derive(Serialize)]
struct LoginRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    expiration_days: u32,
}

/// A freshly generated visitor password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPassword {
    pub password: String,
    pub expiration_days: u32,
}

/// Result of `GET /auth/verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid(Role),
    /// No token was stored; nothing was sent.
    NoToken,
    /// The backend rejected the token; it has been cleared.
    Rejected,
}

/// Role strings from the backend; unknown values are ignored.
fn parse_role(value: Option<&Value>) -> Option<Role> {
    value.and_then(Value::as_str).and_then(|s| s.parse().ok())
}

/// `userId` may be numeric or a string.
fn parse_user_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl ApiClient {
    /// `POST /auth/login`; stores the returned token, role, and user id.
    ///
    /// Visitor logins pass `email = None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for bad credentials (the backend's message,
    /// or "Invalid credentials"), or any transport or session store failure.
    pub async fn login(
        &self,
        email: Option<&str>,
        password: &str,
    ) -> Result<SessionState, ClientError> {
        const PATH: &str = "/auth/login";
        let body = LoginRequest {
            email: email.map(str::trim),
            password,
        };
        let envelope = self.post(PATH, &body).await?;
        let token: String = envelope.field("token", PATH).map_err(|_| ClientError::Api {
            status: envelope.status,
            message: envelope
                .error_message()
                .unwrap_or("Invalid credentials")
                .to_string(),
        })?;

        let state = SessionState::authenticated(
            token,
            parse_role(envelope.body.get("role")),
            parse_user_id(envelope.body.get("userId")),
        );
        self.session().set(state.clone())?;
        tracing::debug!(role = %state.effective_role(), "logged in");
        Ok(state)
    }

    /// `GET /auth/verify`. Updates the stored role when the backend sends one;
    /// any failure clears the token and role.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] if the session store cannot be written.
    pub async fn verify(&self) -> Result<Verification, ClientError> {
        if !self.session().is_authenticated() {
            return Ok(Verification::NoToken);
        }
        match self.get("/auth/verify").await {
            Ok(envelope) => {
                if let Some(role) = parse_role(envelope.body.get("role")) {
                    self.session().update(|s| s.role = Some(role))?;
                }
                Ok(Verification::Valid(self.session().role()))
            }
            Err(error) => {
                tracing::debug!(%error, "token verification failed");
                self.session().update(|s| {
                    s.token = None;
                    s.role = None;
                })?;
                Ok(Verification::Rejected)
            }
        }
    }

    /// Drop the local session. The backend keeps no server-side state to revoke.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] if the session store cannot be cleared.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session().clear()?;
        Ok(())
    }

    /// Resolve what the current role may do, reading the profile for users.
    pub async fn permissions(&self) -> Permissions {
        let role = self.session().role();
        if !permissions::needs_profile(role) {
            return permissions::for_role(role, None);
        }
        match self.profile().await {
            Ok(user) => permissions::for_role(role, Some(&user)),
            Err(error) => {
                tracing::warn!(%error, "could not load profile; no permissions granted");
                permissions::for_role(role, None)
            }
        }
    }

    /// `GET /auth/visitor-passwords`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn list_visitor_passwords(&self) -> Result<Vec<VisitorPassword>, ClientError> {
        const PATH: &str = "/auth/visitor-passwords";
        self.get(PATH).await?.field_or_default("passwords", PATH)
    }

    /// `POST /auth/generate-visitor-password`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn generate_visitor_password(
        &self,
        expiration_days: Option<u32>,
    ) -> Result<GeneratedPassword, ClientError> {
        const PATH: &str = "/auth/generate-visitor-password";
        let requested = expiration_days.unwrap_or(DEFAULT_VISITOR_PASSWORD_DAYS);
        let envelope = self
            .post(
                PATH,
                &GenerateRequest {
                    expiration_days: requested,
                },
            )
            .await?;
        let password = envelope.field("password", PATH)?;
        let expiration_days = envelope
            .body
            .get("expirationDays")
            .and_then(Value::as_u64)
            .and_then(|d| u32::try_from(d).ok())
            .unwrap_or(requested);
        Ok(GeneratedPassword {
            password,
            expiration_days,
        })
    }

    /// `DELETE /auth/visitor-passwords/{id}`; refused locally for visitors.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotPermitted`] for the visitor role, else any
    /// transport or backend failure.
    pub async fn delete_visitor_password(&self, id: &RecordId) -> Result<(), ClientError> {
        let role = self.session().role();
        if !permissions::can_delete_visitor_passwords(role) {
            return Err(ClientError::NotPermitted {
                role: role.to_string(),
                action: "delete visitor passwords".into(),
            });
        }
        self.delete(&format!("/auth/visitor-passwords/{id}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn visitor_login_omits_email() {
        let body = LoginRequest {
            email: None,
            password: "VIS-1",
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"password": "VIS-1"}));
    }

    #[test]
    fn parses_role_and_user_id_shapes() {
        assert_eq!(parse_role(Some(&json!("visitor"))), Some(Role::Visitor));
        assert_eq!(parse_role(Some(&json!("superuser"))), None);
        assert_eq!(parse_role(None), None);
        assert_eq!(parse_user_id(Some(&json!(42))), Some("42".into()));
        assert_eq!(parse_user_id(Some(&json!("u-7"))), Some("u-7".into()));
        assert_eq!(parse_user_id(Some(&json!(""))), None);
    }

    #[test]
    fn generate_request_shape() {
        let body = GenerateRequest { expiration_days: 7 };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"expirationDays": 7})
        );
    }
}
