//! Shared response handling for every endpoint.
//!
//! Centralizes the `401` forced logout and the `{ success, ...payload }` /
//! `{ success: false, error }` envelope so endpoint modules stay focused on
//! paths and payload field names.

use prof_auth::Session;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Fallback when a failed response carries no `error` field.
const GENERIC_FAILURE: &str = "request failed";

/// A decoded JSON response body with its status code.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: u16,
    pub body: Value,
}

impl Envelope {
    /// 2xx and not explicitly `success: false`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
            && self.body.get("success").and_then(Value::as_bool) != Some(false)
    }

    /// The backend's `error` field, or `message` when `error` is absent.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        ["error", "message"]
            .into_iter()
            .find_map(|key| self.body.get(key).and_then(Value::as_str))
            .filter(|msg| !msg.trim().is_empty())
    }

    /// Convert a reported failure into [`ClientError::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with the backend's message verbatim.
    pub fn ensure_success(self) -> Result<Self, ClientError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self.error_message().map_or_else(
            || format!("{GENERIC_FAILURE} (HTTP {})", self.status),
            str::to_string,
        );
        Err(ClientError::Api {
            status: self.status,
            message,
        })
    }

    /// Decode `key`, treating a missing or `null` value as `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the value has the wrong shape.
    pub fn field_or_default<T>(&self, key: &str, endpoint: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        match self.body.get(key) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => decode(value.clone(), key, endpoint),
        }
    }

    /// Decode `key`, which must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if the key is missing or malformed.
    pub fn field<T: DeserializeOwned>(&self, key: &str, endpoint: &str) -> Result<T, ClientError> {
        match self.body.get(key) {
            None | Some(Value::Null) => Err(ClientError::Decode {
                endpoint: endpoint.to_string(),
                reason: format!("missing '{key}'"),
            }),
            Some(value) => decode(value.clone(), key, endpoint),
        }
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.body.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

fn decode<T: DeserializeOwned>(value: Value, key: &str, endpoint: &str) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode {
        endpoint: endpoint.to_string(),
        reason: format!("'{key}': {e}"),
    })
}

/// Handle `401` and read the JSON body.
///
/// A `401` clears `session` before returning [`ClientError::Unauthorized`].
/// A non-JSON body on a failed response becomes [`ClientError::Api`] carrying
/// the raw text; on a 2xx it is a [`ClientError::Decode`].
///
/// # Errors
///
/// See above; body read failures are [`ClientError::Http`].
pub async fn read_envelope(
    resp: reqwest::Response,
    session: &Session,
    endpoint: &str,
) -> Result<Envelope, ClientError> {
    let status = resp.status().as_u16();
    if status == 401 {
        force_logout(session);
        return Err(ClientError::Unauthorized);
    }

    let text = resp.text().await?;
    let body = if text.trim().is_empty() {
        Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(e) if (200..300).contains(&status) => {
                return Err(ClientError::Decode {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                return Err(ClientError::Api {
                    status,
                    message: text.trim().to_string(),
                });
            }
        }
    };
    Ok(Envelope { status, body })
}

/// Handle `401` and non-2xx for binary downloads, returning the bytes.
///
/// # Errors
///
/// Returns [`ClientError::Unauthorized`] or [`ClientError::Api`] with the
/// JSON `error` field when one is present.
pub async fn read_bytes(
    resp: reqwest::Response,
    session: &Session,
    endpoint: &str,
) -> Result<Vec<u8>, ClientError> {
    if resp.status().is_success() {
        return Ok(resp.bytes().await?.to_vec());
    }
    let envelope = read_envelope(resp, session, endpoint).await;
    match envelope {
        Ok(envelope) => Err(ClientError::Api {
            status: envelope.status,
            message: envelope
                .error_message()
                .unwrap_or("Unknown error")
                .to_string(),
        }),
        Err(e) => Err(e),
    }
}

fn force_logout(session: &Session) {
    tracing::warn!("backend returned 401; clearing session");
    if let Err(error) = session.clear() {
        tracing::warn!(%error, "failed to clear persisted session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prof_auth::SessionState;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn logged_in() -> Session {
        Session::in_memory(SessionState::authenticated("tok", None, None))
    }

    #[tokio::test]
    async fn unauthorized_clears_session() {
        let session = logged_in();
        let err = read_envelope(mock_response(401, r#"{"error":"expired"}"#), &session, "/x")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Unauthorized));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn success_false_surfaces_message_verbatim() {
        let session = logged_in();
        let envelope = read_envelope(
            mock_response(200, r#"{"success":false,"error":"University already exists"}"#),
            &session,
            "/university",
        )
        .await
        .unwrap();
        let err = envelope.ensure_success().unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "University already exists");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn non_2xx_with_error_field() {
        let session = logged_in();
        let envelope = read_envelope(
            mock_response(500, r#"{"success":false,"error":"boom"}"#),
            &session,
            "/x",
        )
        .await
        .unwrap();
        let err = envelope.ensure_success().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn non_2xx_without_json_keeps_text() {
        let session = logged_in();
        let err = read_envelope(mock_response(502, "Bad Gateway"), &session, "/x")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, ref message } if message == "Bad Gateway"));
    }

    #[tokio::test]
    async fn non_2xx_without_error_field_gets_generic_message() {
        let session = logged_in();
        let envelope = read_envelope(mock_response(404, "{}"), &session, "/x")
            .await
            .unwrap();
        let err = envelope.ensure_success().unwrap_err();
        assert_eq!(err.to_string(), "request failed (HTTP 404)");
    }

    #[tokio::test]
    async fn missing_list_field_defaults_to_empty() {
        let session = logged_in();
        let envelope = read_envelope(mock_response(200, r#"{"success":true}"#), &session, "/x")
            .await
            .unwrap()
            .ensure_success()
            .unwrap();
        let items: Vec<serde_json::Value> = envelope.field_or_default("professors", "/x").unwrap();
        assert!(items.is_empty());
        assert!(envelope.field::<String>("token", "/x").is_err());
    }

    #[tokio::test]
    async fn garbage_on_success_is_decode_error() {
        let session = logged_in();
        let err = read_envelope(mock_response(200, "<html>"), &session, "/x")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn bytes_error_reads_json_message() {
        let session = logged_in();
        let err = read_bytes(
            mock_response(400, r#"{"error":"No professors found"}"#),
            &session,
            "/professor/export/excel",
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "No professors found");
    }

    #[tokio::test]
    async fn bytes_success_returns_body() {
        let session = logged_in();
        let bytes = read_bytes(mock_response(200, "PK\u{3}\u{4}"), &session, "/x")
            .await
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
