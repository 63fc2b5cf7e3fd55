//! `/user` and `/admin/users` endpoints.

use prof_core::entities::{ProfileUpdate, Registration, User};
use prof_core::enums::UserStatus;
use prof_core::ids::RecordId;
use serde::Serialize;

use crate::{ApiClient, ClientError};

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct AccessBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_days: Option<i64>,
}

/// Path for the user listing, optionally narrowed to one status.
fn users_path(status: Option<UserStatus>) -> String {
    status.map_or_else(
        || "/admin/users".to_string(),
        |status| format!("/admin/users/status/{status}"),
    )
}

impl ApiClient {
    /// `GET /user/profile`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn profile(&self) -> Result<User, ClientError> {
        const PATH: &str = "/user/profile";
        self.get(PATH).await?.field("user", PATH)
    }

    /// `PUT /user/profile`. A blank password is left out of the body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Core`] when the new password is too short or
    /// unconfirmed, else any transport or backend failure.
    pub async fn update_profile(
        &self,
        update: ProfileUpdate,
        confirm_password: Option<&str>,
    ) -> Result<(), ClientError> {
        let body = update.validated(confirm_password)?;
        self.put("/user/profile", &body).await?;
        Ok(())
    }

    /// `POST /user/register`. Needs no session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Core`] for invalid input, else any transport or
    /// backend failure.
    pub async fn register(
        &self,
        registration: Registration,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        let body = registration.validated(confirm_password)?;
        self.post("/user/register", &body).await?;
        Ok(())
    }

    /// `GET /admin/users` or `GET /admin/users/status/{status}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn list_users(&self, status: Option<UserStatus>) -> Result<Vec<User>, ClientError> {
        let path = users_path(status);
        self.get(&path).await?.field_or_default("users", &path)
    }

    /// `POST /admin/users/{id}/approve`, optionally limiting access to `access_days`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn approve_user(
        &self,
        id: &RecordId,
        access_days: Option<i64>,
    ) -> Result<(), ClientError> {
        let body = AccessBody { access_days };
        self.post(&format!("/admin/users/{id}/approve"), &body)
            .await?;
        Ok(())
    }

    /// `POST /admin/users/{id}/hold`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn hold_user(&self, id: &RecordId) -> Result<(), ClientError> {
        self.post(&format!("/admin/users/{id}/hold"), &AccessBody::default())
            .await?;
        Ok(())
    }

    /// `POST /admin/users/{id}/remove`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn remove_user(&self, id: &RecordId) -> Result<(), ClientError> {
        self.post(&format!("/admin/users/{id}/remove"), &AccessBody::default())
            .await?;
        Ok(())
    }

    /// `PUT /admin/users/{id}/access`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn set_user_access(&self, id: &RecordId, access_days: i64) -> Result<(), ClientError> {
        let body = AccessBody {
            access_days: Some(access_days),
        };
        self.put(&format!("/admin/users/{id}/access"), &body).await?;
        Ok(())
    }

    /// `DELETE /admin/users/{id}?deleteData=`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn delete_user(&self, id: &RecordId, delete_data: bool) -> Result<(), ClientError> {
        self.delete(&format!("/admin/users/{id}?deleteData={delete_data}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn users_path_by_status() {
        assert_eq!(users_path(None), "/admin/users");
        assert_eq!(
            users_path(Some(UserStatus::Pending)),
            "/admin/users/status/PENDING"
        );
    }

    #[test]
    fn approve_body_omits_unlimited_access() {
        assert_eq!(
            serde_json::to_value(AccessBody::default()).unwrap(),
            serde_json::json!({})
        );
        assert_eq!(
            serde_json::to_value(AccessBody {
                access_days: Some(30)
            })
            .unwrap(),
            serde_json::json!({"accessDays": 30})
        );
    }
}
