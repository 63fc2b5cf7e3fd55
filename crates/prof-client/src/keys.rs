//! `/gemini-keys` endpoints.

use prof_core::entities::ApiKey;
use prof_core::ids::RecordId;
use prof_core::updates::{ApiKeyUpdate, NewApiKey};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /gemini-keys`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>, ClientError> {
        const PATH: &str = "/gemini-keys";
        self.get(PATH).await?.field_or_default("keys", PATH)
    }

    /// `POST /gemini-keys`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Core`] when the name or key is blank, else any
    /// transport or backend failure.
    pub async fn create_api_key(&self, key: NewApiKey) -> Result<(), ClientError> {
        let body = key.validated()?;
        self.post("/gemini-keys", &body).await?;
        Ok(())
    }

    /// `PUT /gemini-keys/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn update_api_key(
        &self,
        id: &RecordId,
        update: &ApiKeyUpdate,
    ) -> Result<(), ClientError> {
        self.put(&format!("/gemini-keys/{id}"), update).await?;
        Ok(())
    }

    /// Flip `isActive` on `key`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_api_key`].
    pub async fn toggle_api_key(&self, key: &ApiKey) -> Result<(), ClientError> {
        let update = ApiKeyUpdate::new(None, Some(!key.is_active));
        self.update_api_key(&key.id, &update).await
    }

    /// `DELETE /gemini-keys/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn delete_api_key(&self, id: &RecordId) -> Result<(), ClientError> {
        self.delete(&format!("/gemini-keys/{id}")).await?;
        Ok(())
    }
}
