//! `/university` endpoints.

use prof_core::entities::{University, UniversityInput};
use prof_core::ids::RecordId;

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /university`: persisted universities only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn list_universities(&self) -> Result<Vec<University>, ClientError> {
        const PATH: &str = "/university";
        self.get(PATH).await?.field_or_default("universities", PATH)
    }

    /// `POST /university`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Core`] for a blank name, else any transport or
    /// backend failure.
    pub async fn create_university(&self, input: UniversityInput) -> Result<(), ClientError> {
        let body = input.validated()?;
        self.post("/university", &body).await?;
        Ok(())
    }

    /// `PUT /university/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation, transport, or backend failure.
    pub async fn update_university(
        &self,
        id: &RecordId,
        input: UniversityInput,
    ) -> Result<(), ClientError> {
        let body = input.validated()?;
        self.put(&format!("/university/{id}"), &body).await?;
        Ok(())
    }

    /// Save a roster entry: placeholders are created, persisted ones updated.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_university`] / [`Self::update_university`].
    pub async fn save_university(&self, university: &University) -> Result<(), ClientError> {
        match &university.id {
            Some(id) => self.update_university(id, university.to_input()).await,
            None => self.create_university(university.to_input()).await,
        }
    }

    /// `DELETE /university/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn delete_university(&self, id: &RecordId) -> Result<(), ClientError> {
        self.delete(&format!("/university/{id}")).await?;
        Ok(())
    }
}
