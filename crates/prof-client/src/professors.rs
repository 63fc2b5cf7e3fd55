//! `/professor` endpoints.

use prof_core::entities::{NewProfessor, Professor};
use prof_core::ids::RecordId;
use prof_core::updates::ProfessorUpdate;
use serde::Serialize;
use serde_json::Value;

use crate::http::Envelope;
use crate::{ApiClient, ClientError};

/// Result of submitting a faculty listing URL for extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// Extraction ran; the backend returned what it stored.
    Processed {
        total: u64,
        professors: Vec<Professor>,
        #[serde(skip_serializing_if = "Option::is_none")]
        statistics: Option<Value>,
    },
    /// The URL was processed before and `force` was not set.
    AlreadyProcessed,
    /// The backend declined, with its message verbatim.
    Rejected { message: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessRequest<'a> {
    faculty_listing_url: &'a str,
    force_process: bool,
}

impl ApiClient {
    /// `GET /professor/all`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn list_professors(&self) -> Result<Vec<Professor>, ClientError> {
        const PATH: &str = "/professor/all";
        self.get(PATH).await?.field_or_default("professors", PATH)
    }

    /// `GET /professor/priority`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, backend, or decode failure.
    pub async fn priority_professors(&self) -> Result<Vec<Professor>, ClientError> {
        const PATH: &str = "/professor/priority";
        self.get(PATH).await?.field_or_default("professors", PATH)
    }

    /// `POST /professor/create`. The payload is validated first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Core`] for a missing name or university, else
    /// any transport or backend failure.
    pub async fn create_professor(&self, professor: NewProfessor) -> Result<(), ClientError> {
        let body = professor.validated()?;
        self.post("/professor/create", &body).await?;
        Ok(())
    }

    /// `PUT /professor/{id}` with only the fields set on `update`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn update_professor(
        &self,
        id: &RecordId,
        update: &ProfessorUpdate,
    ) -> Result<(), ClientError> {
        self.put(&format!("/professor/{id}"), update).await?;
        Ok(())
    }

    /// `DELETE /professor/{id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn delete_professor(&self, id: &RecordId) -> Result<(), ClientError> {
        self.delete(&format!("/professor/{id}")).await?;
        Ok(())
    }

    /// `POST /professor/process-and-export`
    ///
    /// A declined request is a [`ProcessOutcome`], not an error; only
    /// transport, `401`, and malformed responses fail.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when no usable response was received.
    pub async fn process_faculty_url(
        &self,
        faculty_url: &str,
        force: bool,
    ) -> Result<ProcessOutcome, ClientError> {
        const PATH: &str = "/professor/process-and-export";
        let body = ProcessRequest {
            faculty_listing_url: faculty_url,
            force_process: force,
        };
        let envelope = self
            .exchange(reqwest::Method::POST, PATH, Some(&body))
            .await?;
        process_outcome(&envelope, PATH)
    }

    /// `GET /professor/export/excel[?university=]`, returning the workbook bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn export_excel(&self, university: Option<&str>) -> Result<Vec<u8>, ClientError> {
        let path = match university {
            Some(name) => format!(
                "/professor/export/excel?university={}",
                urlencoding::encode(name)
            ),
            None => "/professor/export/excel".to_string(),
        };
        self.get_bytes(&path).await
    }
}

fn process_outcome(envelope: &Envelope, endpoint: &str) -> Result<ProcessOutcome, ClientError> {
    if envelope.is_success() {
        let professors: Vec<Professor> = envelope.field_or_default("professors", endpoint)?;
        let total = envelope
            .body
            .get("totalProfessors")
            .and_then(Value::as_u64)
            .unwrap_or(professors.len() as u64);
        return Ok(ProcessOutcome::Processed {
            total,
            professors,
            statistics: envelope.body.get("statistics").cloned().filter(|v| !v.is_null()),
        });
    }
    if envelope.flag("alreadyProcessed") {
        return Ok(ProcessOutcome::AlreadyProcessed);
    }
    Ok(ProcessOutcome::Rejected {
        message: envelope
            .error_message()
            .unwrap_or("Failed to process faculty URL")
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn envelope(status: u16, body: Value) -> Envelope {
        Envelope { status, body }
    }

    #[test]
    fn processed_reads_total_and_records() {
        let env = envelope(
            200,
            json!({
                "success": true,
                "totalProfessors": 2,
                "professors": [
                    {"id": 1, "name": "A", "universityName": "USF"},
                    {"id": 2, "name": "B", "universityName": "USF"}
                ],
                "statistics": {"withEmail": 1}
            }),
        );
        match process_outcome(&env, "/p").unwrap() {
            ProcessOutcome::Processed {
                total,
                professors,
                statistics,
            } => {
                assert_eq!(total, 2);
                assert_eq!(professors.len(), 2);
                assert_eq!(statistics, Some(json!({"withEmail": 1})));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn processed_without_total_counts_records() {
        let env = envelope(200, json!({"success": true, "professors": [{"id": 1}]}));
        assert!(matches!(
            process_outcome(&env, "/p").unwrap(),
            ProcessOutcome::Processed { total: 1, .. }
        ));
    }

    #[test]
    fn already_processed_is_not_an_error() {
        let env = envelope(200, json!({"success": false, "alreadyProcessed": true}));
        assert_eq!(
            process_outcome(&env, "/p").unwrap(),
            ProcessOutcome::AlreadyProcessed
        );
        let conflict = envelope(409, json!({"success": false, "alreadyProcessed": true}));
        assert_eq!(
            process_outcome(&conflict, "/p").unwrap(),
            ProcessOutcome::AlreadyProcessed
        );
    }

    #[test]
    fn rejection_keeps_message() {
        let env = envelope(500, json!({"success": false, "error": "No Gemini key available"}));
        assert_eq!(
            process_outcome(&env, "/p").unwrap(),
            ProcessOutcome::Rejected {
                message: "No Gemini key available".into()
            }
        );
    }

    #[test]
    fn process_request_body_shape() {
        let body = ProcessRequest {
            faculty_listing_url: "https://www.usf.edu/faculty",
            force_process: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"facultyListingUrl": "https://www.usf.edu/faculty", "forceProcess": true})
        );
    }
}
