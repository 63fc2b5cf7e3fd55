//! Excel export file naming and saving.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{ApiClient, ClientError};

/// `professors_all_export_<date>.xlsx`, or the university name with every
/// non-alphanumeric character replaced by `_`.
#[must_use]
pub fn export_file_name(university: Option<&str>, date: NaiveDate) -> String {
    let stamp = date.format("%Y-%m-%d");
    match university {
        None => format!("professors_all_export_{stamp}.xlsx"),
        Some(name) => {
            let safe: String = name
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            format!("professors_{safe}_export_{stamp}.xlsx")
        }
    }
}

impl ApiClient {
    /// Download the export and write it into `dir`, returning the file path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on download failure, or [`ClientError::Io`]
    /// when the file cannot be written.
    pub async fn download_export(
        &self,
        university: Option<&str>,
        dir: &Path,
    ) -> Result<PathBuf, ClientError> {
        let bytes = self.export_excel(university).await?;
        let path = dir.join(export_file_name(
            university,
            chrono::Utc::now().date_naive(),
        ));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| ClientError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "export saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn all_universities_name() {
        assert_eq!(
            export_file_name(None, date()),
            "professors_all_export_2025-03-09.xlsx"
        );
    }

    #[test]
    fn university_name_is_sanitized() {
        assert_eq!(
            export_file_name(Some("Univ. of South Florida"), date()),
            "professors_Univ__of_South_Florida_export_2025-03-09.xlsx"
        );
    }
}
