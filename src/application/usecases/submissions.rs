use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    application::usecases::uploads::upload_all,
    domain::{
        entities::submissions::InsertSubmissionEntity,
        repositories::{media::MediaUploader, submissions::SubmissionRepository},
        value_objects::{
            enums::{submission_kinds::SubmissionKind, submission_statuses::SubmissionStatus},
            forms::{FormFields, UploadFile, optional_field},
            submissions::{ListSubmissionsFilter, SubmissionDto, UpdateSubmissionModel},
        },
    },
};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Unknown form: {0}")]
    UnknownKind(String),
    #[error("{0}")]
    Validation(String),
    #[error("Submission not found")]
    NotFound,
    #[error("Upload failed")]
    Upload(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubmissionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::UnknownKind(_) | SubmissionError::NotFound => StatusCode::NOT_FOUND,
            SubmissionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmissionError::Upload(_) => StatusCode::BAD_GATEWAY,
            SubmissionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubmissionError>;

pub struct SubmissionUseCase<S, M>
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    submission_repo: Arc<S>,
    media_uploader: Arc<M>,
}

impl<S, M> SubmissionUseCase<S, M>
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    pub fn new(submission_repo: Arc<S>, media_uploader: Arc<M>) -> Self {
        Self {
            submission_repo,
            media_uploader,
        }
    }

    pub async fn submit(
        &self,
        kind: &str,
        fields: FormFields,
        files: Vec<UploadFile>,
        now: DateTime<Utc>,
    ) -> UseCaseResult<SubmissionDto> {
        let kind = kind
            .parse::<SubmissionKind>()
            .map_err(|_| SubmissionError::UnknownKind(kind.to_string()))?;

        let missing: Vec<&str> = kind
            .required_fields()
            .iter()
            .copied()
            .filter(|field| optional_field(&fields, field).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SubmissionError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let attachments = upload_all(self.media_uploader.as_ref(), files)
            .await
            .map_err(|err| {
                error!(%kind, upload_error = ?err, "submissions: attachment upload failed");
                SubmissionError::Upload(err)
            })?;

        let created = self
            .submission_repo
            .create(InsertSubmissionEntity {
                kind: kind.to_string(),
                payload: payload_from_fields(&fields),
                attachments,
                status: SubmissionStatus::New.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(%kind, db_error = ?err, "submissions: failed to store");
                SubmissionError::Internal(err)
            })?;

        info!(submission_id = %created.id, %kind, "submissions: received");
        Ok(created.into())
    }

    pub async fn list(&self, filter: ListSubmissionsFilter) -> UseCaseResult<Vec<SubmissionDto>> {
        let submissions = self.submission_repo.list(&filter).await?;
        Ok(submissions.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, submission_id: Uuid) -> UseCaseResult<SubmissionDto> {
        self.submission_repo
            .find_by_id(submission_id)
            .await?
            .map(Into::into)
            .ok_or(SubmissionError::NotFound)
    }

    pub async fn update(
        &self,
        submission_id: Uuid,
        update_model: UpdateSubmissionModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<SubmissionDto> {
        let updated = self
            .submission_repo
            .update(submission_id, update_model.to_entity(now))
            .await?
            .ok_or(SubmissionError::NotFound)?;

        info!(%submission_id, status = %updated.status, "submissions: updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, submission_id: Uuid) -> UseCaseResult<()> {
        if !self.submission_repo.delete(submission_id).await? {
            return Err(SubmissionError::NotFound);
        }
        info!(%submission_id, "submissions: deleted");
        Ok(())
    }
}

/// Non-blank text fields as a JSON object.
fn payload_from_fields(fields: &FormFields) -> Value {
    let payload: Map<String, Value> = fields
        .keys()
        .filter_map(|key| optional_field(fields, key).map(|value| (key.clone(), Value::String(value))))
        .collect();
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::submissions::SubmissionEntity,
        repositories::{media::MockMediaUploader, submissions::MockSubmissionRepository},
    };
    use chrono::TimeZone;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn stored(entity: InsertSubmissionEntity) -> SubmissionEntity {
        SubmissionEntity {
            id: Uuid::new_v4(),
            kind: entity.kind,
            payload: entity.payload,
            attachments: entity.attachments,
            status: entity.status,
            admin_notes: None,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    #[tokio::test]
    async fn job_application_stores_payload_and_cv_url() {
        let mut submission_repo = MockSubmissionRepository::new();
        submission_repo
            .expect_create()
            .withf(|entity| {
                entity.kind == "job_application"
                    && entity.status == "new"
                    && entity.payload
                        == json!({
                            "email": "ada@example.com",
                            "fullName": "Ada Obi",
                            "phone": "08011112222"
                        })
                    && entity.attachments == vec!["https://media.example.com/cv.pdf".to_string()]
            })
            .returning(|entity| Ok(stored(entity)));

        let mut media = MockMediaUploader::new();
        media
            .expect_upload()
            .returning(|file| Ok(format!("https://media.example.com/{}", file.file_name)));

        let usecase = SubmissionUseCase::new(Arc::new(submission_repo), Arc::new(media));
        let dto = usecase
            .submit(
                "job-application",
                fields(&[
                    ("fullName", "Ada Obi"),
                    ("email", "ada@example.com"),
                    ("phone", "08011112222"),
                    ("coverLetter", "  "),
                ]),
                vec![UploadFile {
                    field_name: "cv".to_string(),
                    file_name: "cv.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    bytes: b"%PDF-1.7".to_vec(),
                }],
                now(),
            )
            .await
            .unwrap();

        assert_eq!(dto.attachments.len(), 1);
    }

    #[tokio::test]
    async fn missing_fields_are_listed_together() {
        let mut submission_repo = MockSubmissionRepository::new();
        submission_repo.expect_create().never();
        let usecase =
            SubmissionUseCase::new(Arc::new(submission_repo), Arc::new(MockMediaUploader::new()));

        let err = usecase
            .submit("logistics_request", fields(&[("fullName", "Tunde")]), vec![], now())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Missing required fields: phone, pickupAddress, deliveryAddress"
        );
    }

    #[tokio::test]
    async fn unknown_form_is_not_found() {
        let usecase = SubmissionUseCase::new(
            Arc::new(MockSubmissionRepository::new()),
            Arc::new(MockMediaUploader::new()),
        );

        let err = usecase
            .submit("newsletter", fields(&[("email", "a@b.c")]), vec![], now())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::UnknownKind(_)));
    }

    #[tokio::test]
    async fn status_update_on_missing_row_is_not_found() {
        let mut submission_repo = MockSubmissionRepository::new();
        submission_repo
            .expect_update()
            .withf(|_, edit| edit.status.as_deref() == Some("contacted"))
            .returning(|_, _| Ok(None));
        let usecase =
            SubmissionUseCase::new(Arc::new(submission_repo), Arc::new(MockMediaUploader::new()));

        let err = usecase
            .update(
                Uuid::new_v4(),
                UpdateSubmissionModel {
                    status: Some(SubmissionStatus::Contacted),
                    admin_notes: None,
                },
                now(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::NotFound));
    }
}
