use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::submissions::{EditSubmissionEntity, InsertSubmissionEntity, SubmissionEntity},
    value_objects::submissions::ListSubmissionsFilter,
};

#[automock]
#[async_trait]
pub trait SubmissionRepository {
    async fn create(&self, insert_submission_entity: InsertSubmissionEntity) -> Result<SubmissionEntity>;
    async fn find_by_id(&self, submission_id: Uuid) -> Result<Option<SubmissionEntity>>;
    async fn list(&self, filter: &ListSubmissionsFilter) -> Result<Vec<SubmissionEntity>>;
    async fn update(
        &self,
        submission_id: Uuid,
        edit_submission_entity: EditSubmissionEntity,
    ) -> Result<Option<SubmissionEntity>>;
    async fn delete(&self, submission_id: Uuid) -> Result<bool>;
    /// `(kind, status, count)` rows.
    async fn count_by_kind_and_status(&self) -> Result<Vec<(String, String, i64)>>;
}
