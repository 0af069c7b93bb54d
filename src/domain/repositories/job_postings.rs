use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::job_postings::{EditJobPostingEntity, InsertJobPostingEntity, JobPostingEntity},
    value_objects::{
        postings::{ContactMatch, ListPostingsFilter},
        submissions::StatusCount,
    },
};

#[automock]
#[async_trait]
pub trait JobPostingRepository {
    async fn create(&self, insert_job_posting_entity: InsertJobPostingEntity) -> Result<JobPostingEntity>;
    async fn find_by_id(&self, job_posting_id: Uuid) -> Result<Option<JobPostingEntity>>;
    async fn list(&self, filter: &ListPostingsFilter) -> Result<Vec<JobPostingEntity>>;
    async fn list_by_contact(&self, contact: &ContactMatch) -> Result<Vec<JobPostingEntity>>;
    async fn update(
        &self,
        job_posting_id: Uuid,
        edit_job_posting_entity: EditJobPostingEntity,
    ) -> Result<Option<JobPostingEntity>>;
    async fn delete(&self, job_posting_id: Uuid) -> Result<bool>;
    /// Active `Agent` postings whose contact details match.
    async fn count_active_by_contact(&self, contact: &ContactMatch) -> Result<i64>;
    async fn count_by_status(&self) -> Result<Vec<StatusCount>>;
}
