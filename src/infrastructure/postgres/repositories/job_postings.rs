use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    RunQueryDsl, define_sql_function, delete,
    dsl::count_star,
    insert_into,
    prelude::*,
    sql_types::{Nullable, Text},
    update,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::job_postings::{EditJobPostingEntity, InsertJobPostingEntity, JobPostingEntity},
        repositories::job_postings::JobPostingRepository,
        value_objects::{
            enums::{poster_types::PosterType, posting_statuses::PostingStatus},
            postings::{ContactMatch, ListPostingsFilter},
            submissions::StatusCount,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{page_offset, page_size, search_pattern},
        schema::job_postings,
    },
};

define_sql_function!(fn lower(value: Nullable<Text>) -> Nullable<Text>);

pub struct JobPostingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl JobPostingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl JobPostingRepository for JobPostingPostgres {
    async fn create(
        &self,
        insert_job_posting_entity: InsertJobPostingEntity,
    ) -> Result<JobPostingEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(job_postings::table)
            .values(&insert_job_posting_entity)
            .returning(JobPostingEntity::as_returning())
            .get_result::<JobPostingEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, job_posting_id: Uuid) -> Result<Option<JobPostingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = job_postings::table
            .filter(job_postings::id.eq(job_posting_id))
            .select(JobPostingEntity::as_select())
            .first::<JobPostingEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, filter: &ListPostingsFilter) -> Result<Vec<JobPostingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = job_postings::table
            .select(JobPostingEntity::as_select())
            .into_boxed();

        if let Some(status) = filter.status {
            query = query.filter(job_postings::status.eq(status.to_string()));
        }

        if let Some(poster_type) = filter.poster_type {
            query = query.filter(job_postings::poster_type.eq(poster_type.to_string()));
        }

        if let Some(location) = search_pattern(filter.location.as_deref()) {
            query = query.filter(job_postings::location.ilike(location));
        }

        if let Some(job_type) = &filter.category {
            query = query.filter(job_postings::job_type.eq(job_type.clone()));
        }

        if let Some(pattern) = search_pattern(filter.search.as_deref()) {
            query = query.filter(
                job_postings::title
                    .ilike(pattern.clone())
                    .or(job_postings::description.ilike(pattern.clone()))
                    .or(job_postings::company.ilike(pattern)),
            );
        }

        let results = query
            .order(job_postings::created_at.desc())
            .limit(page_size(filter.limit))
            .offset(page_offset(filter.offset))
            .load::<JobPostingEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_contact(&self, contact: &ContactMatch) -> Result<Vec<JobPostingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = job_postings::table
            .select(JobPostingEntity::as_select())
            .filter(job_postings::poster_type.eq(PosterType::Agent.to_string()))
            .into_boxed();

        query = match &contact.email {
            Some(email) => query.filter(
                job_postings::contact_phone
                    .eq(contact.phone.clone())
                    .or(lower(job_postings::contact_email).eq(email.clone())),
            ),
            None => query.filter(job_postings::contact_phone.eq(contact.phone.clone())),
        };

        let results = query
            .order(job_postings::created_at.desc())
            .load::<JobPostingEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        job_posting_id: Uuid,
        edit_job_posting_entity: EditJobPostingEntity,
    ) -> Result<Option<JobPostingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(job_postings::table)
            .filter(job_postings::id.eq(job_posting_id))
            .set(&edit_job_posting_entity)
            .returning(JobPostingEntity::as_returning())
            .get_result::<JobPostingEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, job_posting_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(job_postings::table)
            .filter(job_postings::id.eq(job_posting_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn count_active_by_contact(&self, contact: &ContactMatch) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = job_postings::table
            .filter(job_postings::status.eq(PostingStatus::Active.to_string()))
            .filter(job_postings::poster_type.eq(PosterType::Agent.to_string()))
            .into_boxed();

        query = match &contact.email {
            Some(email) => query.filter(
                job_postings::contact_phone
                    .eq(contact.phone.clone())
                    .or(lower(job_postings::contact_email).eq(email.clone())),
            ),
            None => query.filter(job_postings::contact_phone.eq(contact.phone.clone())),
        };

        let count = query.select(count_star()).first::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_by_status(&self) -> Result<Vec<StatusCount>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = job_postings::table
            .group_by(job_postings::status)
            .select((job_postings::status, count_star()))
            .order(job_postings::status.asc())
            .load::<(String, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }
}
