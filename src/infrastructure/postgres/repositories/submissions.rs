use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    RunQueryDsl, delete,
    dsl::{count_star, sql},
    insert_into,
    prelude::*,
    sql_types::{Bool, Text},
    update,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::submissions::{EditSubmissionEntity, InsertSubmissionEntity, SubmissionEntity},
        repositories::submissions::SubmissionRepository,
        value_objects::submissions::ListSubmissionsFilter,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{page_offset, page_size, search_pattern},
        schema::submissions,
    },
};

pub struct SubmissionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubmissionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubmissionRepository for SubmissionPostgres {
    async fn create(
        &self,
        insert_submission_entity: InsertSubmissionEntity,
    ) -> Result<SubmissionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(submissions::table)
            .values(&insert_submission_entity)
            .returning(SubmissionEntity::as_returning())
            .get_result::<SubmissionEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, submission_id: Uuid) -> Result<Option<SubmissionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = submissions::table
            .filter(submissions::id.eq(submission_id))
            .select(SubmissionEntity::as_select())
            .first::<SubmissionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, filter: &ListSubmissionsFilter) -> Result<Vec<SubmissionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = submissions::table
            .select(SubmissionEntity::as_select())
            .into_boxed();

        if let Some(kind) = filter.kind {
            query = query.filter(submissions::kind.eq(kind.to_string()));
        }

        if let Some(status) = filter.status {
            query = query.filter(submissions::status.eq(status.to_string()));
        }

        if let Some(from) = filter.from {
            query = query.filter(submissions::created_at.ge(from));
        }

        if let Some(to) = filter.to {
            query = query.filter(submissions::created_at.le(to));
        }

        // Matches against every submitted field at once.
        if let Some(pattern) = search_pattern(filter.search.as_deref()) {
            query = query.filter(sql::<Bool>("payload::text ILIKE ").bind::<Text, _>(pattern));
        }

        let results = query
            .order(submissions::created_at.desc())
            .limit(page_size(filter.limit))
            .offset(page_offset(filter.offset))
            .load::<SubmissionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        submission_id: Uuid,
        edit_submission_entity: EditSubmissionEntity,
    ) -> Result<Option<SubmissionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(submissions::table)
            .filter(submissions::id.eq(submission_id))
            .set(&edit_submission_entity)
            .returning(SubmissionEntity::as_returning())
            .get_result::<SubmissionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, submission_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(submissions::table)
            .filter(submissions::id.eq(submission_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn count_by_kind_and_status(&self) -> Result<Vec<(String, String, i64)>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = submissions::table
            .group_by((submissions::kind, submissions::status))
            .select((submissions::kind, submissions::status, count_star()))
            .order((submissions::kind.asc(), submissions::status.asc()))
            .load::<(String, String, i64)>(&mut conn)?;

        Ok(rows)
    }
}
