use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, dsl::count_star, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::advertisers::{AdvertiserEntity, EditAdvertiserEntity, InsertAdvertiserEntity},
        repositories::advertisers::AdvertiserRepository,
        value_objects::{advertisers::ListAdvertisersFilter, submissions::StatusCount},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{page_offset, page_size, search_pattern},
        schema::advertisers,
    },
};

pub struct AdvertiserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdvertiserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdvertiserRepository for AdvertiserPostgres {
    async fn create(
        &self,
        insert_advertiser_entity: InsertAdvertiserEntity,
    ) -> Result<AdvertiserEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(advertisers::table)
            .values(&insert_advertiser_entity)
            .returning(AdvertiserEntity::as_returning())
            .get_result::<AdvertiserEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, advertiser_id: Uuid) -> Result<Option<AdvertiserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = advertisers::table
            .filter(advertisers::id.eq(advertiser_id))
            .select(AdvertiserEntity::as_select())
            .first::<AdvertiserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdvertiserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = advertisers::table
            .filter(advertisers::email.eq(email))
            .select(AdvertiserEntity::as_select())
            .first::<AdvertiserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<AdvertiserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = advertisers::table
            .filter(advertisers::phone.eq(phone))
            .order(advertisers::created_at.desc())
            .select(AdvertiserEntity::as_select())
            .first::<AdvertiserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, filter: &ListAdvertisersFilter) -> Result<Vec<AdvertiserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = advertisers::table
            .select(AdvertiserEntity::as_select())
            .into_boxed();

        if let Some(status) = filter.status {
            query = query.filter(advertisers::status.eq(status.to_string()));
        }

        if let Some(plan) = &filter.plan {
            query = query.filter(advertisers::plan.eq(plan.clone()));
        }

        if let Some(pattern) = search_pattern(filter.search.as_deref()) {
            query = query.filter(
                advertisers::business_name
                    .ilike(pattern.clone())
                    .or(advertisers::email.ilike(pattern.clone()))
                    .or(advertisers::phone.ilike(pattern)),
            );
        }

        let results = query
            .order(advertisers::created_at.desc())
            .limit(page_size(filter.limit))
            .offset(page_offset(filter.offset))
            .load::<AdvertiserEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        advertiser_id: Uuid,
        edit_advertiser_entity: EditAdvertiserEntity,
    ) -> Result<Option<AdvertiserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(advertisers::table)
            .filter(advertisers::id.eq(advertiser_id))
            .set(&edit_advertiser_entity)
            .returning(AdvertiserEntity::as_returning())
            .get_result::<AdvertiserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, advertiser_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(advertisers::table)
            .filter(advertisers::id.eq(advertiser_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn count_by_status(&self) -> Result<Vec<StatusCount>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = advertisers::table
            .group_by(advertisers::status)
            .select((advertisers::status, count_star()))
            .order(advertisers::status.asc())
            .load::<(String, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }
}
