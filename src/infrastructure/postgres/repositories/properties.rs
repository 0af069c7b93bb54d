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
        entities::properties::{EditPropertyEntity, InsertPropertyEntity, PropertyEntity},
        repositories::properties::PropertyRepository,
        value_objects::{
            enums::{poster_types::PosterType, posting_statuses::PostingStatus},
            postings::{ContactMatch, ListPostingsFilter},
            submissions::StatusCount,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::{page_offset, page_size, search_pattern},
        schema::properties,
    },
};

define_sql_function!(fn lower(value: Nullable<Text>) -> Nullable<Text>);

pub struct PropertyPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PropertyPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PropertyRepository for PropertyPostgres {
    async fn create(
        &self,
        insert_property_entity: InsertPropertyEntity,
    ) -> Result<PropertyEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(properties::table)
            .values(&insert_property_entity)
            .returning(PropertyEntity::as_returning())
            .get_result::<PropertyEntity>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, property_id: Uuid) -> Result<Option<PropertyEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = properties::table
            .filter(properties::id.eq(property_id))
            .select(PropertyEntity::as_select())
            .first::<PropertyEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self, filter: &ListPostingsFilter) -> Result<Vec<PropertyEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = properties::table
            .select(PropertyEntity::as_select())
            .into_boxed();

        if let Some(status) = filter.status {
            query = query.filter(properties::status.eq(status.to_string()));
        }

        if let Some(poster_type) = filter.poster_type {
            query = query.filter(properties::poster_type.eq(poster_type.to_string()));
        }

        if let Some(location) = search_pattern(filter.location.as_deref()) {
            query = query.filter(properties::location.ilike(location));
        }

        if let Some(property_type) = &filter.category {
            query = query.filter(properties::property_type.eq(property_type.clone()));
        }

        if let Some(listing_type) = filter.listing_type {
            query = query.filter(properties::listing_type.eq(listing_type.to_string()));
        }

        if let Some(pattern) = search_pattern(filter.search.as_deref()) {
            query = query.filter(
                properties::title
                    .ilike(pattern.clone())
                    .or(properties::description.ilike(pattern.clone()))
                    .or(properties::location.ilike(pattern)),
            );
        }

        let results = query
            .order(properties::created_at.desc())
            .limit(page_size(filter.limit))
            .offset(page_offset(filter.offset))
            .load::<PropertyEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_by_contact(&self, contact: &ContactMatch) -> Result<Vec<PropertyEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = properties::table
            .select(PropertyEntity::as_select())
            .filter(properties::poster_type.eq(PosterType::Agent.to_string()))
            .into_boxed();

        query = match &contact.email {
            Some(email) => query.filter(
                properties::contact_phone
                    .eq(contact.phone.clone())
                    .or(lower(properties::contact_email).eq(email.clone())),
            ),
            None => query.filter(properties::contact_phone.eq(contact.phone.clone())),
        };

        let results = query
            .order(properties::created_at.desc())
            .load::<PropertyEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        property_id: Uuid,
        edit_property_entity: EditPropertyEntity,
    ) -> Result<Option<PropertyEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(properties::table)
            .filter(properties::id.eq(property_id))
            .set(&edit_property_entity)
            .returning(PropertyEntity::as_returning())
            .get_result::<PropertyEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, property_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(properties::table)
            .filter(properties::id.eq(property_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }

    async fn count_active_by_contact(&self, contact: &ContactMatch) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = properties::table
            .filter(properties::status.eq(PostingStatus::Active.to_string()))
            .filter(properties::poster_type.eq(PosterType::Agent.to_string()))
            .into_boxed();

        query = match &contact.email {
            Some(email) => query.filter(
                properties::contact_phone
                    .eq(contact.phone.clone())
                    .or(lower(properties::contact_email).eq(email.clone())),
            ),
            None => query.filter(properties::contact_phone.eq(contact.phone.clone())),
        };

        let count = query.select(count_star()).first::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn count_by_status(&self) -> Result<Vec<StatusCount>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = properties::table
            .group_by(properties::status)
            .select((properties::status, count_star()))
            .order(properties::status.asc())
            .load::<(String, i64)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }
}
