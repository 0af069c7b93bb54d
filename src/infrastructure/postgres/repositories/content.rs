use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            announcements::{AnnouncementEntity, EditAnnouncementEntity, InsertAnnouncementEntity},
            shop_products::{EditShopProductEntity, InsertShopProductEntity, ShopProductEntity},
            trainings::{EditTrainingEntity, InsertTrainingEntity, TrainingEntity},
        },
        repositories::content::{
            AnnouncementRepository, ShopProductRepository, TrainingRepository,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{announcements, shop_products, trainings},
    },
};

pub struct AnnouncementPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AnnouncementPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AnnouncementRepository for AnnouncementPostgres {
    async fn create(
        &self,
        insert_announcement_entity: InsertAnnouncementEntity,
    ) -> Result<AnnouncementEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(announcements::table)
            .values(&insert_announcement_entity)
            .returning(AnnouncementEntity::as_returning())
            .get_result::<AnnouncementEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self, published_only: bool) -> Result<Vec<AnnouncementEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = announcements::table
            .select(AnnouncementEntity::as_select())
            .into_boxed();

        if published_only {
            query = query.filter(announcements::published.eq(true));
        }

        let results = query
            .order(announcements::created_at.desc())
            .load::<AnnouncementEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        announcement_id: Uuid,
        edit_announcement_entity: EditAnnouncementEntity,
    ) -> Result<Option<AnnouncementEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(announcements::table)
            .filter(announcements::id.eq(announcement_id))
            .set(&edit_announcement_entity)
            .returning(AnnouncementEntity::as_returning())
            .get_result::<AnnouncementEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, announcement_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(announcements::table)
            .filter(announcements::id.eq(announcement_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}

pub struct TrainingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TrainingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TrainingRepository for TrainingPostgres {
    async fn create(&self, insert_training_entity: InsertTrainingEntity) -> Result<TrainingEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(trainings::table)
            .values(&insert_training_entity)
            .returning(TrainingEntity::as_returning())
            .get_result::<TrainingEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self, published_only: bool) -> Result<Vec<TrainingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = trainings::table
            .select(TrainingEntity::as_select())
            .into_boxed();

        if published_only {
            query = query.filter(trainings::published.eq(true));
        }

        // Upcoming sessions first; undated ones last.
        let results = query
            .order((trainings::starts_on.asc().nulls_last(), trainings::created_at.desc()))
            .load::<TrainingEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        training_id: Uuid,
        edit_training_entity: EditTrainingEntity,
    ) -> Result<Option<TrainingEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(trainings::table)
            .filter(trainings::id.eq(training_id))
            .set(&edit_training_entity)
            .returning(TrainingEntity::as_returning())
            .get_result::<TrainingEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, training_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(trainings::table)
            .filter(trainings::id.eq(training_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}

pub struct ShopProductPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ShopProductPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ShopProductRepository for ShopProductPostgres {
    async fn create(
        &self,
        insert_shop_product_entity: InsertShopProductEntity,
    ) -> Result<ShopProductEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(shop_products::table)
            .values(&insert_shop_product_entity)
            .returning(ShopProductEntity::as_returning())
            .get_result::<ShopProductEntity>(&mut conn)?;

        Ok(result)
    }

    async fn list(&self, in_stock_only: bool) -> Result<Vec<ShopProductEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let mut query = shop_products::table
            .select(ShopProductEntity::as_select())
            .into_boxed();

        if in_stock_only {
            query = query.filter(shop_products::in_stock.eq(true));
        }

        let results = query
            .order(shop_products::name.asc())
            .load::<ShopProductEntity>(&mut conn)?;

        Ok(results)
    }

    async fn update(
        &self,
        shop_product_id: Uuid,
        edit_shop_product_entity: EditShopProductEntity,
    ) -> Result<Option<ShopProductEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(shop_products::table)
            .filter(shop_products::id.eq(shop_product_id))
            .set(&edit_shop_product_entity)
            .returning(ShopProductEntity::as_returning())
            .get_result::<ShopProductEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, shop_product_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(shop_products::table)
            .filter(shop_products::id.eq(shop_product_id))
            .execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
