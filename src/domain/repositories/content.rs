use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::{
    announcements::{AnnouncementEntity, EditAnnouncementEntity, InsertAnnouncementEntity},
    shop_products::{EditShopProductEntity, InsertShopProductEntity, ShopProductEntity},
    trainings::{EditTrainingEntity, InsertTrainingEntity, TrainingEntity},
};

#[automock]
#[async_trait]
pub trait AnnouncementRepository {
    async fn create(&self, insert_announcement_entity: InsertAnnouncementEntity) -> Result<AnnouncementEntity>;
    async fn list(&self, published_only: bool) -> Result<Vec<AnnouncementEntity>>;
    async fn update(
        &self,
        announcement_id: Uuid,
        edit_announcement_entity: EditAnnouncementEntity,
    ) -> Result<Option<AnnouncementEntity>>;
    async fn delete(&self, announcement_id: Uuid) -> Result<bool>;
}

#[automock]
#[async_trait]
pub trait TrainingRepository {
    async fn create(&self, insert_training_entity: InsertTrainingEntity) -> Result<TrainingEntity>;
    async fn list(&self, published_only: bool) -> Result<Vec<TrainingEntity>>;
    async fn update(
        &self,
        training_id: Uuid,
        edit_training_entity: EditTrainingEntity,
    ) -> Result<Option<TrainingEntity>>;
    async fn delete(&self, training_id: Uuid) -> Result<bool>;
}

#[automock]
#[async_trait]
pub trait ShopProductRepository {
    async fn create(&self, insert_shop_product_entity: InsertShopProductEntity) -> Result<ShopProductEntity>;
    async fn list(&self, in_stock_only: bool) -> Result<Vec<ShopProductEntity>>;
    async fn update(
        &self,
        shop_product_id: Uuid,
        edit_shop_product_entity: EditShopProductEntity,
    ) -> Result<Option<ShopProductEntity>>;
    async fn delete(&self, shop_product_id: Uuid) -> Result<bool>;
}
