use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::advertisers::{AdvertiserEntity, EditAdvertiserEntity, InsertAdvertiserEntity},
    value_objects::{advertisers::ListAdvertisersFilter, submissions::StatusCount},
};

#[automock]
#[async_trait]
pub trait AdvertiserRepository {
    async fn create(&self, insert_advertiser_entity: InsertAdvertiserEntity) -> Result<AdvertiserEntity>;
    async fn find_by_id(&self, advertiser_id: Uuid) -> Result<Option<AdvertiserEntity>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AdvertiserEntity>>;
    /// Most recently created account registered with the phone number.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<AdvertiserEntity>>;
    async fn list(&self, filter: &ListAdvertisersFilter) -> Result<Vec<AdvertiserEntity>>;
    async fn update(
        &self,
        advertiser_id: Uuid,
        edit_advertiser_entity: EditAdvertiserEntity,
    ) -> Result<Option<AdvertiserEntity>>;
    async fn delete(&self, advertiser_id: Uuid) -> Result<bool>;
    async fn count_by_status(&self) -> Result<Vec<StatusCount>>;
}
