use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::properties::{EditPropertyEntity, InsertPropertyEntity, PropertyEntity},
    value_objects::{
        postings::{ContactMatch, ListPostingsFilter},
        submissions::StatusCount,
    },
};

#[automock]
#[async_trait]
pub trait PropertyRepository {
    async fn create(&self, insert_property_entity: InsertPropertyEntity) -> Result<PropertyEntity>;
    async fn find_by_id(&self, property_id: Uuid) -> Result<Option<PropertyEntity>>;
    async fn list(&self, filter: &ListPostingsFilter) -> Result<Vec<PropertyEntity>>;
    async fn list_by_contact(&self, contact: &ContactMatch) -> Result<Vec<PropertyEntity>>;
    async fn update(
        &self,
        property_id: Uuid,
        edit_property_entity: EditPropertyEntity,
    ) -> Result<Option<PropertyEntity>>;
    async fn delete(&self, property_id: Uuid) -> Result<bool>;
    /// Active `Agent` listings whose contact details match.
    async fn count_active_by_contact(&self, contact: &ContactMatch) -> Result<i64>;
    async fn count_by_status(&self) -> Result<Vec<StatusCount>>;
}
