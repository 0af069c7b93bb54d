use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    announcements::{AnnouncementEntity, EditAnnouncementEntity},
    shop_products::{EditShopProductEntity, ShopProductEntity},
    trainings::{EditTrainingEntity, TrainingEntity},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementModel {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementModel {
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
}

impl UpdateAnnouncementModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditAnnouncementEntity {
        EditAnnouncementEntity {
            title: self.title.clone(),
            body: self.body.clone(),
            published: self.published,
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDto {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<AnnouncementEntity> for AnnouncementDto {
    fn from(value: AnnouncementEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            body: value.body,
            published: value.published,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModel {
    pub title: String,
    pub description: String,
    pub starts_on: Option<NaiveDate>,
    pub location: Option<String>,
    pub fee: Option<i64>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub location: Option<String>,
    pub fee: Option<i64>,
    pub published: Option<bool>,
}

impl UpdateTrainingModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditTrainingEntity {
        EditTrainingEntity {
            title: self.title.clone(),
            description: self.description.clone(),
            starts_on: self.starts_on,
            location: self.location.clone(),
            fee: self.fee,
            published: self.published,
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starts_on: Option<NaiveDate>,
    pub location: Option<String>,
    pub fee: Option<i64>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TrainingEntity> for TrainingDto {
    fn from(value: TrainingEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            starts_on: value.starts_on,
            location: value.location,
            fee: value.fee,
            published: value.published,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopProductModel {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShopProductModel {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
}

impl UpdateShopProductModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditShopProductEntity {
        EditShopProductEntity {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            in_stock: self.in_stock,
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl From<ShopProductEntity> for ShopProductDto {
    fn from(value: ShopProductEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            image_url: value.image_url,
            in_stock: value.in_stock,
        }
    }
}
