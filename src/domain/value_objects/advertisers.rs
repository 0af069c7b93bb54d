use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::advertisers::AdvertiserEntity,
    value_objects::{enums::advertiser_statuses::AdvertiserStatus, plans::PlanSnapshot},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserSignupModel {
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserLoginModel {
    pub email: String,
    pub access_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListAdvertisersFilter {
    pub status: Option<AdvertiserStatus>,
    pub plan: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePlanModel {
    pub plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnableWhatsappModel {
    pub months: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserDto {
    pub id: Uuid,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub status: String,
    pub whatsapp: Option<String>,
    pub whatsapp_enabled: bool,
    pub whatsapp_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<AdvertiserEntity> for AdvertiserDto {
    fn from(value: AdvertiserEntity) -> Self {
        Self {
            id: value.id,
            business_name: value.business_name,
            email: value.email,
            phone: value.phone,
            plan: value.plan,
            status: value.status,
            whatsapp: value.whatsapp,
            whatsapp_enabled: value.whatsapp_enabled,
            whatsapp_expiry: value.whatsapp_expiry,
            created_at: value.created_at,
        }
    }
}

/// Returned by advertiser login.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserSessionDto {
    #[serde(flatten)]
    pub advertiser: AdvertiserDto,
    pub expiry_date: DateTime<Utc>,
    pub posting_limit: i64,
    pub current_posts: i64,
    pub remaining_posts: i64,
}

/// Admin view of an account, including lapsed or suspended ones.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserDetailDto {
    #[serde(flatten)]
    pub advertiser: AdvertiserDto,
    pub plan_status: PlanSnapshot,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedAdvertiserDto {
    #[serde(flatten)]
    pub advertiser: AdvertiserDto,
    /// Shown once; only its hash is stored.
    pub access_code: String,
}
