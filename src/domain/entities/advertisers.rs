use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::advertisers;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, PartialEq)]
#[diesel(table_name = advertisers)]
pub struct AdvertiserEntity {
    pub id: Uuid,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub status: String,
    pub access_code_hash: Option<String>,
    pub whatsapp: Option<String>,
    pub whatsapp_enabled: bool,
    pub whatsapp_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, PartialEq)]
#[diesel(table_name = advertisers)]
pub struct InsertAdvertiserEntity {
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    pub status: String,
    pub whatsapp: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, AsChangeset, PartialEq)]
#[diesel(table_name = advertisers)]
pub struct EditAdvertiserEntity {
    pub business_name: Option<String>,
    pub phone: Option<String>,
    pub plan: Option<String>,
    pub status: Option<String>,
    pub access_code_hash: Option<String>,
    pub whatsapp: Option<String>,
    pub whatsapp_enabled: Option<bool>,
    pub whatsapp_expiry: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
