use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::properties;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, PartialEq)]
#[diesel(table_name = properties)]
pub struct PropertyEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: i64,
    pub property_type: String,
    pub listing_type: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub image_urls: Vec<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub poster_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, PartialEq)]
#[diesel(table_name = properties)]
pub struct InsertPropertyEntity {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: i64,
    pub property_type: String,
    pub listing_type: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub image_urls: Vec<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub poster_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, AsChangeset, PartialEq)]
#[diesel(table_name = properties)]
pub struct EditPropertyEntity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<i64>,
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
