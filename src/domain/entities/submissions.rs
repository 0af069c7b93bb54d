use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::submissions;

/// One form submission. `payload` holds the submitted fields as a JSON object.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable, PartialEq)]
#[diesel(table_name = submissions)]
pub struct SubmissionEntity {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub attachments: Vec<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, PartialEq)]
#[diesel(table_name = submissions)]
pub struct InsertSubmissionEntity {
    pub kind: String,
    pub payload: serde_json::Value,
    pub attachments: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, AsChangeset, PartialEq)]
#[diesel(table_name = submissions)]
pub struct EditSubmissionEntity {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
