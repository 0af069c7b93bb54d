use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::job_postings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, PartialEq)]
#[diesel(table_name = job_postings)]
pub struct JobPostingEntity {
    pub id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub poster_type: String,
    pub status: String,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, PartialEq)]
#[diesel(table_name = job_postings)]
pub struct InsertJobPostingEntity {
    pub title: String,
    pub company: Option<String>,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub poster_type: String,
    pub status: String,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, AsChangeset, PartialEq)]
#[diesel(table_name = job_postings)]
pub struct EditJobPostingEntity {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
