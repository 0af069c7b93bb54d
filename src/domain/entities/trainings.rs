use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::trainings;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, PartialEq)]
#[diesel(table_name = trainings)]
pub struct TrainingEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starts_on: Option<NaiveDate>,
    pub location: Option<String>,
    pub fee: Option<i64>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable, PartialEq)]
#[diesel(table_name = trainings)]
pub struct InsertTrainingEntity {
    pub title: String,
    pub description: String,
    pub starts_on: Option<NaiveDate>,
    pub location: Option<String>,
    pub fee: Option<i64>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, AsChangeset, PartialEq)]
#[diesel(table_name = trainings)]
pub struct EditTrainingEntity {
    pub title: Option<String>,
    pub description: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub location: Option<String>,
    pub fee: Option<i64>,
    pub published: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}
