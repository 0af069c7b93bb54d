use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::submissions::{EditSubmissionEntity, SubmissionEntity},
    value_objects::enums::{
        submission_kinds::SubmissionKind, submission_statuses::SubmissionStatus,
    },
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListSubmissionsFilter {
    pub kind: Option<SubmissionKind>,
    pub status: Option<SubmissionStatus>,
    /// Free text matched against the submitted fields.
    pub search: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubmissionModel {
    pub status: Option<SubmissionStatus>,
    pub admin_notes: Option<String>,
}

impl UpdateSubmissionModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditSubmissionEntity {
        EditSubmissionEntity {
            status: self.status.map(|status| status.to_string()),
            admin_notes: self.admin_notes.clone(),
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub attachments: Vec<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SubmissionEntity> for SubmissionDto {
    fn from(value: SubmissionEntity) -> Self {
        Self {
            id: value.id,
            kind: value.kind,
            payload: value.payload,
            attachments: value.attachments,
            status: value.status,
            admin_notes: value.admin_notes,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionKindStats {
    pub kind: String,
    pub total: i64,
    pub by_status: Vec<StatusCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub submissions: Vec<SubmissionKindStats>,
    pub advertisers: Vec<StatusCount>,
    pub job_postings: Vec<StatusCount>,
    pub properties: Vec<StatusCount>,
}
