use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::{
        advertisers::AdvertiserEntity,
        job_postings::{EditJobPostingEntity, JobPostingEntity},
        properties::{EditPropertyEntity, PropertyEntity},
    },
    value_objects::{
        enums::{
            listing_types::ListingType, poster_types::PosterType, posting_statuses::PostingStatus,
        },
        forms::{FormFields, optional_count, optional_field, parse_amount, required_field},
    },
};

/// How postings are tied back to an advertiser: there is no foreign key, a posting belongs
/// to the advertiser when its contact email or its contact phone matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMatch {
    /// Lowercased; `None` when the advertiser has no email.
    pub email: Option<String>,
    pub phone: String,
}

impl ContactMatch {
    pub fn for_advertiser(advertiser: &AdvertiserEntity) -> Self {
        let email = advertiser.email.trim().to_lowercase();
        Self {
            email: (!email.is_empty()).then_some(email),
            phone: advertiser.phone.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListPostingsFilter {
    pub status: Option<PostingStatus>,
    pub poster_type: Option<PosterType>,
    pub location: Option<String>,
    /// Job type for jobs, property type for properties.
    pub category: Option<String>,
    pub listing_type: Option<ListingType>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPostingModel {
    pub title: String,
    pub company: Option<String>,
    pub location: String,
    pub job_type: String,
    pub salary: Option<String>,
    pub description: String,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl NewJobPostingModel {
    pub fn from_fields(fields: &FormFields) -> Result<Self, String> {
        Ok(Self {
            title: required_field(fields, "title")?,
            company: optional_field(fields, "company"),
            location: required_field(fields, "location")?,
            job_type: optional_field(fields, "jobType").unwrap_or_else(|| "full-time".to_string()),
            salary: optional_field(fields, "salary"),
            description: required_field(fields, "description")?,
            requirements: optional_field(fields, "requirements"),
            contact_email: optional_field(fields, "contactEmail"),
            contact_phone: optional_field(fields, "contactPhone"),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPropertyModel {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: i64,
    pub property_type: String,
    pub listing_type: ListingType,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl NewPropertyModel {
    pub fn from_fields(fields: &FormFields) -> Result<Self, String> {
        let listing_type = match optional_field(fields, "listingType") {
            Some(raw) => raw.parse::<ListingType>().map_err(|err| err.to_string())?,
            None => ListingType::default(),
        };

        Ok(Self {
            title: required_field(fields, "title")?,
            description: required_field(fields, "description")?,
            location: required_field(fields, "location")?,
            price: parse_amount(&required_field(fields, "price")?)?,
            property_type: required_field(fields, "propertyType")?,
            listing_type,
            bedrooms: optional_count(fields, "bedrooms")?,
            bathrooms: optional_count(fields, "bathrooms")?,
            contact_name: optional_field(fields, "contactName"),
            contact_email: optional_field(fields, "contactEmail"),
            contact_phone: optional_field(fields, "contactPhone"),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPostingModel {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: Option<PostingStatus>,
}

impl UpdateJobPostingModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditJobPostingEntity {
        EditJobPostingEntity {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            job_type: self.job_type.clone(),
            salary: self.salary.clone(),
            description: self.description.clone(),
            requirements: self.requirements.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            status: self.status.map(|status| status.to_string()),
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price: Option<i64>,
    pub property_type: Option<String>,
    pub listing_type: Option<ListingType>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: Option<PostingStatus>,
}

impl UpdatePropertyModel {
    pub fn to_entity(&self, now: DateTime<Utc>) -> EditPropertyEntity {
        EditPropertyEntity {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            price: self.price,
            property_type: self.property_type.clone(),
            listing_type: self.listing_type.map(|listing_type| listing_type.to_string()),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            status: self.status.map(|status| status.to_string()),
            updated_at: Some(now),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostingStatusModel {
    pub status: PostingStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingDto {
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

impl From<JobPostingEntity> for JobPostingDto {
    fn from(value: JobPostingEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            company: value.company,
            location: value.location,
            job_type: value.job_type,
            salary: value.salary,
            description: value.description,
            requirements: value.requirements,
            contact_email: value.contact_email,
            contact_phone: value.contact_phone,
            poster_type: value.poster_type,
            status: value.status,
            attachment_url: value.attachment_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
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

impl From<PropertyEntity> for PropertyDto {
    fn from(value: PropertyEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            location: value.location,
            price: value.price,
            property_type: value.property_type,
            listing_type: value.listing_type,
            bedrooms: value.bedrooms,
            bathrooms: value.bathrooms,
            image_urls: value.image_urls,
            contact_name: value.contact_name,
            contact_email: value.contact_email,
            contact_phone: value.contact_phone,
            poster_type: value.poster_type,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// An advertiser's postings across both collections.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserPostingsDto {
    pub jobs: Vec<JobPostingDto>,
    pub properties: Vec<PropertyDto>,
}
