use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::usecases::{
        plan_resolver::{PlanError, PlanResolver},
        uploads::upload_all,
    },
    domain::{
        entities::{
            advertisers::AdvertiserEntity,
            job_postings::{EditJobPostingEntity, InsertJobPostingEntity},
            properties::{EditPropertyEntity, InsertPropertyEntity},
        },
        repositories::{
            advertisers::AdvertiserRepository, job_postings::JobPostingRepository,
            media::MediaUploader, properties::PropertyRepository,
        },
        value_objects::{
            enums::{poster_types::PosterType, posting_statuses::PostingStatus},
            forms::{FormFields, UploadFile},
            postings::{
                ContactMatch, JobPostingDto, ListPostingsFilter, NewJobPostingModel,
                NewPropertyModel, PropertyDto, UpdateJobPostingModel, UpdatePropertyModel,
            },
        },
    },
};

#[derive(Debug, Error)]
pub enum PostingError {
    #[error("Posting not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("No advertiser account is registered with this phone number")]
    NoAdvertiser,
    #[error("Your advertiser account has been suspended. Please contact support.")]
    Suspended,
    #[error("Your {plan} plan expired on {expiry_date}. Please renew to continue.")]
    Expired { plan: String, expiry_date: String },
    #[error(
        "Posting limit reached. Your {plan} plan allows {limit} listings. You have {count} active listings."
    )]
    QuotaExceeded { plan: String, limit: i64, count: i64 },
    #[error("Upload failed")]
    Upload(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<PlanError> for PostingError {
    fn from(value: PlanError) -> Self {
        match value {
            PlanError::Suspended => PostingError::Suspended,
            PlanError::Expired { plan, expiry_date } => PostingError::Expired {
                plan,
                expiry_date: expiry_date.format("%Y-%m-%d").to_string(),
            },
        }
    }
}

impl PostingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostingError::NotFound => StatusCode::NOT_FOUND,
            PostingError::Validation(_) => StatusCode::BAD_REQUEST,
            PostingError::NoAdvertiser
            | PostingError::Suspended
            | PostingError::Expired { .. }
            | PostingError::QuotaExceeded { .. } => StatusCode::FORBIDDEN,
            PostingError::Upload(_) => StatusCode::BAD_GATEWAY,
            PostingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PostingError>;

pub struct PostingUseCase<A, J, P, M>
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    advertiser_repo: Arc<A>,
    job_posting_repo: Arc<J>,
    property_repo: Arc<P>,
    media_uploader: Arc<M>,
    plan_resolver: Arc<PlanResolver<J, P>>,
}

impl<A, J, P, M> PostingUseCase<A, J, P, M>
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    pub fn new(
        advertiser_repo: Arc<A>,
        job_posting_repo: Arc<J>,
        property_repo: Arc<P>,
        media_uploader: Arc<M>,
        plan_resolver: Arc<PlanResolver<J, P>>,
    ) -> Self {
        Self {
            advertiser_repo,
            job_posting_repo,
            property_repo,
            media_uploader,
            plan_resolver,
        }
    }

    /// Advertiser postings must fit within the plan. The check and the insert are separate
    /// statements, so two concurrent submissions can both pass at the last free slot.
    pub async fn enforce_quota(
        &self,
        contact_phone: Option<&str>,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserEntity> {
        let phone = contact_phone
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .ok_or_else(|| {
                PostingError::Validation("contactPhone is required for agent postings".to_string())
            })?;

        let advertiser = self
            .advertiser_repo
            .find_by_phone(phone)
            .await?
            .ok_or_else(|| {
                warn!(%phone, "postings: agent posting without advertiser account");
                PostingError::NoAdvertiser
            })?;

        let resolution = self
            .plan_resolver
            .resolve::<PostingError>(&advertiser, now)
            .await?;

        if resolution.active_posting_count >= resolution.posting_limit {
            warn!(
                advertiser_id = %advertiser.id,
                plan = %advertiser.plan,
                limit = resolution.posting_limit,
                count = resolution.active_posting_count,
                "postings: quota exceeded"
            );
            return Err(PostingError::QuotaExceeded {
                plan: advertiser.plan.clone(),
                limit: resolution.posting_limit,
                count: resolution.active_posting_count,
            });
        }

        Ok(advertiser)
    }

    pub async fn create_job(
        &self,
        fields: FormFields,
        files: Vec<UploadFile>,
        poster_type: PosterType,
        now: DateTime<Utc>,
    ) -> UseCaseResult<JobPostingDto> {
        let mut job = NewJobPostingModel::from_fields(&fields).map_err(PostingError::Validation)?;

        if poster_type == PosterType::Agent {
            let advertiser = self.enforce_quota(job.contact_phone.as_deref(), now).await?;
            job.contact_email = ContactMatch::for_advertiser(&advertiser).email;
        }

        let attachment_url = self.upload(files).await?.into_iter().next();

        let created = self
            .job_posting_repo
            .create(InsertJobPostingEntity {
                title: job.title,
                company: job.company,
                location: job.location,
                job_type: job.job_type,
                salary: job.salary,
                description: job.description,
                requirements: job.requirements,
                contact_email: job.contact_email,
                contact_phone: job.contact_phone,
                poster_type: poster_type.to_string(),
                status: PostingStatus::Active.to_string(),
                attachment_url,
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "postings: failed to store job posting");
                PostingError::Internal(err)
            })?;

        info!(job_posting_id = %created.id, poster_type = %poster_type, "postings: job posting created");
        Ok(created.into())
    }

    pub async fn create_property(
        &self,
        fields: FormFields,
        files: Vec<UploadFile>,
        poster_type: PosterType,
        now: DateTime<Utc>,
    ) -> UseCaseResult<PropertyDto> {
        let mut property =
            NewPropertyModel::from_fields(&fields).map_err(PostingError::Validation)?;

        if poster_type == PosterType::Agent {
            let advertiser = self
                .enforce_quota(property.contact_phone.as_deref(), now)
                .await?;
            property.contact_email = ContactMatch::for_advertiser(&advertiser).email;
            property
                .contact_name
                .get_or_insert(advertiser.business_name);
        }

        let image_urls = self.upload(files).await?;

        let created = self
            .property_repo
            .create(InsertPropertyEntity {
                title: property.title,
                description: property.description,
                location: property.location,
                price: property.price,
                property_type: property.property_type,
                listing_type: property.listing_type.to_string(),
                bedrooms: property.bedrooms,
                bathrooms: property.bathrooms,
                image_urls,
                contact_name: property.contact_name,
                contact_email: property.contact_email,
                contact_phone: property.contact_phone,
                poster_type: poster_type.to_string(),
                status: PostingStatus::Active.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "postings: failed to store property");
                PostingError::Internal(err)
            })?;

        info!(property_id = %created.id, poster_type = %poster_type, "postings: property created");
        Ok(created.into())
    }

    /// Public listing only ever shows active postings.
    pub async fn list_public_jobs(
        &self,
        filter: ListPostingsFilter,
    ) -> UseCaseResult<Vec<JobPostingDto>> {
        self.list_jobs(ListPostingsFilter {
            status: Some(PostingStatus::Active),
            ..filter
        })
        .await
    }

    pub async fn list_jobs(&self, filter: ListPostingsFilter) -> UseCaseResult<Vec<JobPostingDto>> {
        let jobs = self.job_posting_repo.list(&filter).await?;
        Ok(jobs.into_iter().map(Into::into).collect())
    }

    pub async fn get_job(&self, job_posting_id: Uuid, public: bool) -> UseCaseResult<JobPostingDto> {
        let job = self
            .job_posting_repo
            .find_by_id(job_posting_id)
            .await?
            .filter(|job| !public || is_active(&job.status))
            .ok_or(PostingError::NotFound)?;
        Ok(job.into())
    }

    pub async fn update_job(
        &self,
        job_posting_id: Uuid,
        update_model: UpdateJobPostingModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<JobPostingDto> {
        if let Some(status) = update_model.status {
            ensure_job_status(status)?;
        }
        self.apply_job(job_posting_id, update_model.to_entity(now)).await
    }

    pub async fn set_job_status(
        &self,
        job_posting_id: Uuid,
        status: PostingStatus,
        now: DateTime<Utc>,
    ) -> UseCaseResult<JobPostingDto> {
        ensure_job_status(status)?;
        self.apply_job(
            job_posting_id,
            EditJobPostingEntity {
                status: Some(status.to_string()),
                updated_at: Some(now),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete_job(&self, job_posting_id: Uuid) -> UseCaseResult<()> {
        if !self.job_posting_repo.delete(job_posting_id).await? {
            return Err(PostingError::NotFound);
        }
        info!(%job_posting_id, "postings: job posting deleted");
        Ok(())
    }

    pub async fn list_public_properties(
        &self,
        filter: ListPostingsFilter,
    ) -> UseCaseResult<Vec<PropertyDto>> {
        self.list_properties(ListPostingsFilter {
            status: Some(PostingStatus::Active),
            ..filter
        })
        .await
    }

    pub async fn list_properties(
        &self,
        filter: ListPostingsFilter,
    ) -> UseCaseResult<Vec<PropertyDto>> {
        let properties = self.property_repo.list(&filter).await?;
        Ok(properties.into_iter().map(Into::into).collect())
    }

    pub async fn get_property(&self, property_id: Uuid, public: bool) -> UseCaseResult<PropertyDto> {
        let property = self
            .property_repo
            .find_by_id(property_id)
            .await?
            .filter(|property| !public || is_active(&property.status))
            .ok_or(PostingError::NotFound)?;
        Ok(property.into())
    }

    pub async fn update_property(
        &self,
        property_id: Uuid,
        update_model: UpdatePropertyModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<PropertyDto> {
        if let Some(status) = update_model.status {
            ensure_property_status(status)?;
        }
        self.apply_property(property_id, update_model.to_entity(now))
            .await
    }

    pub async fn set_property_status(
        &self,
        property_id: Uuid,
        status: PostingStatus,
        now: DateTime<Utc>,
    ) -> UseCaseResult<PropertyDto> {
        ensure_property_status(status)?;
        self.apply_property(
            property_id,
            EditPropertyEntity {
                status: Some(status.to_string()),
                updated_at: Some(now),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete_property(&self, property_id: Uuid) -> UseCaseResult<()> {
        if !self.property_repo.delete(property_id).await? {
            return Err(PostingError::NotFound);
        }
        info!(%property_id, "postings: property deleted");
        Ok(())
    }

    async fn upload(&self, files: Vec<UploadFile>) -> UseCaseResult<Vec<String>> {
        upload_all(self.media_uploader.as_ref(), files)
            .await
            .map_err(|err| {
                error!(upload_error = ?err, "postings: media upload failed");
                PostingError::Upload(err)
            })
    }

    async fn apply_job(
        &self,
        job_posting_id: Uuid,
        edit_job_posting_entity: EditJobPostingEntity,
    ) -> UseCaseResult<JobPostingDto> {
        let updated = self
            .job_posting_repo
            .update(job_posting_id, edit_job_posting_entity)
            .await?
            .ok_or(PostingError::NotFound)?;
        info!(%job_posting_id, status = %updated.status, "postings: job posting updated");
        Ok(updated.into())
    }

    async fn apply_property(
        &self,
        property_id: Uuid,
        edit_property_entity: EditPropertyEntity,
    ) -> UseCaseResult<PropertyDto> {
        let updated = self
            .property_repo
            .update(property_id, edit_property_entity)
            .await?
            .ok_or(PostingError::NotFound)?;
        info!(%property_id, status = %updated.status, "postings: property updated");
        Ok(updated.into())
    }
}

fn ensure_job_status(status: PostingStatus) -> UseCaseResult<()> {
    if status == PostingStatus::Sold {
        return Err(PostingError::Validation(
            "Job postings cannot be marked sold".to_string(),
        ));
    }
    Ok(())
}

fn ensure_property_status(status: PostingStatus) -> UseCaseResult<()> {
    if status == PostingStatus::Filled {
        return Err(PostingError::Validation(
            "Properties cannot be marked filled".to_string(),
        ));
    }
    Ok(())
}

fn is_active(status: &str) -> bool {
    status.parse::<PostingStatus>().ok() == Some(PostingStatus::Active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::properties::PropertyEntity,
        repositories::{
            advertisers::MockAdvertiserRepository, job_postings::MockJobPostingRepository,
            media::MockMediaUploader, properties::MockPropertyRepository,
        },
    };
    use chrono::TimeZone;

    type TestUseCase = PostingUseCase<
        MockAdvertiserRepository,
        MockJobPostingRepository,
        MockPropertyRepository,
        MockMediaUploader,
    >;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn advertiser(plan: &str, status: &str) -> AdvertiserEntity {
        AdvertiserEntity {
            id: Uuid::new_v4(),
            business_name: "Ikoyi Homes".to_string(),
            email: "listings@ikoyihomes.ng".to_string(),
            phone: "08091234567".to_string(),
            plan: plan.to_string(),
            status: status.to_string(),
            access_code_hash: None,
            whatsapp: None,
            whatsapp_enabled: false,
            whatsapp_expiry: None,
            created_at: at(2025, 1, 1),
            updated_at: at(2025, 1, 1),
        }
    }

    fn property_fields() -> FormFields {
        [
            ("title", "3 bedroom flat"),
            ("description", "Serviced, 24h power"),
            ("location", "Ikoyi"),
            ("price", "₦4,500,000"),
            ("propertyType", "flat"),
            ("listingType", "rent"),
            ("bedrooms", "3"),
            ("contactPhone", "08091234567"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn image(name: &str) -> UploadFile {
        UploadFile {
            field_name: "images".to_string(),
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    fn stored_property(entity: InsertPropertyEntity) -> PropertyEntity {
        PropertyEntity {
            id: Uuid::new_v4(),
            title: entity.title,
            description: entity.description,
            location: entity.location,
            price: entity.price,
            property_type: entity.property_type,
            listing_type: entity.listing_type,
            bedrooms: entity.bedrooms,
            bathrooms: entity.bathrooms,
            image_urls: entity.image_urls,
            contact_name: entity.contact_name,
            contact_email: entity.contact_email,
            contact_phone: entity.contact_phone,
            poster_type: entity.poster_type,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    fn usecase(
        advertiser_repo: MockAdvertiserRepository,
        job_repo: MockJobPostingRepository,
        property_repo: MockPropertyRepository,
        media: MockMediaUploader,
    ) -> TestUseCase {
        let job_repo = Arc::new(job_repo);
        let property_repo = Arc::new(property_repo);
        let plan_resolver = Arc::new(PlanResolver::new(
            Arc::clone(&job_repo),
            Arc::clone(&property_repo),
        ));
        PostingUseCase::new(
            Arc::new(advertiser_repo),
            job_repo,
            property_repo,
            Arc::new(media),
            plan_resolver,
        )
    }

    #[tokio::test]
    async fn agent_posting_at_limit_is_rejected_before_upload() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_phone()
            .withf(|phone| phone == "08091234567")
            .returning(|_| Ok(Some(advertiser("1_month", "active"))));

        let mut job_repo = MockJobPostingRepository::new();
        job_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(2));
        let mut property_repo = MockPropertyRepository::new();
        property_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(3));
        property_repo.expect_create().never();

        let mut media = MockMediaUploader::new();
        media.expect_upload().never();

        let err = usecase(advertiser_repo, job_repo, property_repo, media)
            .create_property(
                property_fields(),
                vec![image("front.jpg")],
                PosterType::Agent,
                at(2025, 1, 20),
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            err.to_string(),
            "Posting limit reached. Your 1_month plan allows 5 listings. You have 5 active listings."
        );
    }

    #[tokio::test]
    async fn agent_posting_below_limit_is_stored_with_advertiser_contact() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_phone()
            .returning(|_| Ok(Some(advertiser("1_month", "active"))));

        let mut job_repo = MockJobPostingRepository::new();
        job_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(1));
        let mut property_repo = MockPropertyRepository::new();
        property_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(3));
        property_repo
            .expect_create()
            .withf(|entity| {
                entity.poster_type == "Agent"
                    && entity.price == 4_500_000
                    && entity.listing_type == "rent"
                    && entity.contact_email.as_deref() == Some("listings@ikoyihomes.ng")
                    && entity.image_urls == vec!["https://media.example.com/front.jpg".to_string()]
            })
            .returning(|entity| Ok(stored_property(entity)));

        let mut media = MockMediaUploader::new();
        media
            .expect_upload()
            .returning(|file| Ok(format!("https://media.example.com/{}", file.file_name)));

        let dto = usecase(advertiser_repo, job_repo, property_repo, media)
            .create_property(
                property_fields(),
                vec![image("front.jpg")],
                PosterType::Agent,
                at(2025, 1, 20),
            )
            .await
            .unwrap();

        assert_eq!(dto.status, "active");
        assert_eq!(dto.bedrooms, Some(3));
    }

    #[tokio::test]
    async fn agent_posting_always_carries_the_advertiser_email() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo.expect_find_by_phone().returning(|_| {
            let mut account = advertiser("1_month", "active");
            account.email = "Listings@IkoyiHomes.ng".to_string();
            Ok(Some(account))
        });

        let mut job_repo = MockJobPostingRepository::new();
        job_repo
            .expect_count_active_by_contact()
            .withf(|contact| {
                contact.email.as_deref() == Some("listings@ikoyihomes.ng")
                    && contact.phone == "08091234567"
            })
            .returning(|_| Ok(0));
        let mut property_repo = MockPropertyRepository::new();
        property_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(4));
        property_repo
            .expect_create()
            .withf(|entity| entity.contact_email.as_deref() == Some("listings@ikoyihomes.ng"))
            .returning(|entity| Ok(stored_property(entity)));

        let mut fields = property_fields();
        fields.insert("contactEmail".to_string(), "someone-else@x.ng".to_string());

        let dto = usecase(advertiser_repo, job_repo, property_repo, MockMediaUploader::new())
            .create_property(fields, vec![], PosterType::Agent, at(2025, 1, 20))
            .await
            .unwrap();

        assert_eq!(dto.contact_email.as_deref(), Some("listings@ikoyihomes.ng"));
    }

    #[tokio::test]
    async fn field_update_rejects_the_other_tables_terminal_status() {
        let mut job_repo = MockJobPostingRepository::new();
        job_repo.expect_update().never();
        let mut property_repo = MockPropertyRepository::new();
        property_repo.expect_update().never();
        let usecase = usecase(
            MockAdvertiserRepository::new(),
            job_repo,
            property_repo,
            MockMediaUploader::new(),
        );

        let err = usecase
            .update_job(
                Uuid::new_v4(),
                UpdateJobPostingModel {
                    title: Some("Driver".to_string()),
                    status: Some(PostingStatus::Sold),
                    ..Default::default()
                },
                at(2025, 2, 1),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = usecase
            .update_property(
                Uuid::new_v4(),
                UpdatePropertyModel {
                    status: Some(PostingStatus::Filled),
                    ..Default::default()
                },
                at(2025, 2, 1),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn agent_posting_needs_a_known_phone() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo.expect_find_by_phone().returning(|_| Ok(None));
        let usecase = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
            MockMediaUploader::new(),
        );

        let err = usecase.enforce_quota(Some("  "), at(2025, 1, 2)).await.unwrap_err();
        assert!(matches!(err, PostingError::Validation(_)));

        let err = usecase
            .enforce_quota(Some("08000000000"), at(2025, 1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, PostingError::NoAdvertiser));
    }

    #[tokio::test]
    async fn unknown_plan_fails_closed() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_phone()
            .returning(|_| Ok(Some(advertiser("legacy_gold", "active"))));
        let mut job_repo = MockJobPostingRepository::new();
        job_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(0));
        let mut property_repo = MockPropertyRepository::new();
        property_repo
            .expect_count_active_by_contact()
            .returning(|_| Ok(0));

        // Zero duration means the plan lapsed the moment it started.
        let err = usecase(advertiser_repo, job_repo, property_repo, MockMediaUploader::new())
            .enforce_quota(Some("08091234567"), at(2025, 1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, PostingError::Expired { .. }));
    }

    #[tokio::test]
    async fn admin_posting_skips_the_quota() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo.expect_find_by_phone().never();
        let mut property_repo = MockPropertyRepository::new();
        property_repo
            .expect_create()
            .withf(|entity| entity.poster_type == "Admin" && entity.image_urls.is_empty())
            .returning(|entity| Ok(stored_property(entity)));

        let dto = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            property_repo,
            MockMediaUploader::new(),
        )
        .create_property(property_fields(), vec![], PosterType::Admin, at(2025, 1, 2))
        .await
        .unwrap();

        assert_eq!(dto.poster_type, "Admin");
    }

    #[tokio::test]
    async fn missing_required_field_is_a_validation_error() {
        let mut fields = property_fields();
        fields.remove("price");

        let err = usecase(
            MockAdvertiserRepository::new(),
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
            MockMediaUploader::new(),
        )
        .create_property(fields, vec![], PosterType::Admin, at(2025, 1, 2))
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "price is required");
    }

    #[tokio::test]
    async fn public_get_hides_inactive_postings() {
        let mut property_repo = MockPropertyRepository::new();
        property_repo.expect_find_by_id().returning(|_| {
            let mut property = stored_property(InsertPropertyEntity {
                title: "Plot".to_string(),
                description: "Dry land".to_string(),
                location: "Epe".to_string(),
                price: 3_000_000,
                property_type: "land".to_string(),
                listing_type: "sale".to_string(),
                bedrooms: None,
                bathrooms: None,
                image_urls: vec![],
                contact_name: None,
                contact_email: None,
                contact_phone: None,
                poster_type: "Admin".to_string(),
                status: "sold".to_string(),
                created_at: at(2025, 1, 1),
                updated_at: at(2025, 1, 1),
            });
            property.status = "sold".to_string();
            Ok(Some(property))
        });
        let usecase = usecase(
            MockAdvertiserRepository::new(),
            MockJobPostingRepository::new(),
            property_repo,
            MockMediaUploader::new(),
        );

        let id = Uuid::new_v4();
        assert!(matches!(
            usecase.get_property(id, true).await.unwrap_err(),
            PostingError::NotFound
        ));
        assert_eq!(usecase.get_property(id, false).await.unwrap().status, "sold");
    }

    #[tokio::test]
    async fn public_listing_forces_active_status() {
        let mut job_repo = MockJobPostingRepository::new();
        job_repo
            .expect_list()
            .withf(|filter| {
                filter.status == Some(PostingStatus::Active)
                    && filter.location.as_deref() == Some("Yaba")
            })
            .returning(|_| Ok(vec![]));

        let jobs = usecase(
            MockAdvertiserRepository::new(),
            job_repo,
            MockPropertyRepository::new(),
            MockMediaUploader::new(),
        )
        .list_public_jobs(ListPostingsFilter {
            status: Some(PostingStatus::Filled),
            location: Some("Yaba".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

        assert!(jobs.is_empty());
    }
}
