use std::sync::Arc;

use anyhow::anyhow;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::{
        credentials::{generate_access_code, hash_secret, verify_secret},
        usecases::plan_resolver::{PlanError, PlanResolver, plan_expiry},
    },
    domain::{
        entities::advertisers::{AdvertiserEntity, EditAdvertiserEntity, InsertAdvertiserEntity},
        repositories::{
            advertisers::AdvertiserRepository, job_postings::JobPostingRepository,
            properties::PropertyRepository,
        },
        value_objects::{
            advertisers::{
                AdvertiserDetailDto, AdvertiserDto, AdvertiserLoginModel, AdvertiserSessionDto,
                AdvertiserSignupModel, ApprovedAdvertiserDto, ListAdvertisersFilter,
            },
            enums::advertiser_statuses::AdvertiserStatus,
            plans::PlanTier,
            postings::{AdvertiserPostingsDto, ContactMatch},
        },
    },
};

const MAX_WHATSAPP_MONTHS: u32 = 12;

#[derive(Debug, Error)]
pub enum AdvertiserError {
    #[error("Invalid email or access code")]
    InvalidCredentials,
    #[error("Your advertiser account has been suspended. Please contact support.")]
    Suspended,
    #[error("Your {plan} plan expired on {expiry_date}. Please renew to continue.")]
    Expired { plan: String, expiry_date: String },
    #[error("Advertiser not found")]
    NotFound,
    #[error("An advertiser account with this email already exists")]
    DuplicateEmail,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<PlanError> for AdvertiserError {
    fn from(value: PlanError) -> Self {
        match value {
            PlanError::Suspended => AdvertiserError::Suspended,
            PlanError::Expired { plan, expiry_date } => AdvertiserError::Expired {
                plan,
                expiry_date: expiry_date.format("%Y-%m-%d").to_string(),
            },
        }
    }
}

impl AdvertiserError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdvertiserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AdvertiserError::Suspended | AdvertiserError::Expired { .. } => StatusCode::FORBIDDEN,
            AdvertiserError::NotFound => StatusCode::NOT_FOUND,
            AdvertiserError::DuplicateEmail => StatusCode::CONFLICT,
            AdvertiserError::Validation(_) => StatusCode::BAD_REQUEST,
            AdvertiserError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AdvertiserError>;

pub struct AdvertiserUseCase<A, J, P>
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    advertiser_repo: Arc<A>,
    job_posting_repo: Arc<J>,
    property_repo: Arc<P>,
    plan_resolver: Arc<PlanResolver<J, P>>,
}

impl<A, J, P> AdvertiserUseCase<A, J, P>
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    pub fn new(
        advertiser_repo: Arc<A>,
        job_posting_repo: Arc<J>,
        property_repo: Arc<P>,
        plan_resolver: Arc<PlanResolver<J, P>>,
    ) -> Self {
        Self {
            advertiser_repo,
            job_posting_repo,
            property_repo,
            plan_resolver,
        }
    }

    pub async fn signup(
        &self,
        signup_model: AdvertiserSignupModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserDto> {
        let business_name = signup_model.business_name.trim().to_string();
        let email = normalize_email(&signup_model.email);
        let phone = signup_model.phone.trim().to_string();

        if business_name.is_empty() {
            return Err(AdvertiserError::Validation(
                "businessName is required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AdvertiserError::Validation(
                "A valid email is required".to_string(),
            ));
        }
        if phone.is_empty() {
            return Err(AdvertiserError::Validation("phone is required".to_string()));
        }
        // Unknown plans would resolve to zero quota, so they are refused up front.
        let plan = signup_model
            .plan
            .parse::<PlanTier>()
            .map_err(|err| AdvertiserError::Validation(err.to_string()))?;

        if self.advertiser_repo.find_by_email(&email).await?.is_some() {
            warn!(%email, "advertisers: duplicate signup rejected");
            return Err(AdvertiserError::DuplicateEmail);
        }

        let created = self
            .advertiser_repo
            .create(InsertAdvertiserEntity {
                business_name,
                email,
                phone,
                plan: plan.to_string(),
                status: AdvertiserStatus::Pending.to_string(),
                whatsapp: signup_model
                    .whatsapp
                    .map(|whatsapp| whatsapp.trim().to_string())
                    .filter(|whatsapp| !whatsapp.is_empty()),
                created_at: now,
                updated_at: now,
            })
            .await
            .map_err(|err| {
                error!(db_error = ?err, "advertisers: failed to store signup");
                AdvertiserError::Internal(err)
            })?;

        info!(advertiser_id = %created.id, plan = %created.plan, "advertisers: signup stored");
        Ok(AdvertiserDto::from(created))
    }

    pub async fn login(
        &self,
        login_model: AdvertiserLoginModel,
    ) -> UseCaseResult<AdvertiserSessionDto> {
        self.login_at(login_model, Utc::now()).await
    }

    pub async fn login_at(
        &self,
        login_model: AdvertiserLoginModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserSessionDto> {
        let email = normalize_email(&login_model.email);

        let advertiser = match self.advertiser_repo.find_by_email(&email).await? {
            Some(advertiser) => advertiser,
            None => {
                info!(%email, "advertisers: login for unknown email");
                return Err(AdvertiserError::InvalidCredentials);
            }
        };

        // Pending accounts have no access code yet.
        let Some(access_code_hash) = advertiser.access_code_hash.as_deref() else {
            info!(advertiser_id = %advertiser.id, "advertisers: login before approval");
            return Err(AdvertiserError::InvalidCredentials);
        };

        let access_code = login_model.access_code.trim().to_ascii_uppercase();
        if !verify_secret(&access_code, access_code_hash)? {
            info!(advertiser_id = %advertiser.id, "advertisers: wrong access code");
            return Err(AdvertiserError::InvalidCredentials);
        }

        let resolution = self
            .plan_resolver
            .resolve::<AdvertiserError>(&advertiser, now)
            .await
            .inspect_err(|err| {
                warn!(
                    advertiser_id = %advertiser.id,
                    status = err.status_code().as_u16(),
                    reason = %err,
                    "advertisers: login refused"
                );
            })?;

        info!(
            advertiser_id = %advertiser.id,
            remaining_posts = resolution.remaining_posts,
            "advertisers: login succeeded"
        );

        Ok(AdvertiserSessionDto {
            advertiser: AdvertiserDto::from(advertiser),
            expiry_date: resolution.expiry_date,
            posting_limit: resolution.posting_limit,
            current_posts: resolution.active_posting_count,
            remaining_posts: resolution.remaining_posts,
        })
    }

    pub async fn list(&self, filter: ListAdvertisersFilter) -> UseCaseResult<Vec<AdvertiserDto>> {
        let advertisers = self.advertiser_repo.list(&filter).await.map_err(|err| {
            error!(db_error = ?err, "advertisers: failed to list");
            AdvertiserError::Internal(err)
        })?;
        Ok(advertisers.into_iter().map(AdvertiserDto::from).collect())
    }

    pub async fn get(
        &self,
        advertiser_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserDetailDto> {
        let advertiser = self.find(advertiser_id).await?;
        let plan_status = self.plan_resolver.snapshot(&advertiser, now).await?;

        Ok(AdvertiserDetailDto {
            advertiser: AdvertiserDto::from(advertiser),
            plan_status,
        })
    }

    pub async fn postings(&self, advertiser_id: Uuid) -> UseCaseResult<AdvertiserPostingsDto> {
        let advertiser = self.find(advertiser_id).await?;
        let contact = ContactMatch::for_advertiser(&advertiser);

        let jobs = self.job_posting_repo.list_by_contact(&contact).await?;
        let properties = self.property_repo.list_by_contact(&contact).await?;

        Ok(AdvertiserPostingsDto {
            jobs: jobs.into_iter().map(Into::into).collect(),
            properties: properties.into_iter().map(Into::into).collect(),
        })
    }

    /// Activates the account and issues a fresh access code. Also used to reissue a lost code.
    pub async fn approve(
        &self,
        advertiser_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<ApprovedAdvertiserDto> {
        self.find(advertiser_id).await?;

        let access_code = generate_access_code();
        let updated = self
            .apply(
                advertiser_id,
                EditAdvertiserEntity {
                    status: Some(AdvertiserStatus::Active.to_string()),
                    access_code_hash: Some(hash_secret(&access_code)?),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        info!(%advertiser_id, "advertisers: approved and access code issued");
        Ok(ApprovedAdvertiserDto {
            advertiser: AdvertiserDto::from(updated),
            access_code,
        })
    }

    pub async fn set_status(
        &self,
        advertiser_id: Uuid,
        status: AdvertiserStatus,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserDto> {
        let advertiser = self.find(advertiser_id).await?;
        if status == AdvertiserStatus::Active && advertiser.access_code_hash.is_none() {
            return Err(AdvertiserError::Validation(
                "Approve the advertiser to issue an access code first".to_string(),
            ));
        }

        let updated = self
            .apply(
                advertiser_id,
                EditAdvertiserEntity {
                    status: Some(status.to_string()),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        info!(%advertiser_id, status = %status, "advertisers: status changed");
        Ok(AdvertiserDto::from(updated))
    }

    /// Switches to `plan` and restarts the term from `now`.
    pub async fn renew_plan(
        &self,
        advertiser_id: Uuid,
        plan: &str,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserDto> {
        let plan = plan
            .parse::<PlanTier>()
            .map_err(|err| AdvertiserError::Validation(err.to_string()))?;
        self.find(advertiser_id).await?;

        let updated = self
            .apply(
                advertiser_id,
                EditAdvertiserEntity {
                    plan: Some(plan.to_string()),
                    created_at: Some(now),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        info!(%advertiser_id, plan = %plan, "advertisers: plan renewed");
        Ok(AdvertiserDto::from(updated))
    }

    pub async fn enable_whatsapp(
        &self,
        advertiser_id: Uuid,
        months: u32,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserDto> {
        if months == 0 || months > MAX_WHATSAPP_MONTHS {
            return Err(AdvertiserError::Validation(format!(
                "months must be between 1 and {}",
                MAX_WHATSAPP_MONTHS
            )));
        }
        self.find(advertiser_id).await?;

        let updated = self
            .apply(
                advertiser_id,
                EditAdvertiserEntity {
                    whatsapp_enabled: Some(true),
                    whatsapp_expiry: Some(plan_expiry(now, months)),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        info!(%advertiser_id, months, "advertisers: whatsapp enabled");
        Ok(AdvertiserDto::from(updated))
    }

    pub async fn disable_whatsapp(
        &self,
        advertiser_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AdvertiserDto> {
        self.find(advertiser_id).await?;

        let updated = self
            .apply(
                advertiser_id,
                EditAdvertiserEntity {
                    whatsapp_enabled: Some(false),
                    updated_at: Some(now),
                    ..Default::default()
                },
            )
            .await?;

        info!(%advertiser_id, "advertisers: whatsapp disabled");
        Ok(AdvertiserDto::from(updated))
    }

    pub async fn delete(&self, advertiser_id: Uuid) -> UseCaseResult<()> {
        if !self.advertiser_repo.delete(advertiser_id).await? {
            return Err(AdvertiserError::NotFound);
        }
        info!(%advertiser_id, "advertisers: deleted");
        Ok(())
    }

    async fn find(&self, advertiser_id: Uuid) -> UseCaseResult<AdvertiserEntity> {
        self.advertiser_repo
            .find_by_id(advertiser_id)
            .await?
            .ok_or(AdvertiserError::NotFound)
    }

    async fn apply(
        &self,
        advertiser_id: Uuid,
        edit_advertiser_entity: EditAdvertiserEntity,
    ) -> UseCaseResult<AdvertiserEntity> {
        self.advertiser_repo
            .update(advertiser_id, edit_advertiser_entity)
            .await
            .map_err(|err| {
                error!(%advertiser_id, db_error = ?err, "advertisers: failed to update");
                AdvertiserError::Internal(err)
            })?
            .ok_or_else(|| AdvertiserError::Internal(anyhow!("advertiser vanished during update")))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        advertisers::MockAdvertiserRepository, job_postings::MockJobPostingRepository,
        properties::MockPropertyRepository,
    };
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn approved_advertiser(access_code: &str, status: &str) -> AdvertiserEntity {
        AdvertiserEntity {
            id: Uuid::new_v4(),
            business_name: "Lekki Shortlets".to_string(),
            email: "bookings@lekkishortlets.ng".to_string(),
            phone: "08035550000".to_string(),
            plan: "3_months".to_string(),
            status: status.to_string(),
            access_code_hash: Some(hash_secret(access_code).unwrap()),
            whatsapp: None,
            whatsapp_enabled: false,
            whatsapp_expiry: None,
            created_at: at(2025, 1, 1),
            updated_at: at(2025, 1, 1),
        }
    }

    fn usecase(
        advertiser_repo: MockAdvertiserRepository,
        job_repo: MockJobPostingRepository,
        property_repo: MockPropertyRepository,
    ) -> AdvertiserUseCase<MockAdvertiserRepository, MockJobPostingRepository, MockPropertyRepository>
    {
        let job_repo = Arc::new(job_repo);
        let property_repo = Arc::new(property_repo);
        let plan_resolver = Arc::new(PlanResolver::new(
            Arc::clone(&job_repo),
            Arc::clone(&property_repo),
        ));
        AdvertiserUseCase::new(
            Arc::new(advertiser_repo),
            job_repo,
            property_repo,
            plan_resolver,
        )
    }

    fn posting_counts(jobs: i64, properties: i64) -> (MockJobPostingRepository, MockPropertyRepository) {
        let mut job_repo = MockJobPostingRepository::new();
        let mut property_repo = MockPropertyRepository::new();
        job_repo
            .expect_count_active_by_contact()
            .returning(move |_| Ok(jobs));
        property_repo
            .expect_count_active_by_contact()
            .returning(move |_| Ok(properties));
        (job_repo, property_repo)
    }

    fn login(access_code: &str) -> AdvertiserLoginModel {
        AdvertiserLoginModel {
            email: " Bookings@LekkiShortlets.ng ".to_string(),
            access_code: access_code.to_string(),
        }
    }

    #[tokio::test]
    async fn login_reports_remaining_quota_within_plan() {
        let advertiser = approved_advertiser("K7Q2M9XA", "active");
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_email()
            .withf(|email| email == "bookings@lekkishortlets.ng")
            .returning(move |_| Ok(Some(advertiser.clone())));
        let (job_repo, property_repo) = posting_counts(6, 4);

        let session = usecase(advertiser_repo, job_repo, property_repo)
            .login_at(login("K7Q2M9XA"), at(2025, 2, 1))
            .await
            .unwrap();

        assert_eq!(session.expiry_date, at(2025, 4, 1));
        assert_eq!(session.posting_limit, 12);
        assert_eq!(session.current_posts, 10);
        assert_eq!(session.remaining_posts, 2);
    }

    #[tokio::test]
    async fn login_after_plan_lapse_is_forbidden() {
        let advertiser = approved_advertiser("K7Q2M9XA", "active");
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(advertiser.clone())));
        let (job_repo, property_repo) = posting_counts(6, 4);

        let err = usecase(advertiser_repo, job_repo, property_repo)
            .login_at(login("K7Q2M9XA"), at(2025, 5, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, AdvertiserError::Expired { .. }));
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert!(err.to_string().contains("2025-04-01"));
    }

    #[tokio::test]
    async fn suspended_account_is_forbidden_even_within_plan() {
        let advertiser = approved_advertiser("K7Q2M9XA", "suspended");
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(advertiser.clone())));
        let (job_repo, property_repo) = posting_counts(0, 0);

        let err = usecase(advertiser_repo, job_repo, property_repo)
            .login_at(login("K7Q2M9XA"), at(2025, 1, 15))
            .await
            .unwrap_err();

        assert!(matches!(err, AdvertiserError::Suspended));
    }

    #[tokio::test]
    async fn wrong_access_code_is_unauthorized_without_counting_postings() {
        let advertiser = approved_advertiser("K7Q2M9XA", "active");
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(advertiser.clone())));

        let err = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
        )
        .login_at(login("WRONG123"), at(2025, 1, 15))
        .await
        .unwrap_err();

        assert!(matches!(err, AdvertiserError::InvalidCredentials));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn pending_account_cannot_log_in() {
        let mut advertiser = approved_advertiser("K7Q2M9XA", "pending");
        advertiser.access_code_hash = None;
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(advertiser.clone())));

        let err = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
        )
        .login_at(login("K7Q2M9XA"), at(2025, 1, 15))
        .await
        .unwrap_err();

        assert!(matches!(err, AdvertiserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn signup_rejects_unknown_plan_and_duplicate_email() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_email()
            .returning(|_| Ok(Some(approved_advertiser("K7Q2M9XA", "active"))));
        advertiser_repo.expect_create().never();
        let usecase = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
        );

        let mut signup = AdvertiserSignupModel {
            business_name: "Lekki Shortlets".to_string(),
            email: "bookings@lekkishortlets.ng".to_string(),
            phone: "08035550000".to_string(),
            plan: "2_weeks".to_string(),
            whatsapp: None,
        };
        let err = usecase.signup(signup.clone(), at(2025, 1, 1)).await.unwrap_err();
        assert!(matches!(err, AdvertiserError::Validation(_)));

        signup.plan = "6_months".to_string();
        let err = usecase.signup(signup, at(2025, 1, 1)).await.unwrap_err();
        assert!(matches!(err, AdvertiserError::DuplicateEmail));
    }

    #[tokio::test]
    async fn signup_stores_pending_account_with_normalized_email() {
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo.expect_find_by_email().returning(|_| Ok(None));
        advertiser_repo
            .expect_create()
            .withf(|entity| {
                entity.email == "ads@yabatech.ng"
                    && entity.status == "pending"
                    && entity.plan == "12_months"
                    && entity.whatsapp.is_none()
            })
            .returning(|entity| {
                Ok(AdvertiserEntity {
                    id: Uuid::new_v4(),
                    business_name: entity.business_name,
                    email: entity.email,
                    phone: entity.phone,
                    plan: entity.plan,
                    status: entity.status,
                    access_code_hash: None,
                    whatsapp: entity.whatsapp,
                    whatsapp_enabled: false,
                    whatsapp_expiry: None,
                    created_at: entity.created_at,
                    updated_at: entity.updated_at,
                })
            });

        let dto = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
        )
        .signup(
            AdvertiserSignupModel {
                business_name: " Yaba Tech Hub ".to_string(),
                email: "ADS@YabaTech.ng".to_string(),
                phone: "08020000000".to_string(),
                plan: "12_months".to_string(),
                whatsapp: Some("  ".to_string()),
            },
            at(2025, 6, 1),
        )
        .await
        .unwrap();

        assert_eq!(dto.business_name, "Yaba Tech Hub");
        assert_eq!(dto.status, "pending");
    }

    #[tokio::test]
    async fn approval_issues_a_verifiable_access_code() {
        let pending = {
            let mut advertiser = approved_advertiser("unused", "pending");
            advertiser.access_code_hash = None;
            advertiser
        };
        let advertiser_id = pending.id;

        let mut advertiser_repo = MockAdvertiserRepository::new();
        let found = pending.clone();
        advertiser_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        advertiser_repo
            .expect_update()
            .withf(move |id, edit| {
                *id == advertiser_id
                    && edit.status.as_deref() == Some("active")
                    && edit.access_code_hash.is_some()
                    && edit.created_at.is_none()
            })
            .returning(move |_, edit| {
                let mut updated = pending.clone();
                updated.status = edit.status.unwrap();
                updated.access_code_hash = edit.access_code_hash;
                Ok(Some(updated))
            });

        let approved = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
        )
        .approve(advertiser_id, at(2025, 1, 2))
        .await
        .unwrap();

        assert_eq!(approved.advertiser.status, "active");
        assert_eq!(approved.access_code.len(), 8);
    }

    #[tokio::test]
    async fn whatsapp_activation_runs_for_calendar_months() {
        let advertiser = approved_advertiser("K7Q2M9XA", "active");
        let advertiser_id = advertiser.id;

        let mut advertiser_repo = MockAdvertiserRepository::new();
        let found = advertiser.clone();
        advertiser_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        advertiser_repo
            .expect_update()
            .withf(|_, edit| {
                edit.whatsapp_enabled == Some(true)
                    && edit.whatsapp_expiry
                        == Some(Utc.with_ymd_and_hms(2025, 4, 30, 0, 0, 0).unwrap())
            })
            .returning(move |_, edit| {
                let mut updated = advertiser.clone();
                updated.whatsapp_enabled = true;
                updated.whatsapp_expiry = edit.whatsapp_expiry;
                Ok(Some(updated))
            });

        let usecase = usecase(
            advertiser_repo,
            MockJobPostingRepository::new(),
            MockPropertyRepository::new(),
        );

        let err = usecase
            .enable_whatsapp(advertiser_id, 0, at(2025, 1, 31))
            .await
            .unwrap_err();
        assert!(matches!(err, AdvertiserError::Validation(_)));

        let dto = usecase
            .enable_whatsapp(advertiser_id, 3, at(2025, 1, 31))
            .await
            .unwrap();
        assert!(dto.whatsapp_enabled);
    }

    #[tokio::test]
    async fn admin_detail_shows_lapsed_plan_instead_of_failing() {
        let advertiser = approved_advertiser("K7Q2M9XA", "suspended");
        let advertiser_id = advertiser.id;
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(advertiser.clone())));
        let (job_repo, property_repo) = posting_counts(3, 20);

        let detail = usecase(advertiser_repo, job_repo, property_repo)
            .get(advertiser_id, at(2025, 6, 1))
            .await
            .unwrap();

        assert!(detail.plan_status.expired);
        assert_eq!(detail.plan_status.active_posting_count, 23);
        assert_eq!(detail.plan_status.remaining_posts, 0);
    }
}
