use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Months, Utc};
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    entities::advertisers::AdvertiserEntity,
    repositories::{job_postings::JobPostingRepository, properties::PropertyRepository},
    value_objects::{
        enums::advertiser_statuses::AdvertiserStatus,
        plans::{PlanResolution, PlanSnapshot, plan_terms},
        postings::ContactMatch,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("advertiser account is suspended")]
    Suspended,
    #[error("{plan} plan expired on {expiry_date}")]
    Expired {
        plan: String,
        expiry_date: DateTime<Utc>,
    },
}

/// Calendar-month expiry. A start on the 31st lands on the last day of shorter months.
pub fn plan_expiry(created_at: DateTime<Utc>, duration_months: u32) -> DateTime<Utc> {
    created_at
        .checked_add_months(Months::new(duration_months))
        .unwrap_or(created_at)
}

pub fn plan_snapshot(
    advertiser: &AdvertiserEntity,
    active_posting_count: i64,
    now: DateTime<Utc>,
) -> PlanSnapshot {
    let terms = plan_terms(&advertiser.plan);
    let expiry_date = plan_expiry(advertiser.created_at, terms.duration_months);

    PlanSnapshot {
        plan: advertiser.plan.clone(),
        duration_months: terms.duration_months,
        expiry_date,
        expired: now > expiry_date,
        posting_limit: terms.posting_limit,
        active_posting_count,
        remaining_posts: (terms.posting_limit - active_posting_count).max(0),
    }
}

/// Suspension is checked before expiry. Performs no writes.
pub fn resolve_plan(
    advertiser: &AdvertiserEntity,
    active_posting_count: i64,
    now: DateTime<Utc>,
) -> std::result::Result<PlanResolution, PlanError> {
    let snapshot = plan_snapshot(advertiser, active_posting_count, now);

    if is_suspended(advertiser) {
        return Err(PlanError::Suspended);
    }

    if snapshot.expired {
        return Err(PlanError::Expired {
            plan: snapshot.plan,
            expiry_date: snapshot.expiry_date,
        });
    }

    Ok(snapshot.into())
}

fn is_suspended(advertiser: &AdvertiserEntity) -> bool {
    advertiser.status.parse::<AdvertiserStatus>().ok() == Some(AdvertiserStatus::Suspended)
}

/// Counts an advertiser's live postings and applies the plan terms to them.
pub struct PlanResolver<J, P>
where
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    job_posting_repo: Arc<J>,
    property_repo: Arc<P>,
}

impl<J, P> PlanResolver<J, P>
where
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    pub fn new(job_posting_repo: Arc<J>, property_repo: Arc<P>) -> Self {
        Self {
            job_posting_repo,
            property_repo,
        }
    }

    pub async fn active_posting_count(&self, advertiser: &AdvertiserEntity) -> Result<i64> {
        let contact = ContactMatch::for_advertiser(advertiser);
        let jobs = self.job_posting_repo.count_active_by_contact(&contact).await?;
        let properties = self.property_repo.count_active_by_contact(&contact).await?;

        debug!(
            advertiser_id = %advertiser.id,
            jobs,
            properties,
            "plan_resolver: counted active postings"
        );
        Ok(jobs + properties)
    }

    pub async fn snapshot(
        &self,
        advertiser: &AdvertiserEntity,
        now: DateTime<Utc>,
    ) -> Result<PlanSnapshot> {
        let active_posting_count = self.active_posting_count(advertiser).await?;
        Ok(plan_snapshot(advertiser, active_posting_count, now))
    }

    pub async fn resolve<E>(
        &self,
        advertiser: &AdvertiserEntity,
        now: DateTime<Utc>,
    ) -> std::result::Result<PlanResolution, E>
    where
        E: From<PlanError> + From<anyhow::Error>,
    {
        let active_posting_count = self.active_posting_count(advertiser).await?;
        Ok(resolve_plan(advertiser, active_posting_count, now)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::advertisers::AdvertiserError;
    use crate::domain::repositories::{
        job_postings::MockJobPostingRepository, properties::MockPropertyRepository,
    };
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn advertiser(plan: &str, status: &str, created_at: DateTime<Utc>) -> AdvertiserEntity {
        AdvertiserEntity {
            id: Uuid::new_v4(),
            business_name: "Surulere Realty".to_string(),
            email: "desk@surulererealty.ng".to_string(),
            phone: "08031234567".to_string(),
            plan: plan.to_string(),
            status: status.to_string(),
            access_code_hash: None,
            whatsapp: None,
            whatsapp_enabled: false,
            whatsapp_expiry: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn one_month_plan_uses_calendar_months() {
        let created_at = at(2025, 1, 1);
        let account = advertiser("1_month", "active", created_at);

        let day_29 = plan_snapshot(&account, 0, created_at + Duration::days(29));
        assert!(!day_29.expired);
        assert_eq!(day_29.expiry_date, at(2025, 2, 1));

        let day_32 = plan_snapshot(&account, 0, created_at + Duration::days(32));
        assert!(day_32.expired);
    }

    #[test]
    fn month_end_signup_clamps_to_last_day_of_next_month() {
        assert_eq!(plan_expiry(at(2025, 1, 31), 1), at(2025, 2, 28));
        assert_eq!(plan_expiry(at(2024, 1, 31), 1), at(2024, 2, 29));
        assert_eq!(plan_expiry(at(2025, 8, 31), 6), at(2026, 2, 28));
    }

    #[test]
    fn expiry_instant_itself_is_not_expired() {
        let account = advertiser("1_month", "active", at(2025, 3, 10));
        assert!(resolve_plan(&account, 0, at(2025, 4, 10)).is_ok());
        assert!(resolve_plan(&account, 0, at(2025, 4, 10) + Duration::seconds(1)).is_err());
    }

    #[test]
    fn remaining_posts_never_goes_negative() {
        let account = advertiser("1_month", "active", at(2025, 1, 1));
        let resolution = resolve_plan(&account, 9, at(2025, 1, 10)).unwrap();
        assert_eq!(resolution.posting_limit, 5);
        assert_eq!(resolution.active_posting_count, 9);
        assert_eq!(resolution.remaining_posts, 0);
    }

    #[test]
    fn suspended_fails_before_expiry_is_considered() {
        let fresh = advertiser("12_months", "suspended", at(2025, 1, 1));
        assert_eq!(
            resolve_plan(&fresh, 0, at(2025, 1, 2)),
            Err(PlanError::Suspended)
        );

        let lapsed = advertiser("1_month", "suspended", at(2023, 1, 1));
        assert_eq!(
            resolve_plan(&lapsed, 0, at(2025, 1, 2)),
            Err(PlanError::Suspended)
        );
    }

    #[test]
    fn unknown_plan_fails_closed_with_zero_quota() {
        let created_at = at(2025, 1, 1);
        let account = advertiser("forever", "active", created_at);

        let snapshot = plan_snapshot(&account, 3, created_at);
        assert_eq!(snapshot.duration_months, 0);
        assert_eq!(snapshot.posting_limit, 0);
        assert_eq!(snapshot.remaining_posts, 0);
        assert!(!snapshot.expired);

        assert!(matches!(
            resolve_plan(&account, 0, created_at + Duration::seconds(1)),
            Err(PlanError::Expired { .. })
        ));
    }

    #[test]
    fn three_month_plan_end_to_end_dates() {
        let account = advertiser("3_months", "active", at(2025, 1, 1));

        let resolution = resolve_plan(&account, 10, at(2025, 2, 1)).unwrap();
        assert_eq!(resolution.remaining_posts, 2);
        assert_eq!(resolution.expiry_date, at(2025, 4, 1));

        assert_eq!(
            resolve_plan(&account, 10, at(2025, 5, 1)),
            Err(PlanError::Expired {
                plan: "3_months".to_string(),
                expiry_date: at(2025, 4, 1),
            })
        );
    }

    #[tokio::test]
    async fn resolver_sums_jobs_and_properties_matched_by_contact() {
        let account = advertiser("6_months", "active", at(2025, 1, 1));

        let mut job_repo = MockJobPostingRepository::new();
        let mut property_repo = MockPropertyRepository::new();

        job_repo
            .expect_count_active_by_contact()
            .withf(|contact| {
                contact.email.as_deref() == Some("desk@surulererealty.ng")
                    && contact.phone == "08031234567"
            })
            .returning(|_| Ok(4));
        property_repo
            .expect_count_active_by_contact()
            .withf(|contact| {
                contact.email.as_deref() == Some("desk@surulererealty.ng")
                    && contact.phone == "08031234567"
            })
            .returning(|_| Ok(7));

        let resolver = PlanResolver::new(Arc::new(job_repo), Arc::new(property_repo));
        let resolution = resolver
            .resolve::<AdvertiserError>(&account, at(2025, 3, 1))
            .await
            .unwrap();

        assert_eq!(resolution.active_posting_count, 11);
        assert_eq!(resolution.posting_limit, 25);
        assert_eq!(resolution.remaining_posts, 14);
    }
}
