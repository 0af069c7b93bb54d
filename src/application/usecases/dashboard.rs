use std::{collections::BTreeMap, sync::Arc};

use anyhow::Result;

use crate::domain::{
    repositories::{
        advertisers::AdvertiserRepository, job_postings::JobPostingRepository,
        properties::PropertyRepository, submissions::SubmissionRepository,
    },
    value_objects::{
        enums::submission_kinds::SubmissionKind,
        submissions::{DashboardStatsDto, StatusCount, SubmissionKindStats},
    },
};

pub struct DashboardUseCase<S, A, J, P>
where
    S: SubmissionRepository + Send + Sync + 'static,
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    submission_repo: Arc<S>,
    advertiser_repo: Arc<A>,
    job_posting_repo: Arc<J>,
    property_repo: Arc<P>,
}

impl<S, A, J, P> DashboardUseCase<S, A, J, P>
where
    S: SubmissionRepository + Send + Sync + 'static,
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    pub fn new(
        submission_repo: Arc<S>,
        advertiser_repo: Arc<A>,
        job_posting_repo: Arc<J>,
        property_repo: Arc<P>,
    ) -> Self {
        Self {
            submission_repo,
            advertiser_repo,
            job_posting_repo,
            property_repo,
        }
    }

    pub async fn stats(&self) -> Result<DashboardStatsDto> {
        let rows = self.submission_repo.count_by_kind_and_status().await?;

        Ok(DashboardStatsDto {
            submissions: group_by_kind(rows),
            advertisers: self.advertiser_repo.count_by_status().await?,
            job_postings: self.job_posting_repo.count_by_status().await?,
            properties: self.property_repo.count_by_status().await?,
        })
    }
}

/// Every known kind appears, with a zero total when nothing was submitted.
fn group_by_kind(rows: Vec<(String, String, i64)>) -> Vec<SubmissionKindStats> {
    let mut by_kind: BTreeMap<String, Vec<StatusCount>> = BTreeMap::new();
    for (kind, status, count) in rows {
        by_kind
            .entry(kind)
            .or_default()
            .push(StatusCount { status, count });
    }

    SubmissionKind::ALL
        .iter()
        .map(|kind| {
            let by_status = by_kind.remove(kind.as_str()).unwrap_or_default();
            SubmissionKindStats {
                kind: kind.to_string(),
                total: by_status.iter().map(|row| row.count).sum(),
                by_status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        advertisers::MockAdvertiserRepository, job_postings::MockJobPostingRepository,
        properties::MockPropertyRepository, submissions::MockSubmissionRepository,
    };

    #[tokio::test]
    async fn stats_cover_every_kind() {
        let mut submission_repo = MockSubmissionRepository::new();
        submission_repo.expect_count_by_kind_and_status().returning(|| {
            Ok(vec![
                ("feedback".to_string(), "new".to_string(), 4),
                ("feedback".to_string(), "closed".to_string(), 1),
                ("artisan_join".to_string(), "reviewed".to_string(), 2),
            ])
        });
        let mut advertiser_repo = MockAdvertiserRepository::new();
        advertiser_repo.expect_count_by_status().returning(|| {
            Ok(vec![StatusCount {
                status: "pending".to_string(),
                count: 3,
            }])
        });
        let mut job_repo = MockJobPostingRepository::new();
        job_repo.expect_count_by_status().returning(|| Ok(vec![]));
        let mut property_repo = MockPropertyRepository::new();
        property_repo.expect_count_by_status().returning(|| Ok(vec![]));

        let stats = DashboardUseCase::new(
            Arc::new(submission_repo),
            Arc::new(advertiser_repo),
            Arc::new(job_repo),
            Arc::new(property_repo),
        )
        .stats()
        .await
        .unwrap();

        assert_eq!(stats.submissions.len(), SubmissionKind::ALL.len());
        let feedback = stats
            .submissions
            .iter()
            .find(|row| row.kind == "feedback")
            .unwrap();
        assert_eq!(feedback.total, 5);
        let shop = stats
            .submissions
            .iter()
            .find(|row| row.kind == "shop_request")
            .unwrap();
        assert_eq!(shop.total, 0);
        assert!(shop.by_status.is_empty());
        assert_eq!(stats.advertisers[0].count, 3);
    }
}
