pub mod admin_auth;
pub mod advertisers;
pub mod content;
pub mod dashboard;
pub mod jobs;
pub mod properties;
pub mod submissions;

use std::sync::Arc;

use axum_extra::extract::cookie::CookieJar;

use crate::{
    application::usecases::{plan_resolver::PlanResolver, postings::PostingUseCase},
    domain::value_objects::{
        enums::poster_types::PosterType,
        forms::{FormFields, optional_field},
    },
    infrastructure::{
        axum_http::{admin_session::has_admin_session, error_responses::AppError},
        media::hosted_media::HostedMediaUploader,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                advertisers::AdvertiserPostgres, job_postings::JobPostingPostgres,
                properties::PropertyPostgres,
            },
        },
    },
};

pub type PostgresPlanResolver = PlanResolver<JobPostingPostgres, PropertyPostgres>;

pub fn plan_resolver(
    db_pool: &Arc<PgPoolSquad>,
) -> (
    Arc<JobPostingPostgres>,
    Arc<PropertyPostgres>,
    Arc<PostgresPlanResolver>,
) {
    let job_posting_repository = Arc::new(JobPostingPostgres::new(Arc::clone(db_pool)));
    let property_repository = Arc::new(PropertyPostgres::new(Arc::clone(db_pool)));
    let plan_resolver = Arc::new(PlanResolver::new(
        Arc::clone(&job_posting_repository),
        Arc::clone(&property_repository),
    ));
    (job_posting_repository, property_repository, plan_resolver)
}

/// Jobs and properties share one use case so both go through the same quota check.
pub fn posting_usecase(
    db_pool: &Arc<PgPoolSquad>,
    media_uploader: Arc<HostedMediaUploader>,
) -> PostingUseCase<AdvertiserPostgres, JobPostingPostgres, PropertyPostgres, HostedMediaUploader>
{
    let advertiser_repository = AdvertiserPostgres::new(Arc::clone(db_pool));
    let (job_posting_repository, property_repository, plan_resolver) = plan_resolver(db_pool);

    PostingUseCase::new(
        Arc::new(advertiser_repository),
        job_posting_repository,
        property_repository,
        media_uploader,
        plan_resolver,
    )
}

/// Public posting forms default to the advertiser path. Admin-attributed postings need
/// the admin session.
pub fn public_poster_type(fields: &FormFields, jar: &CookieJar) -> Result<PosterType, AppError> {
    let poster_type = match optional_field(fields, "posterType") {
        Some(raw) => raw
            .parse::<PosterType>()
            .map_err(|err| AppError::BadRequest(err.to_string()))?,
        None => PosterType::Agent,
    };

    if poster_type == PosterType::Admin && !has_admin_session(jar) {
        return Err(AppError::Forbidden(
            "Admin postings must be created from the admin area".to_string(),
        ));
    }

    Ok(poster_type)
}
