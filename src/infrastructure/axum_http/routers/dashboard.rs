use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tracing::error;

use crate::{
    application::usecases::dashboard::DashboardUseCase,
    domain::repositories::{
        advertisers::AdvertiserRepository, job_postings::JobPostingRepository,
        properties::PropertyRepository, submissions::SubmissionRepository,
    },
    infrastructure::{
        axum_http::error_responses::AppError,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                advertisers::AdvertiserPostgres, job_postings::JobPostingPostgres,
                properties::PropertyPostgres, submissions::SubmissionPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let dashboard_usecase = DashboardUseCase::new(
        Arc::new(SubmissionPostgres::new(Arc::clone(&db_pool))),
        Arc::new(AdvertiserPostgres::new(Arc::clone(&db_pool))),
        Arc::new(JobPostingPostgres::new(Arc::clone(&db_pool))),
        Arc::new(PropertyPostgres::new(Arc::clone(&db_pool))),
    );

    Router::new()
        .route("/stats", get(stats))
        .with_state(Arc::new(dashboard_usecase))
}

pub async fn stats<S, A, J, P>(
    State(dashboard_usecase): State<Arc<DashboardUseCase<S, A, J, P>>>,
) -> impl IntoResponse
where
    S: SubmissionRepository + Send + Sync + 'static,
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match dashboard_usecase.stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => {
            error!(db_error = ?e, "dashboard: failed to load stats");
            AppError::Internal(e).into_response()
        }
    }
}
