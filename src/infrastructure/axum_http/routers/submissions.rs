use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::usecases::submissions::SubmissionUseCase,
    domain::{
        repositories::{media::MediaUploader, submissions::SubmissionRepository},
        value_objects::submissions::{ListSubmissionsFilter, UpdateSubmissionModel},
    },
    infrastructure::{
        axum_http::multipart_form::read_form,
        media::hosted_media::HostedMediaUploader,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::submissions::SubmissionPostgres,
        },
    },
};

fn usecase(
    db_pool: &Arc<PgPoolSquad>,
    media_uploader: Arc<HostedMediaUploader>,
) -> SubmissionUseCase<SubmissionPostgres, HostedMediaUploader> {
    let submission_repository = SubmissionPostgres::new(Arc::clone(db_pool));
    SubmissionUseCase::new(Arc::new(submission_repository), media_uploader)
}

pub fn routes(db_pool: Arc<PgPoolSquad>, media_uploader: Arc<HostedMediaUploader>) -> Router {
    Router::new()
        .route("/:kind", post(submit))
        .with_state(Arc::new(usecase(&db_pool, media_uploader)))
}

pub fn admin_routes(db_pool: Arc<PgPoolSquad>, media_uploader: Arc<HostedMediaUploader>) -> Router {
    Router::new()
        .route("/", get(list))
        .route(
            "/:submission_id",
            get(get_one).patch(update).delete(remove),
        )
        .with_state(Arc::new(usecase(&db_pool, media_uploader)))
}

pub async fn submit<S, M>(
    State(submission_usecase): State<Arc<SubmissionUseCase<S, M>>>,
    Path(kind): Path<String>,
    multipart: Multipart,
) -> impl IntoResponse
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    let (fields, files) = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    match submission_usecase
        .submit(&kind, fields, files, Utc::now())
        .await
    {
        Ok(submission) => (StatusCode::CREATED, Json(submission)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list<S, M>(
    State(submission_usecase): State<Arc<SubmissionUseCase<S, M>>>,
    Query(filter): Query<ListSubmissionsFilter>,
) -> impl IntoResponse
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match submission_usecase.list(filter).await {
        Ok(submissions) => (StatusCode::OK, Json(submissions)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_one<S, M>(
    State(submission_usecase): State<Arc<SubmissionUseCase<S, M>>>,
    Path(submission_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match submission_usecase.get(submission_id).await {
        Ok(submission) => (StatusCode::OK, Json(submission)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update<S, M>(
    State(submission_usecase): State<Arc<SubmissionUseCase<S, M>>>,
    Path(submission_id): Path<Uuid>,
    Json(update_model): Json<UpdateSubmissionModel>,
) -> impl IntoResponse
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match submission_usecase
        .update(submission_id, update_model, Utc::now())
        .await
    {
        Ok(submission) => (StatusCode::OK, Json(submission)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn remove<S, M>(
    State(submission_usecase): State<Arc<SubmissionUseCase<S, M>>>,
    Path(submission_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubmissionRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match submission_usecase.delete(submission_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
