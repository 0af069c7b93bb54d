use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::usecases::postings::PostingUseCase,
    domain::{
        repositories::{
            advertisers::AdvertiserRepository, job_postings::JobPostingRepository,
            media::MediaUploader, properties::PropertyRepository,
        },
        value_objects::{
            enums::poster_types::PosterType,
            postings::{ListPostingsFilter, UpdatePropertyModel, UpdatePostingStatusModel},
        },
    },
    infrastructure::{
        axum_http::{
            multipart_form::read_form,
            routers::{posting_usecase, public_poster_type},
        },
        media::hosted_media::HostedMediaUploader,
        postgres::postgres_connection::PgPoolSquad,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>, media_uploader: Arc<HostedMediaUploader>) -> Router {
    Router::new()
        .route("/", get(list_public).post(create_public))
        .route("/:property_id", get(get_public))
        .with_state(Arc::new(posting_usecase(&db_pool, media_uploader)))
}

pub fn admin_routes(db_pool: Arc<PgPoolSquad>, media_uploader: Arc<HostedMediaUploader>) -> Router {
    Router::new()
        .route("/", get(list_all).post(create_admin))
        .route(
            "/:property_id",
            get(get_any).patch(update).delete(remove),
        )
        .route("/:property_id/status", put(set_status))
        .with_state(Arc::new(posting_usecase(&db_pool, media_uploader)))
}

pub async fn list_public<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Query(filter): Query<ListPostingsFilter>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase.list_public_properties(filter).await {
        Ok(properties) => (StatusCode::OK, Json(properties)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_public<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Path(property_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase.get_property(property_id, true).await {
        Ok(property) => (StatusCode::OK, Json(property)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_public<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    jar: CookieJar,
    multipart: Multipart,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    let (fields, files) = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    let poster_type = match public_poster_type(&fields, &jar) {
        Ok(poster_type) => poster_type,
        Err(e) => return e.into_response(),
    };

    match posting_usecase
        .create_property(fields, files, poster_type, Utc::now())
        .await
    {
        Ok(property) => (StatusCode::CREATED, Json(property)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_all<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Query(filter): Query<ListPostingsFilter>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase.list_properties(filter).await {
        Ok(properties) => (StatusCode::OK, Json(properties)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_any<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Path(property_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase.get_property(property_id, false).await {
        Ok(property) => (StatusCode::OK, Json(property)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_admin<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    multipart: Multipart,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    let (fields, files) = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => return e.into_response(),
    };

    match posting_usecase
        .create_property(fields, files, PosterType::Admin, Utc::now())
        .await
    {
        Ok(property) => (StatusCode::CREATED, Json(property)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Path(property_id): Path<Uuid>,
    Json(update_model): Json<UpdatePropertyModel>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase
        .update_property(property_id, update_model, Utc::now())
        .await
    {
        Ok(property) => (StatusCode::OK, Json(property)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn set_status<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Path(property_id): Path<Uuid>,
    Json(status_model): Json<UpdatePostingStatusModel>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase
        .set_property_status(property_id, status_model.status, Utc::now())
        .await
    {
        Ok(property) => (StatusCode::OK, Json(property)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn remove<A, J, P, M>(
    State(posting_usecase): State<Arc<PostingUseCase<A, J, P, M>>>,
    Path(property_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
    M: MediaUploader + Send + Sync + 'static,
{
    match posting_usecase.delete_property(property_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
