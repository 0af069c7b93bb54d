use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::usecases::advertisers::AdvertiserUseCase,
    domain::{
        repositories::{
            advertisers::AdvertiserRepository, job_postings::JobPostingRepository,
            properties::PropertyRepository,
        },
        value_objects::{
            advertisers::{
                AdvertiserLoginModel, AdvertiserSignupModel, ChangePlanModel, EnableWhatsappModel,
                ListAdvertisersFilter,
            },
            enums::advertiser_statuses::AdvertiserStatus,
            plans::plan_catalog,
        },
    },
    infrastructure::{
        axum_http::routers::plan_resolver,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                advertisers::AdvertiserPostgres, job_postings::JobPostingPostgres,
                properties::PropertyPostgres,
            },
        },
    },
};

fn usecase(
    db_pool: &Arc<PgPoolSquad>,
) -> AdvertiserUseCase<AdvertiserPostgres, JobPostingPostgres, PropertyPostgres> {
    let advertiser_repository = AdvertiserPostgres::new(Arc::clone(db_pool));
    let (job_posting_repository, property_repository, plan_resolver) = plan_resolver(db_pool);

    AdvertiserUseCase::new(
        Arc::new(advertiser_repository),
        job_posting_repository,
        property_repository,
        plan_resolver,
    )
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/plans", get(list_plans))
        .with_state(Arc::new(usecase(&db_pool)))
}

pub fn admin_routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/:advertiser_id", get(get_one).delete(remove))
        .route("/:advertiser_id/approve", post(approve))
        .route("/:advertiser_id/suspend", post(suspend))
        .route("/:advertiser_id/reactivate", post(reactivate))
        .route("/:advertiser_id/plan", put(renew_plan))
        .route(
            "/:advertiser_id/whatsapp",
            post(enable_whatsapp).delete(disable_whatsapp),
        )
        .route("/:advertiser_id/postings", get(postings))
        .with_state(Arc::new(usecase(&db_pool)))
}

pub async fn list_plans() -> impl IntoResponse {
    (StatusCode::OK, Json(plan_catalog())).into_response()
}

pub async fn signup<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Json(signup_model): Json<AdvertiserSignupModel>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.signup(signup_model, Utc::now()).await {
        Ok(advertiser) => (StatusCode::CREATED, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn login<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Json(login_model): Json<AdvertiserLoginModel>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.login(login_model).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Query(filter): Query<ListAdvertisersFilter>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.list(filter).await {
        Ok(advertisers) => (StatusCode::OK, Json(advertisers)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_one<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.get(advertiser_id, Utc::now()).await {
        Ok(advertiser) => (StatusCode::OK, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn postings<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.postings(advertiser_id).await {
        Ok(postings) => (StatusCode::OK, Json(postings)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn approve<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.approve(advertiser_id, Utc::now()).await {
        Ok(approved) => (StatusCode::OK, Json(approved)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn suspend<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase
        .set_status(advertiser_id, AdvertiserStatus::Suspended, Utc::now())
        .await
    {
        Ok(advertiser) => (StatusCode::OK, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn reactivate<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase
        .set_status(advertiser_id, AdvertiserStatus::Active, Utc::now())
        .await
    {
        Ok(advertiser) => (StatusCode::OK, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn renew_plan<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
    Json(change_plan_model): Json<ChangePlanModel>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase
        .renew_plan(advertiser_id, &change_plan_model.plan, Utc::now())
        .await
    {
        Ok(advertiser) => (StatusCode::OK, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn enable_whatsapp<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
    Json(enable_whatsapp_model): Json<EnableWhatsappModel>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase
        .enable_whatsapp(advertiser_id, enable_whatsapp_model.months, Utc::now())
        .await
    {
        Ok(advertiser) => (StatusCode::OK, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn disable_whatsapp<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase
        .disable_whatsapp(advertiser_id, Utc::now())
        .await
    {
        Ok(advertiser) => (StatusCode::OK, Json(advertiser)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn remove<A, J, P>(
    State(advertiser_usecase): State<Arc<AdvertiserUseCase<A, J, P>>>,
    Path(advertiser_id): Path<Uuid>,
) -> impl IntoResponse
where
    A: AdvertiserRepository + Send + Sync + 'static,
    J: JobPostingRepository + Send + Sync + 'static,
    P: PropertyRepository + Send + Sync + 'static,
{
    match advertiser_usecase.delete(advertiser_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
