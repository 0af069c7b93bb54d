use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::usecases::content::ContentUseCase,
    domain::{
        repositories::content::{
            AnnouncementRepository, ShopProductRepository, TrainingRepository,
        },
        value_objects::content::{
            AnnouncementModel, ShopProductModel, TrainingModel, UpdateAnnouncementModel,
            UpdateShopProductModel, UpdateTrainingModel,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        repositories::content::{AnnouncementPostgres, ShopProductPostgres, TrainingPostgres},
    },
};

fn usecase(
    db_pool: &Arc<PgPoolSquad>,
) -> ContentUseCase<AnnouncementPostgres, TrainingPostgres, ShopProductPostgres> {
    ContentUseCase::new(
        Arc::new(AnnouncementPostgres::new(Arc::clone(db_pool))),
        Arc::new(TrainingPostgres::new(Arc::clone(db_pool))),
        Arc::new(ShopProductPostgres::new(Arc::clone(db_pool))),
    )
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/announcements", get(list_published_announcements))
        .route("/trainings", get(list_published_trainings))
        .route("/shop-products", get(list_in_stock_products))
        .with_state(Arc::new(usecase(&db_pool)))
}

pub fn admin_routes(db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route(
            "/announcements",
            get(list_all_announcements).post(create_announcement),
        )
        .route(
            "/announcements/:announcement_id",
            patch(update_announcement).delete(delete_announcement),
        )
        .route("/trainings", get(list_all_trainings).post(create_training))
        .route(
            "/trainings/:training_id",
            patch(update_training).delete(delete_training),
        )
        .route(
            "/shop-products",
            get(list_all_products).post(create_shop_product),
        )
        .route(
            "/shop-products/:shop_product_id",
            patch(update_shop_product).delete(delete_shop_product),
        )
        .with_state(Arc::new(usecase(&db_pool)))
}

pub async fn list_published_announcements<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.list_announcements(true).await {
        Ok(announcements) => (StatusCode::OK, Json(announcements)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_all_announcements<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.list_announcements(false).await {
        Ok(announcements) => (StatusCode::OK, Json(announcements)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_announcement<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Json(model): Json<AnnouncementModel>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.create_announcement(model, Utc::now()).await {
        Ok(announcement) => (StatusCode::CREATED, Json(announcement)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_announcement<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Path(announcement_id): Path<Uuid>,
    Json(model): Json<UpdateAnnouncementModel>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase
        .update_announcement(announcement_id, model, Utc::now())
        .await
    {
        Ok(announcement) => (StatusCode::OK, Json(announcement)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_announcement<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Path(announcement_id): Path<Uuid>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.delete_announcement(announcement_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_published_trainings<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.list_trainings(true).await {
        Ok(trainings) => (StatusCode::OK, Json(trainings)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_all_trainings<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.list_trainings(false).await {
        Ok(trainings) => (StatusCode::OK, Json(trainings)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_training<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Json(model): Json<TrainingModel>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.create_training(model, Utc::now()).await {
        Ok(training) => (StatusCode::CREATED, Json(training)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_training<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Path(training_id): Path<Uuid>,
    Json(model): Json<UpdateTrainingModel>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase
        .update_training(training_id, model, Utc::now())
        .await
    {
        Ok(training) => (StatusCode::OK, Json(training)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_training<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Path(training_id): Path<Uuid>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.delete_training(training_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_in_stock_products<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.list_shop_products(true).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_all_products<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.list_shop_products(false).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_shop_product<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Json(model): Json<ShopProductModel>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.create_shop_product(model, Utc::now()).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_shop_product<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Path(shop_product_id): Path<Uuid>,
    Json(model): Json<UpdateShopProductModel>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase
        .update_shop_product(shop_product_id, model, Utc::now())
        .await
    {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_shop_product<An, T, Sp>(
    State(content_usecase): State<Arc<ContentUseCase<An, T, Sp>>>,
    Path(shop_product_id): Path<Uuid>,
) -> impl IntoResponse
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    match content_usecase.delete_shop_product(shop_product_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
