use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    entities::{
        announcements::InsertAnnouncementEntity, shop_products::InsertShopProductEntity,
        trainings::InsertTrainingEntity,
    },
    repositories::content::{AnnouncementRepository, ShopProductRepository, TrainingRepository},
    value_objects::content::{
        AnnouncementDto, AnnouncementModel, ShopProductDto, ShopProductModel, TrainingDto,
        TrainingModel, UpdateAnnouncementModel, UpdateShopProductModel, UpdateTrainingModel,
    },
};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ContentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::NotFound(_) => StatusCode::NOT_FOUND,
            ContentError::Validation(_) => StatusCode::BAD_REQUEST,
            ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ContentError>;

fn require(value: &str, field: &str) -> UseCaseResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContentError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn require_non_negative(value: Option<i64>, field: &str) -> UseCaseResult<()> {
    match value {
        Some(amount) if amount < 0 => Err(ContentError::Validation(format!(
            "{} cannot be negative",
            field
        ))),
        _ => Ok(()),
    }
}

/// Announcements, trainings and shop products. Public callers only see published or
/// in-stock items.
pub struct ContentUseCase<An, T, Sp>
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    announcement_repo: Arc<An>,
    training_repo: Arc<T>,
    shop_product_repo: Arc<Sp>,
}

impl<An, T, Sp> ContentUseCase<An, T, Sp>
where
    An: AnnouncementRepository + Send + Sync + 'static,
    T: TrainingRepository + Send + Sync + 'static,
    Sp: ShopProductRepository + Send + Sync + 'static,
{
    pub fn new(announcement_repo: Arc<An>, training_repo: Arc<T>, shop_product_repo: Arc<Sp>) -> Self {
        Self {
            announcement_repo,
            training_repo,
            shop_product_repo,
        }
    }

    pub async fn list_announcements(&self, published_only: bool) -> UseCaseResult<Vec<AnnouncementDto>> {
        let announcements = self.announcement_repo.list(published_only).await?;
        Ok(announcements.into_iter().map(Into::into).collect())
    }

    pub async fn create_announcement(
        &self,
        model: AnnouncementModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AnnouncementDto> {
        let created = self
            .announcement_repo
            .create(InsertAnnouncementEntity {
                title: require(&model.title, "title")?,
                body: require(&model.body, "body")?,
                published: model.published,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(announcement_id = %created.id, "content: announcement created");
        Ok(created.into())
    }

    pub async fn update_announcement(
        &self,
        announcement_id: Uuid,
        model: UpdateAnnouncementModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<AnnouncementDto> {
        self.announcement_repo
            .update(announcement_id, model.to_entity(now))
            .await?
            .map(Into::into)
            .ok_or(ContentError::NotFound("Announcement"))
    }

    pub async fn delete_announcement(&self, announcement_id: Uuid) -> UseCaseResult<()> {
        if !self.announcement_repo.delete(announcement_id).await? {
            return Err(ContentError::NotFound("Announcement"));
        }
        info!(%announcement_id, "content: announcement deleted");
        Ok(())
    }

    pub async fn list_trainings(&self, published_only: bool) -> UseCaseResult<Vec<TrainingDto>> {
        let trainings = self.training_repo.list(published_only).await?;
        Ok(trainings.into_iter().map(Into::into).collect())
    }

    pub async fn create_training(
        &self,
        model: TrainingModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<TrainingDto> {
        require_non_negative(model.fee, "fee")?;
        let created = self
            .training_repo
            .create(InsertTrainingEntity {
                title: require(&model.title, "title")?,
                description: require(&model.description, "description")?,
                starts_on: model.starts_on,
                location: model.location,
                fee: model.fee,
                published: model.published,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(training_id = %created.id, "content: training created");
        Ok(created.into())
    }

    pub async fn update_training(
        &self,
        training_id: Uuid,
        model: UpdateTrainingModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<TrainingDto> {
        require_non_negative(model.fee, "fee")?;
        self.training_repo
            .update(training_id, model.to_entity(now))
            .await?
            .map(Into::into)
            .ok_or(ContentError::NotFound("Training"))
    }

    pub async fn delete_training(&self, training_id: Uuid) -> UseCaseResult<()> {
        if !self.training_repo.delete(training_id).await? {
            return Err(ContentError::NotFound("Training"));
        }
        info!(%training_id, "content: training deleted");
        Ok(())
    }

    pub async fn list_shop_products(&self, in_stock_only: bool) -> UseCaseResult<Vec<ShopProductDto>> {
        let products = self.shop_product_repo.list(in_stock_only).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    pub async fn create_shop_product(
        &self,
        model: ShopProductModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<ShopProductDto> {
        require_non_negative(Some(model.price), "price")?;
        let created = self
            .shop_product_repo
            .create(InsertShopProductEntity {
                name: require(&model.name, "name")?,
                description: model.description,
                price: model.price,
                image_url: model.image_url,
                in_stock: model.in_stock,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(shop_product_id = %created.id, "content: shop product created");
        Ok(created.into())
    }

    pub async fn update_shop_product(
        &self,
        shop_product_id: Uuid,
        model: UpdateShopProductModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<ShopProductDto> {
        require_non_negative(model.price, "price")?;
        self.shop_product_repo
            .update(shop_product_id, model.to_entity(now))
            .await?
            .map(Into::into)
            .ok_or(ContentError::NotFound("Shop product"))
    }

    pub async fn delete_shop_product(&self, shop_product_id: Uuid) -> UseCaseResult<()> {
        if !self.shop_product_repo.delete(shop_product_id).await? {
            return Err(ContentError::NotFound("Shop product"));
        }
        info!(%shop_product_id, "content: shop product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{announcements::AnnouncementEntity, shop_products::ShopProductEntity},
        repositories::content::{
            MockAnnouncementRepository, MockShopProductRepository, MockTrainingRepository,
        },
    };
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 10, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn public_announcements_ask_for_published_only() {
        let mut announcement_repo = MockAnnouncementRepository::new();
        announcement_repo
            .expect_list()
            .withf(|published_only| *published_only)
            .returning(|_| {
                Ok(vec![AnnouncementEntity {
                    id: Uuid::new_v4(),
                    title: "Recruitment drive".to_string(),
                    body: "Walk-in interviews at Yaba".to_string(),
                    published: true,
                    created_at: now(),
                    updated_at: now(),
                }])
            });

        let usecase = ContentUseCase::new(
            Arc::new(announcement_repo),
            Arc::new(MockTrainingRepository::new()),
            Arc::new(MockShopProductRepository::new()),
        );
        let announcements = usecase.list_announcements(true).await.unwrap();
        assert_eq!(announcements.len(), 1);
    }

    #[tokio::test]
    async fn shop_product_requires_name_and_non_negative_price() {
        let mut shop_product_repo = MockShopProductRepository::new();
        shop_product_repo
            .expect_create()
            .withf(|entity| entity.name == "Branded mug" && entity.in_stock)
            .times(1)
            .returning(|entity| {
                Ok(ShopProductEntity {
                    id: Uuid::new_v4(),
                    name: entity.name,
                    description: entity.description,
                    price: entity.price,
                    image_url: entity.image_url,
                    in_stock: entity.in_stock,
                    created_at: entity.created_at,
                    updated_at: entity.updated_at,
                })
            });
        let usecase = ContentUseCase::new(
            Arc::new(MockAnnouncementRepository::new()),
            Arc::new(MockTrainingRepository::new()),
            Arc::new(shop_product_repo),
        );

        let model = ShopProductModel {
            name: " Branded mug ".to_string(),
            description: None,
            price: 4500,
            image_url: None,
            in_stock: true,
        };

        let err = usecase
            .create_shop_product(
                ShopProductModel {
                    price: -1,
                    ..model.clone()
                },
                now(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let dto = usecase.create_shop_product(model, now()).await.unwrap();
        assert_eq!(dto.price, 4500);
    }

    #[tokio::test]
    async fn deleting_missing_training_is_not_found() {
        let mut training_repo = MockTrainingRepository::new();
        training_repo.expect_delete().returning(|_| Ok(false));
        let usecase = ContentUseCase::new(
            Arc::new(MockAnnouncementRepository::new()),
            Arc::new(training_repo),
            Arc::new(MockShopProductRepository::new()),
        );

        let err = usecase.delete_training(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "Training not found");
    }
}
