use std::sync::Arc;

use axum::http::StatusCode;
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    application::credentials::{hash_secret, verify_secret},
    domain::repositories::admin_settings::AdminSettingsRepository,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Error)]
pub enum AdminAuthError {
    #[error("Invalid password")]
    InvalidPassword,
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AdminAuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminAuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AdminAuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminAuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, AdminAuthError>;

/// Session token carried in the admin cookie: the base64 of the login time in milliseconds.
pub fn session_token(now: DateTime<Utc>) -> String {
    STANDARD.encode(now.timestamp_millis().to_string())
}

pub struct AdminAuthUseCase<R>
where
    R: AdminSettingsRepository + Send + Sync + 'static,
{
    admin_settings_repo: Arc<R>,
    fallback_password: String,
}

impl<R> AdminAuthUseCase<R>
where
    R: AdminSettingsRepository + Send + Sync + 'static,
{
    pub fn new(admin_settings_repo: Arc<R>, fallback_password: String) -> Self {
        Self {
            admin_settings_repo,
            fallback_password,
        }
    }

    /// The stored hash wins once a password has been set; until then the configured
    /// plaintext password is compared directly.
    pub async fn login(&self, password: &str, now: DateTime<Utc>) -> UseCaseResult<String> {
        let accepted = match self.admin_settings_repo.find_password_hash().await? {
            Some(password_hash) => verify_secret(password, &password_hash)?,
            None => !self.fallback_password.is_empty() && password == self.fallback_password,
        };

        if !accepted {
            warn!("admin_auth: rejected login attempt");
            return Err(AdminAuthError::InvalidPassword);
        }

        info!("admin_auth: admin logged in");
        Ok(session_token(now))
    }

    pub async fn change_password(&self, new_password: &str) -> UseCaseResult<()> {
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AdminAuthError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let password_hash = hash_secret(new_password)?;
        self.admin_settings_repo
            .save_password_hash(password_hash)
            .await?;

        info!("admin_auth: admin password changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::admin_settings::MockAdminSettingsRepository;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn falls_back_to_configured_password_without_stored_hash() {
        let mut settings_repo = MockAdminSettingsRepository::new();
        settings_repo.expect_find_password_hash().returning(|| Ok(None));
        let usecase = AdminAuthUseCase::new(Arc::new(settings_repo), "lagos-admin".to_string());

        let token = usecase.login("lagos-admin", now()).await.unwrap();
        let decoded = String::from_utf8(STANDARD.decode(token).unwrap()).unwrap();
        assert_eq!(decoded, now().timestamp_millis().to_string());

        assert!(matches!(
            usecase.login("guess", now()).await.unwrap_err(),
            AdminAuthError::InvalidPassword
        ));
    }

    #[tokio::test]
    async fn stored_hash_replaces_the_fallback() {
        let stored = hash_secret("new-secret-1").unwrap();
        let mut settings_repo = MockAdminSettingsRepository::new();
        settings_repo
            .expect_find_password_hash()
            .returning(move || Ok(Some(stored.clone())));
        let usecase = AdminAuthUseCase::new(Arc::new(settings_repo), "lagos-admin".to_string());

        assert!(usecase.login("new-secret-1", now()).await.is_ok());
        assert!(usecase.login("lagos-admin", now()).await.is_err());
    }

    #[tokio::test]
    async fn empty_fallback_never_matches() {
        let mut settings_repo = MockAdminSettingsRepository::new();
        settings_repo.expect_find_password_hash().returning(|| Ok(None));
        let usecase = AdminAuthUseCase::new(Arc::new(settings_repo), String::new());

        assert!(usecase.login("", now()).await.is_err());
    }

    #[tokio::test]
    async fn password_change_stores_a_hash() {
        let mut settings_repo = MockAdminSettingsRepository::new();
        settings_repo
            .expect_save_password_hash()
            .withf(|hash| hash.starts_with("$argon2") && verify_secret("harmattan25", hash).unwrap())
            .times(1)
            .returning(|_| Ok(()));
        let usecase = AdminAuthUseCase::new(Arc::new(settings_repo), String::new());

        let err = usecase.change_password("short").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        usecase.change_password("harmattan25").await.unwrap();
    }
}
