use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use crate::{
    application::usecases::admin_auth::AdminAuthUseCase,
    config::config_model::DotEnvyConfig,
    domain::repositories::admin_settings::AdminSettingsRepository,
    infrastructure::{
        axum_http::admin_session::{expired_session_cookie, session_cookie},
        postgres::{
            postgres_connection::PgPoolSquad, repositories::admin_settings::AdminSettingsPostgres,
        },
    },
};

#[derive(Debug, Deserialize)]
pub struct AdminLoginModel {
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordModel {
    pub new_password: String,
}

pub struct AdminAuthState<R>
where
    R: AdminSettingsRepository + Send + Sync + 'static,
{
    usecase: AdminAuthUseCase<R>,
    config: Arc<DotEnvyConfig>,
}

fn state(
    config: Arc<DotEnvyConfig>,
    db_pool: &Arc<PgPoolSquad>,
) -> Arc<AdminAuthState<AdminSettingsPostgres>> {
    let admin_settings_repository = AdminSettingsPostgres::new(Arc::clone(db_pool));
    let usecase = AdminAuthUseCase::new(
        Arc::new(admin_settings_repository),
        config.admin.fallback_password.clone(),
    );

    Arc::new(AdminAuthState { usecase, config })
}

/// Login and logout stay reachable without a session.
pub fn routes(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(state(config, &db_pool))
}

pub fn gated_routes(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Router {
    Router::new()
        .route("/password", put(change_password))
        .with_state(state(config, &db_pool))
}

pub async fn login<R>(
    State(admin_auth): State<Arc<AdminAuthState<R>>>,
    jar: CookieJar,
    Json(login_model): Json<AdminLoginModel>,
) -> impl IntoResponse
where
    R: AdminSettingsRepository + Send + Sync + 'static,
{
    match admin_auth
        .usecase
        .login(&login_model.password, Utc::now())
        .await
    {
        Ok(token) => {
            let cookie = session_cookie(
                token,
                admin_auth.config.admin.session_max_age_hours,
                admin_auth.config.stage,
            );
            (jar.add(cookie), StatusCode::NO_CONTENT).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(expired_session_cookie()), StatusCode::NO_CONTENT).into_response()
}

pub async fn change_password<R>(
    State(admin_auth): State<Arc<AdminAuthState<R>>>,
    Json(change_password_model): Json<ChangePasswordModel>,
) -> impl IntoResponse
where
    R: AdminSettingsRepository + Send + Sync + 'static,
{
    match admin_auth
        .usecase
        .change_password(&change_password_model.new_password)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
