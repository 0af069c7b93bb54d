use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_TYPE},
    },
    middleware,
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::{
    config::config_model::DotEnvyConfig,
    infrastructure::{
        axum_http::{admin_session::require_admin_session, default_routers, routers},
        media::hosted_media::HostedMediaUploader,
        postgres::postgres_connection::PgPoolSquad,
    },
};

pub fn app(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<Router> {
    let media_uploader = Arc::new(HostedMediaUploader::new(&config.media)?);

    let gated_admin = Router::new()
        .nest(
            "/advertisers",
            routers::advertisers::admin_routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/jobs",
            routers::jobs::admin_routes(Arc::clone(&db_pool), Arc::clone(&media_uploader)),
        )
        .nest(
            "/properties",
            routers::properties::admin_routes(Arc::clone(&db_pool), Arc::clone(&media_uploader)),
        )
        .nest(
            "/submissions",
            routers::submissions::admin_routes(Arc::clone(&db_pool), Arc::clone(&media_uploader)),
        )
        .merge(routers::content::admin_routes(Arc::clone(&db_pool)))
        .merge(routers::dashboard::routes(Arc::clone(&db_pool)))
        .merge(routers::admin_auth::gated_routes(
            Arc::clone(&config),
            Arc::clone(&db_pool),
        ))
        .route_layer(middleware::from_fn(require_admin_session));

    let admin = Router::new()
        .merge(routers::admin_auth::routes(
            Arc::clone(&config),
            Arc::clone(&db_pool),
        ))
        .merge(gated_admin);

    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest(
            "/api/advertisers",
            routers::advertisers::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/jobs",
            routers::jobs::routes(Arc::clone(&db_pool), Arc::clone(&media_uploader)),
        )
        .nest(
            "/api/properties",
            routers::properties::routes(Arc::clone(&db_pool), Arc::clone(&media_uploader)),
        )
        .nest(
            "/api/submissions",
            routers::submissions::routes(Arc::clone(&db_pool), Arc::clone(&media_uploader)),
        )
        .nest("/api", routers::content::routes(Arc::clone(&db_pool)))
        .nest("/api/admin", admin)
        .route("/api/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        // Multipart bodies are bounded by the layer below instead of axum's 2 MiB default.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(cors_layer(config.server.cors_allowed_origin.as_deref())?)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    // The admin cookie only travels cross-origin to an explicitly named front end.
    let cors = match allowed_origin {
        Some(origin) => cors
            .allow_origin(AllowOrigin::exact(
                HeaderValue::from_str(origin).context("CORS_ALLOWED_ORIGIN is invalid")?,
            ))
            .allow_credentials(true),
        None => cors.allow_origin(AllowOrigin::any()),
    };

    Ok(cors)
}

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let app = app(Arc::clone(&config), db_pool)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!(stage = %config.stage, "Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install CTRL+C signal handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_malformed_origin() {
        assert!(cors_layer(Some("https://lagos.example.com")).is_ok());
        assert!(cors_layer(Some("bad\norigin")).is_err());
        assert!(cors_layer(None).is_ok());
    }
}
