use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use tracing::info;

use crate::config::stage::Stage;

pub const ADMIN_SESSION_COOKIE: &str = "admin_session";
pub const ADMIN_LOGIN_PAGE: &str = "/admin/login";

/// Only the presence of a non-empty session cookie is checked; its value is not verified.
pub fn has_admin_session(jar: &CookieJar) -> bool {
    jar.get(ADMIN_SESSION_COOKIE)
        .is_some_and(|cookie| !cookie.value().trim().is_empty())
}

pub async fn require_admin_session(jar: CookieJar, request: Request, next: Next) -> Response {
    if !has_admin_session(&jar) {
        info!(path = %request.uri().path(), "admin_session: no session, redirecting to login");
        return Redirect::to(ADMIN_LOGIN_PAGE).into_response();
    }

    next.run(request).await
}

pub fn session_cookie(token: String, max_age_hours: i64, stage: Stage) -> Cookie<'static> {
    Cookie::build((ADMIN_SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(stage.requires_secure_cookies())
        .max_age(Duration::hours(max_age_hours))
        .build()
}

pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((ADMIN_SESSION_COOKIE, "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{StatusCode, header},
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/admin/stats", get(|| async { "stats" }))
            .route_layer(middleware::from_fn(require_admin_session))
    }

    fn request(cookie: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/api/admin/stats");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_cookie_redirects_to_login() {
        let response = app().oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            ADMIN_LOGIN_PAGE
        );
    }

    #[tokio::test]
    async fn empty_cookie_is_treated_as_missing() {
        let response = app()
            .oneshot(request(Some("admin_session=")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn any_cookie_value_passes_the_gate() {
        let response = app()
            .oneshot(request(Some("admin_session=MTczNTY4OTYwMDAwMA==")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn session_cookie_flags_follow_stage() {
        let cookie = session_cookie("token".to_string(), 24, Stage::Production);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));

        let local = session_cookie("token".to_string(), 24, Stage::Local);
        assert_eq!(local.secure(), Some(false));
    }
}
