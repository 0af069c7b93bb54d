pub mod axum_http;
pub mod media;
pub mod postgres;
