use url::Url;

use super::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub stage: Stage,
    pub server: Server,
    pub database: Database,
    pub admin: Admin,
    pub media: Media,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    /// Request body limit in MiB; multipart uploads count against it.
    pub body_limit: u64,
    pub timeout: u64,
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Admin {
    pub fallback_password: String,
    pub session_max_age_hours: i64,
}

#[derive(Debug, Clone)]
pub struct Media {
    pub upload_url: Url,
    pub upload_preset: String,
    pub folder: String,
}
