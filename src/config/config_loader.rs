use anyhow::{Context, Result};

use super::{
    config_model::{Admin, Database, DotEnvyConfig, Media, Server},
    stage::Stage,
};

const DEFAULT_SESSION_MAX_AGE_HOURS: i64 = 24;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: required("SERVER_PORT")?
            .parse()
            .context("SERVER_PORT is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse()
            .context("SERVER_TIMEOUT is invalid")?,
        cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
    };

    let database = Database {
        url: required("DATABASE_URL")?,
    };

    let admin = Admin {
        fallback_password: required("ADMIN_PASSWORD")?,
        session_max_age_hours: match optional("ADMIN_SESSION_MAX_AGE_HOURS") {
            Some(raw) => raw
                .parse()
                .context("ADMIN_SESSION_MAX_AGE_HOURS is invalid")?,
            None => DEFAULT_SESSION_MAX_AGE_HOURS,
        },
    };

    let media = Media {
        upload_url: required("MEDIA_UPLOAD_URL")?
            .parse()
            .context("MEDIA_UPLOAD_URL is invalid")?,
        upload_preset: required("MEDIA_UPLOAD_PRESET")?,
        folder: optional("MEDIA_FOLDER").unwrap_or_else(|| "site".to_string()),
    };

    Ok(DotEnvyConfig {
        stage: get_stage(),
        server,
        database,
        admin,
        media,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{} is invalid", key))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Both scenarios live in one test because the process environment is shared.
    #[test]
    fn loads_config_from_env_and_reports_missing_keys() {
        unsafe {
            env::set_var("SERVER_PORT", "8080");
            env::set_var("SERVER_BODY_LIMIT", "10");
            env::set_var("SERVER_TIMEOUT", "30");
            env::set_var("DATABASE_URL", "postgres://localhost:5432/servicehub");
            env::set_var("ADMIN_PASSWORD", "letmein");
            env::set_var("MEDIA_UPLOAD_URL", "https://media.example.com/v1/upload");
            env::set_var("MEDIA_UPLOAD_PRESET", "site_uploads");
            env::remove_var("ADMIN_SESSION_MAX_AGE_HOURS");
            env::remove_var("MEDIA_FOLDER");
            env::set_var("STAGE", "production");
        }

        let config = load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.body_limit, 10);
        assert_eq!(config.admin.fallback_password, "letmein");
        assert_eq!(config.admin.session_max_age_hours, 24);
        assert_eq!(config.media.folder, "site");
        assert_eq!(config.stage, Stage::Production);

        unsafe {
            env::remove_var("MEDIA_UPLOAD_PRESET");
        }
        let err = load().unwrap_err();
        assert!(err.to_string().contains("MEDIA_UPLOAD_PRESET"));
    }
}
