use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tracing::{debug, error};
use url::Url;

use crate::{
    config::config_model::Media,
    domain::{repositories::media::MediaUploader, value_objects::forms::UploadFile},
};

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct UploadReply {
    secure_url: Option<String>,
    error: Option<UploadReplyError>,
}

#[derive(Debug, Deserialize)]
struct UploadReplyError {
    message: String,
}

/// Unsigned uploads to the hosted media service. The host answers with the public
/// `secure_url` of the stored asset.
pub struct HostedMediaUploader {
    client: Client,
    upload_url: Url,
    upload_preset: String,
    folder: String,
}

impl HostedMediaUploader {
    pub fn new(media: &Media) -> Result<Self> {
        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .context("failed to build media http client")?;

        Ok(Self {
            client,
            upload_url: media.upload_url.clone(),
            upload_preset: media.upload_preset.clone(),
            folder: media.folder.clone(),
        })
    }

    fn form(&self, file: UploadFile) -> Result<Form> {
        let file_name = if file.file_name.is_empty() {
            file.field_name.clone()
        } else {
            file.file_name.clone()
        };

        let part = Part::bytes(file.bytes)
            .file_name(file_name)
            .mime_str(&file.content_type)
            .with_context(|| format!("invalid content type {}", file.content_type))?;

        Ok(Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", self.folder.clone()))
    }
}

#[async_trait]
impl MediaUploader for HostedMediaUploader {
    async fn upload(&self, file: UploadFile) -> Result<String> {
        let size = file.bytes.len();
        let form = self.form(file)?;

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
            .context("media host unreachable")?;

        let status = response.status();
        let reply = response
            .json::<UploadReply>()
            .await
            .with_context(|| format!("unreadable media host reply ({})", status))?;

        if !status.is_success() {
            let message = reply
                .error
                .map(|error| error.message)
                .unwrap_or_else(|| status.to_string());
            error!(%status, %message, "hosted_media: upload rejected");
            return Err(anyhow!("media host rejected upload: {}", message));
        }

        let secure_url = reply
            .secure_url
            .ok_or_else(|| anyhow!("media host reply has no secure_url"))?;

        debug!(size, %secure_url, "hosted_media: upload stored");
        Ok(secure_url)
    }
}
