use anyhow::{Context, Result};
use tracing::info;

use crate::domain::{repositories::media::MediaUploader, value_objects::forms::UploadFile};

/// Uploads every non-empty file in order and returns the hosted URLs.
pub async fn upload_all<M>(media_uploader: &M, files: Vec<UploadFile>) -> Result<Vec<String>>
where
    M: MediaUploader + Send + Sync + ?Sized,
{
    let mut urls = Vec::with_capacity(files.len());
    for file in files.into_iter().filter(|file| !file.is_empty()) {
        let file_name = file.file_name.clone();
        let size = file.bytes.len();
        let url = media_uploader
            .upload(file)
            .await
            .with_context(|| format!("failed to upload {}", file_name))?;
        info!(%file_name, size, "uploads: file stored");
        urls.push(url);
    }
    Ok(urls)
}
