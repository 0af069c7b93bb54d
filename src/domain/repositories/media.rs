use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::value_objects::forms::UploadFile;

/// Hands uploaded files to the hosted media service and returns their public URL.
#[automock]
#[async_trait]
pub trait MediaUploader {
    async fn upload(&self, file: UploadFile) -> Result<String>;
}
