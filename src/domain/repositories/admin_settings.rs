use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

#[automock]
#[async_trait]
pub trait AdminSettingsRepository {
    async fn find_password_hash(&self) -> Result<Option<String>>;
    async fn save_password_hash(&self, password_hash: String) -> Result<()>;
}
