use crate::common::*;

#[async_trait]
pub trait ViewerService: Send + Sync {
    /// Hand a saved file to the desktop viewer without waiting for it.
    async fn open_artifact(&self, path: &Path) -> anyhow::Result<()>;
}
