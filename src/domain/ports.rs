use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Extracted: Send;
    type Transformed: Send;
    type Loaded: Send;

    async fn extract(&self) -> Result<Self::Extracted>;
    async fn transform(&self, data: Self::Extracted) -> Result<Self::Transformed>;
    async fn load(&self, result: Self::Transformed) -> Result<Self::Loaded>;
}
