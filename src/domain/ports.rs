use crate::utils::error::Result;
use async_trait::async_trait;

/// Key-value capability standing in for the browser's local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// External lookup of the subtractive ("modern") numeral for a validated value.
#[async_trait]
pub trait ModernResolver: Send + Sync {
    async fn resolve(&self, value: u16) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn resolver_endpoint(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
    fn store_path(&self) -> &str;
}
