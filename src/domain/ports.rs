use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the topics document comes from (a file on disk, an HTTP endpoint, ...).
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Retrieves the raw document bytes. Called once per session.
    async fn fetch(&self) -> Result<Vec<u8>>;

    fn location(&self) -> String;
}

#[async_trait]
impl<T: TopicSource + ?Sized> TopicSource for Box<T> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        (**self).fetch().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn source_location(&self) -> &str;
    fn reveal_delay(&self) -> Duration;
    fn request_timeout(&self) -> Option<Duration>;
    fn default_category(&self) -> Option<&str>;
}
