use crate::core::{ConfigProvider, TopicSource};
use crate::utils::error::{Result, TopicError};
use crate::utils::validation::is_remote_location;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Reads the topics document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TopicSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(data)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the topics document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl TopicSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(TopicError::BadStatusError {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// 依資源位置建立對應的來源 (網址或檔案)
pub fn source_from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Box<dyn TopicSource>> {
    let location = config.source_location().trim();

    if is_remote_location(location) {
        let source = match config.request_timeout() {
            Some(timeout) => HttpSource::with_timeout(location, timeout)?,
            None => HttpSource::new(location),
        };
        Ok(Box::new(source))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_source_reads_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("topics.json");
        std::fs::write(&path, br#"{"categories": []}"#).unwrap();

        let source = FileSource::new(&path);
        let bytes = source.fetch().await.unwrap();
        assert_eq!(bytes, br#"{"categories": []}"#);
        assert!(source.location().ends_with("topics.json"));
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path().join("missing.json"));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, TopicError::IoError(_)));
        assert!(err.is_load_failure());
    }

    #[tokio::test]
    async fn test_http_source_non_success_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/topics.json");
            then.status(404);
        });

        let source = HttpSource::new(server.url("/topics.json"));
        let err = source.fetch().await.unwrap_err();
        mock.assert();
        assert!(matches!(err, TopicError::BadStatusError { status: 404 }));
    }

    #[tokio::test]
    async fn test_http_source_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/topics.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"categories": []}"#);
        });

        let source = HttpSource::with_timeout(server.url("/topics.json"), Duration::from_secs(5))
            .unwrap();
        let bytes = source.fetch().await.unwrap();
        assert_eq!(bytes, br#"{"categories": []}"#);
    }
}
