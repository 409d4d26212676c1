// URL 资源：file / http / https

use crate::services::xml::error::ResourceError;
use crate::services::xml::resource::{Resource, ResourceStream};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::Client;
use tokio_util::io::StreamReader;
use url::Url;

/// 以 URL 定位的资源
///
/// `file:` 直接读磁盘，`http:`/`https:` 通过共享的 reqwest 客户端流式读取。
#[derive(Debug, Clone)]
pub struct UrlResource {
    url: Url,
    client: Client,
}

impl UrlResource {
    pub fn new(url: Url, client: Client) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn open_remote(&self) -> Result<ResourceStream, ResourceError> {
        let http_error = |source| ResourceError::Http {
            resource: self.description(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(http_error)?;

        tracing::trace!(url = %self.url, status = %response.status(), "远程资源响应");

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        Ok(Box::pin(StreamReader::new(stream)))
    }

    fn file_path(&self) -> Result<std::path::PathBuf, ResourceError> {
        self.url.to_file_path().map_err(|()| {
            ResourceError::io(
                self.description(),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "无效的 file URL"),
            )
        })
    }
}

#[async_trait]
impl Resource for UrlResource {
    fn description(&self) -> String {
        format!("URL [{}]", self.url)
    }

    fn create_relative(&self, relative_path: &str) -> Result<Box<dyn Resource>, ResourceError> {
        let relative = relative_path.strip_prefix('/').unwrap_or(relative_path);
        let url = self
            .url
            .join(relative)
            .map_err(|source| ResourceError::InvalidRelative {
                base: self.description(),
                relative: relative_path.to_string(),
                source,
            })?;
        Ok(Box::new(UrlResource::new(url, self.client.clone())))
    }

    async fn exists(&self) -> bool {
        match self.url.scheme() {
            "file" => match self.file_path() {
                Ok(path) => tokio::fs::metadata(path)
                    .await
                    .map(|metadata| metadata.is_file())
                    .unwrap_or(false),
                Err(_) => false,
            },
            "http" | "https" => self
                .client
                .head(self.url.clone())
                .send()
                .await
                .map(|response| response.status().is_success())
                .unwrap_or(false),
            _ => false,
        }
    }

    async fn open_stream(&self) -> Result<ResourceStream, ResourceError> {
        match self.url.scheme() {
            "file" => {
                let path = self.file_path()?;
                let file = tokio::fs::File::open(&path)
                    .await
                    .map_err(|e| ResourceError::io(self.description(), e))?;
                Ok(Box::pin(file))
            }
            "http" | "https" => self.open_remote().await,
            other => Err(ResourceError::UnsupportedScheme(other.to_string())),
        }
    }
}
