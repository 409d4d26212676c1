//! 资源加载器实现
//!
//! - `file`: 文件系统路径
//! - `url_resource`: file / http / https URL
//! - `embedded`: `classpath:` 前缀的内嵌资源
//!
//! `DefaultResourceLoader` 按位置字符串的形式分派到上述三种资源。

mod embedded;
mod file;
mod url_resource;

pub use embedded::{EmbeddedResource, EmbeddedResources, CLASSPATH_PREFIX};
pub use file::FileResource;
pub use url_resource::UrlResource;

use super::resource::{Resource, ResourceLoader};
use crate::core::{build_http_client, AppError, AppResult};
use crate::models::LoaderConfig;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 默认资源加载器
///
/// 位置解析规则：
/// 1. `classpath:` 开头 → 内嵌资源
/// 2. 可解析为带协议 URL（协议长度大于 1，排除 Windows 盘符）→ URL 资源
/// 3. 其余视为文件路径，相对路径拼接到根目录（若已配置）
#[derive(Debug, Clone)]
pub struct DefaultResourceLoader {
    root_dir: Option<PathBuf>,
    client: Client,
    embedded: Arc<EmbeddedResources>,
}

impl DefaultResourceLoader {
    pub fn new(client: Client) -> Self {
        Self {
            root_dir: None,
            client,
            embedded: Arc::new(EmbeddedResources::default()),
        }
    }

    /// 按配置构建（根目录 + HTTP 客户端 + 内嵌资源目录）
    pub fn from_config(config: &LoaderConfig) -> AppResult<Self> {
        let client = build_http_client(config)?;
        let mut loader = Self::new(client);
        loader.root_dir = config.root_dir.clone();

        if let Some(dir) = &config.embedded_dir {
            let embedded =
                EmbeddedResources::from_dir(dir).map_err(|source| AppError::ConfigRead {
                    path: dir.clone(),
                    source,
                })?;
            loader = loader.with_embedded(embedded);
        }
        Ok(loader)
    }

    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    pub fn with_embedded(mut self, embedded: EmbeddedResources) -> Self {
        self.embedded = Arc::new(embedded);
        self
    }

    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    fn file_path(&self, location: &str) -> PathBuf {
        let path = Path::new(location);
        match &self.root_dir {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ResourceLoader for DefaultResourceLoader {
    fn get_resource(&self, location: &str) -> Box<dyn Resource> {
        if let Some(path) = location.strip_prefix(CLASSPATH_PREFIX) {
            return Box::new(EmbeddedResource::new(path, Arc::clone(&self.embedded)));
        }

        match url::Url::parse(location) {
            Ok(url) if url.scheme().len() > 1 => Box::new(UrlResource::new(url, self.client.clone())),
            _ => Box::new(FileResource::new(self.file_path(location))),
        }
    }
}
