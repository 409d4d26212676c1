// 内嵌资源：随程序打包、以 `classpath:` 前缀访问的样式表

use crate::services::xml::error::ResourceError;
use crate::services::xml::resource::{Resource, ResourceStream};
use crate::utils::path::{apply_relative_path, clean_path};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// 内嵌资源前缀
pub const CLASSPATH_PREFIX: &str = "classpath:";

/// 内嵌资源集合，键为规范化后的相对路径
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: HashMap<String, Bytes>,
}

impl EmbeddedResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个资源（路径会被规范化，忽略开头的 `/`）
    pub fn with(mut self, path: &str, content: impl Into<Bytes>) -> Self {
        self.insert(path, content);
        self
    }

    /// 递归载入目录下的全部文件，键为相对该目录的 `/` 分隔路径
    pub fn from_dir(dir: &Path) -> std::io::Result<Self> {
        let mut resources = Self::new();
        resources.load_dir(dir, "")?;
        tracing::debug!(dir = %dir.display(), count = resources.len(), "已载入内嵌资源");
        Ok(resources)
    }

    fn load_dir(&mut self, dir: &Path, prefix: &str) -> std::io::Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let key = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };

            if entry.file_type()?.is_dir() {
                self.load_dir(&entry.path(), &key)?;
            } else {
                self.insert(&key, std::fs::read(entry.path())?);
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, path: &str, content: impl Into<Bytes>) {
        self.entries.insert(normalize(path), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&Bytes> {
        self.entries.get(&normalize(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(path: &str) -> String {
    clean_path(path).trim_start_matches('/').to_string()
}

/// 内嵌资源句柄
#[derive(Debug, Clone)]
pub struct EmbeddedResource {
    path: String,
    bundle: Arc<EmbeddedResources>,
}

impl EmbeddedResource {
    pub fn new(path: &str, bundle: Arc<EmbeddedResources>) -> Self {
        Self {
            path: normalize(path),
            bundle,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl Resource for EmbeddedResource {
    fn description(&self) -> String {
        format!("embedded resource [{}{}]", CLASSPATH_PREFIX, self.path)
    }

    fn create_relative(&self, relative_path: &str) -> Result<Box<dyn Resource>, ResourceError> {
        let path = apply_relative_path(&self.path, relative_path);
        Ok(Box::new(EmbeddedResource::new(
            &path,
            Arc::clone(&self.bundle),
        )))
    }

    async fn exists(&self) -> bool {
        self.bundle.get(&self.path).is_some()
    }

    async fn open_stream(&self) -> Result<ResourceStream, ResourceError> {
        let content = self
            .bundle
            .get(&self.path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(self.description()))?;
        Ok(Box::pin(Cursor::new(content)))
    }
}
