// 文件系统资源

use crate::services::xml::error::ResourceError;
use crate::services::xml::resource::{Resource, ResourceStream};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// 以文件路径定位的资源
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Resource for FileResource {
    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }

    fn create_relative(&self, relative_path: &str) -> Result<Box<dyn Resource>, ResourceError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new(""));
        let relative = relative_path.trim_start_matches('/');
        Ok(Box::new(FileResource::new(parent.join(relative))))
    }

    async fn exists(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    async fn open_stream(&self) -> Result<ResourceStream, ResourceError> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| ResourceError::io(self.description(), e))?;
        Ok(Box::pin(file))
    }
}
