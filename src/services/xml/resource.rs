// 资源抽象：可以绝对定位或相对另一资源定位、能产出字节流的资源句柄

use super::error::ResourceError;
use async_trait::async_trait;
use std::fmt;
use std::pin::Pin;
use tokio::io::AsyncRead;

/// 资源字节流
pub type ResourceStream = Pin<Box<dyn AsyncRead + Send>>;

/// 资源句柄
#[async_trait]
pub trait Resource: Send + Sync {
    /// 人类可读的资源描述，用于日志和错误信息
    fn description(&self) -> String;

    /// 基于当前资源构造相对资源
    ///
    /// 相对路径作用于当前资源所在的“目录”。
    fn create_relative(&self, relative_path: &str) -> Result<Box<dyn Resource>, ResourceError>;

    /// 资源当前是否可读
    async fn exists(&self) -> bool;

    /// 打开资源字节流，由调用方负责消费和释放
    async fn open_stream(&self) -> Result<ResourceStream, ResourceError>;
}

impl fmt::Display for dyn Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl fmt::Debug for dyn Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// 资源加载器：把位置字符串解析为资源句柄
///
/// 解析本身不访问资源，不存在的资源在 `open_stream` 时才会报错。
pub trait ResourceLoader: Send + Sync {
    fn get_resource(&self, location: &str) -> Box<dyn Resource>;
}
