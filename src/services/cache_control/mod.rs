// 缓存控制模块 - 缓存指令模型及其到 HTTP 响应头的映射

use hyper::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

mod header_setting;
mod output_handler;

pub use header_setting::HeaderSettingCacheControl;
pub use output_handler::ResourceOutputHandler;

/// 写入响应头失败
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("无效的响应头名称: {name}: {source}")]
    InvalidName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },

    #[error("无效的响应头值: {name}: {value:?}: {source}")]
    InvalidValue {
        name: String,
        value: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

/// 缓存指令
///
/// 描述一次响应的缓存意图：过期时间（秒）、公共/私有范围、校验令牌（ETag）
/// 以及是否复用已缓存内容。setter 返回 `Result`，以便装饰实现把响应头写入失败
/// 交给调用方。
pub trait CacheControl {
    /// 过期时间（秒），`<= 0` 表示没有显式 max-age
    fn expiration_time(&self) -> i32;

    fn set_expiration_time(&mut self, time: i32) -> Result<(), HeaderError>;

    fn is_public_scope(&self) -> bool;

    fn set_public_scope(&mut self, public_scope: bool) -> Result<(), HeaderError>;

    fn etag(&self) -> Option<&str>;

    fn set_etag(&mut self, token: &str) -> Result<(), HeaderError>;

    fn use_cached_content(&self) -> bool;

    fn set_use_cached_content(&mut self, use_cached_content: bool) -> Result<(), HeaderError>;
}

/// 纯内存的缓存指令实现，setter 永不失败
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultCacheControl {
    expiration_time: i32,
    public_scope: bool,
    etag: Option<String>,
    use_cached_content: bool,
}

impl DefaultCacheControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expiration(expiration_time: i32) -> Self {
        Self {
            expiration_time,
            ..Self::default()
        }
    }
}

impl CacheControl for DefaultCacheControl {
    fn expiration_time(&self) -> i32 {
        self.expiration_time
    }

    fn set_expiration_time(&mut self, time: i32) -> Result<(), HeaderError> {
        self.expiration_time = time;
        Ok(())
    }

    fn is_public_scope(&self) -> bool {
        self.public_scope
    }

    fn set_public_scope(&mut self, public_scope: bool) -> Result<(), HeaderError> {
        self.public_scope = public_scope;
        Ok(())
    }

    fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    fn set_etag(&mut self, token: &str) -> Result<(), HeaderError> {
        self.etag = Some(token.to_string());
        Ok(())
    }

    fn use_cached_content(&self) -> bool {
        self.use_cached_content
    }

    fn set_use_cached_content(&mut self, use_cached_content: bool) -> Result<(), HeaderError> {
        self.use_cached_content = use_cached_content;
        Ok(())
    }
}
