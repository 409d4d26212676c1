//! 应用级错误类型
//!
//! 各服务模块定义自己的错误枚举（`HeaderError`、`ResourceError`、`TransformError`），
//! 这里的 `AppError` 汇总配置、日志、HTTP 客户端等基础设施错误，供二进制入口使用。

use std::path::PathBuf;
use thiserror::Error;

use crate::services::xml::TransformError;

/// 应用级统一错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 读取配置文件失败
    #[error("读取配置文件失败: {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("配置文件解析失败: {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// HTTP 客户端构建失败
    #[error("HTTP 客户端构建失败: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// 无法识别的日志级别
    #[error("无效的日志级别: {0}（可选 trace/debug/info/warn/error）")]
    InvalidLogLevel(String),

    /// 日志系统错误
    #[error("日志系统错误: {reason}")]
    Logger { reason: String },

    /// 资源解析失败
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn logger(reason: impl Into<String>) -> Self {
        Self::Logger {
            reason: reason.into(),
        }
    }
}
