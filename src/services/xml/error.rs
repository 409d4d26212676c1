//! 资源加载与引用解析的错误类型

use thiserror::Error;

/// 资源加载错误
#[derive(Error, Debug)]
pub enum ResourceError {
    /// 文件 I/O 错误
    #[error("读取资源失败: {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(String),

    /// 相对路径无法基于当前资源构造
    #[error("无法基于 {base} 解析相对路径 '{relative}': {source}")]
    InvalidRelative {
        base: String,
        relative: String,
        #[source]
        source: url::ParseError,
    },

    /// 远程资源请求失败
    #[error("请求远程资源失败: {resource}: {source}")]
    Http {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("不支持的 URL 协议: {0}")]
    UnsupportedScheme(String),
}

impl ResourceError {
    pub fn io(resource: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            resource: resource.into(),
            source,
        }
    }
}

/// 引用解析错误（转换层错误）
///
/// 两种情况都立即返回给调用方，不重试、不回退到其他资源。
#[derive(Error, Debug)]
pub enum TransformError {
    /// `href` 无法基于 `base` 构造出资源
    #[error("无法找到 '{href}'，相对于: {base}")]
    RelativeResolution {
        href: String,
        /// 解析后的 base 资源描述
        base: String,
        #[source]
        source: ResourceError,
    },

    /// 解析出的资源无法打开字节流
    #[error("无法打开资源流: {resource} (href: '{href}', base: {base:?})")]
    StreamOpen {
        resource: String,
        href: String,
        base: Option<String>,
        #[source]
        source: ResourceError,
    },
}
