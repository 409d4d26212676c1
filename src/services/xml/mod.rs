//! XSL 引用解析
//!
//! - `resource`: 资源句柄与资源加载器抽象
//! - `loaders`: 文件、URL、内嵌三类资源及默认加载器
//! - `uri_resolver`: 把 `href` + `base` 解析为转换输入源
//! - `error`: 资源错误与转换层错误

pub mod error;
pub mod loaders;
pub mod resource;
pub mod stream_source;
pub mod uri_resolver;

#[cfg(test)]
mod test_server;

pub use error::{ResourceError, TransformError};
pub use loaders::{
    DefaultResourceLoader, EmbeddedResource, EmbeddedResources, FileResource, UrlResource,
};
pub use resource::{Resource, ResourceLoader, ResourceStream};
pub use stream_source::StreamSource;
pub use uri_resolver::{ResourceLoaderUriResolver, UriResolver};
