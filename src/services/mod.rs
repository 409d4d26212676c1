// 服务层模块
//
// - cache_control: 缓存指令与缓存响应头写入
// - xml: XSL 引用解析（资源加载器 + URI 解析器）

pub mod cache_control;
pub mod xml;

pub use cache_control::{
    CacheControl, DefaultCacheControl, HeaderError, HeaderSettingCacheControl,
    ResourceOutputHandler,
};
pub use xml::{
    DefaultResourceLoader, EmbeddedResources, Resource, ResourceError, ResourceLoader,
    ResourceLoaderUriResolver, StreamSource, TransformError, UriResolver,
};
