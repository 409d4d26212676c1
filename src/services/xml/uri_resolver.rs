// 基于资源加载器的 XSL 引用解析器

use super::error::TransformError;
use super::resource::{Resource, ResourceLoader};
use super::stream_source::StreamSource;
use async_trait::async_trait;
use std::sync::Arc;

/// XSL 引用解析器
///
/// 对应样式表中 `xsl:include` / `xsl:import` / `document()` 的 `href`，
/// `base` 为引用所在文档的 system id。
#[async_trait]
pub trait UriResolver: Send + Sync {
    async fn resolve(&self, href: &str, base: Option<&str>)
        -> Result<StreamSource, TransformError>;
}

/// 通过 `ResourceLoader` 解析引用
///
/// - `base` 非空：先把 `base` 解析为资源，再基于它构造 `href` 的相对资源
/// - `base` 为空或缺失：直接解析 `href`
///
/// 返回的输入源 system id 原样回写调用方传入的 `base`（即使实际资源是相对它解析出来的）。
#[derive(Clone)]
pub struct ResourceLoaderUriResolver {
    resource_loader: Arc<dyn ResourceLoader>,
}

impl ResourceLoaderUriResolver {
    pub fn new(resource_loader: Arc<dyn ResourceLoader>) -> Self {
        Self { resource_loader }
    }

    fn resolve_resource(
        &self,
        href: &str,
        base: Option<&str>,
    ) -> Result<Box<dyn Resource>, TransformError> {
        match base.filter(|base| !base.is_empty()) {
            Some(base) => {
                let base_resource = self.resource_loader.get_resource(base);
                let resolved = base_resource.create_relative(href).map_err(|source| {
                    TransformError::RelativeResolution {
                        href: href.to_string(),
                        base: base_resource.description(),
                        source,
                    }
                })?;

                tracing::debug!(
                    resource = %resolved,
                    href,
                    base = %base_resource,
                    "已创建相对资源"
                );
                Ok(resolved)
            }
            None => {
                let resolved = self.resource_loader.get_resource(href);
                tracing::debug!(resource = %resolved, href, "已创建资源");
                Ok(resolved)
            }
        }
    }
}

#[async_trait]
impl UriResolver for ResourceLoaderUriResolver {
    async fn resolve(
        &self,
        href: &str,
        base: Option<&str>,
    ) -> Result<StreamSource, TransformError> {
        let resolved = self.resolve_resource(href, base)?;

        // exists() 对远程资源会额外发起 HEAD 请求，只在 debug 级别下检查
        if tracing::enabled!(tracing::Level::DEBUG) {
            let exists = resolved.exists().await;
            tracing::debug!(resource = %resolved, exists, "打开资源流");
        }

        let stream = resolved
            .open_stream()
            .await
            .map_err(|source| TransformError::StreamOpen {
                resource: resolved.description(),
                href: href.to_string(),
                base: base.map(str::to_string),
                source,
            })?;

        let mut source = StreamSource::new(stream);
        source.set_system_id(base.map(str::to_string));
        Ok(source)
    }
}
