// portal-resolve：按 href + base 解析样式表引用并输出到 stdout
//
// 用法: portal-resolve <href> [base]
// classpath: 资源来自配置项 loader.embedded_dir；日志级别可用 PORTAL_ADAPTERS_LOG_LEVEL 覆盖

use anyhow::Context;
use portal_adapters::utils::config::read_config;
use portal_adapters::{init_logger, DefaultResourceLoader, ResourceLoaderUriResolver, UriResolver};
use std::sync::Arc;

const USAGE: &str = "用法: portal-resolve <href> [base]\n\
    classpath: 资源需在配置文件中设置 [loader] embedded_dir\n\
    环境变量: PORTAL_ADAPTERS_CONFIG (配置文件路径), PORTAL_ADAPTERS_LOG_LEVEL (日志级别)";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("错误: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let href = args.next().context(USAGE)?;
    let base = args.next();

    let config = read_config().context("加载配置失败")?;
    init_logger(&config.log).context("初始化日志系统失败")?;

    let loader = DefaultResourceLoader::from_config(&config.loader)?;
    let resolver = ResourceLoaderUriResolver::new(Arc::new(loader));

    tracing::info!(href = %href, base = ?base, "开始解析资源引用");

    let source = resolver.resolve(&href, base.as_deref()).await?;
    tracing::debug!(system_id = ?source.system_id(), "资源解析完成");

    let mut stream = source.into_stream();
    let mut stdout = tokio::io::stdout();
    let copied = tokio::io::copy(&mut stream, &mut stdout)
        .await
        .context("写出资源内容失败")?;
    tokio::io::AsyncWriteExt::flush(&mut stdout).await?;

    tracing::info!(bytes = copied, "资源内容已输出");
    Ok(())
}
