use crate::core::error::{AppError, AppResult};
use crate::models::config::{LogConfig, LogFormat, LogLevel, LogOutput};
use std::sync::OnceLock;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::{Layered, SubscriberExt},
    reload::{self, Handle},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// 全局日志级别 reload handle
static LOG_LEVEL_HANDLE: OnceLock<Handle<EnvFilter, Registry>> = OnceLock::new();

type FilteredRegistry = Layered<reload::Layer<EnvFilter, Registry>, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync + 'static>;

/// 初始化日志系统
///
/// 支持基于配置的日志输出，包括：
/// - 日志级别（trace/debug/info/warn/error）
/// - 输出格式（JSON/纯文本）
/// - 输出目标（控制台/文件/both）
///
/// 日志级别可以通过 `update_log_level` 动态调整，其余配置需要重启进程后生效。
pub fn init_logger(config: &LogConfig) -> AppResult<()> {
    let filter = create_env_filter(&config.level);
    let (filter_layer, reload_handle) = reload::Layer::new(filter);

    if LOG_LEVEL_HANDLE.set(reload_handle).is_err() {
        return Err(AppError::logger("日志系统已初始化，不能重复初始化"));
    }

    let layers: Vec<BoxedLayer> =
        match (&config.output, &config.format) {
            (LogOutput::Console, LogFormat::Text) => vec![create_console_text_layer()],
            (LogOutput::Console, LogFormat::Json) => vec![create_console_json_layer()],
            (LogOutput::File, format) => {
                vec![create_file_layer(config.file_path.as_deref(), *format)?]
            }
            (LogOutput::Both, LogFormat::Text) => vec![
                create_console_text_layer(),
                create_file_layer(config.file_path.as_deref(), LogFormat::Text)?,
            ],
            (LogOutput::Both, LogFormat::Json) => vec![
                create_console_json_layer(),
                create_file_layer(config.file_path.as_deref(), LogFormat::Json)?,
            ],
        };

    Registry::default()
        .with(filter_layer)
        .with(layers)
        .try_init()
        .map_err(|e| AppError::logger(format!("注册全局订阅者失败: {e}")))?;

    tracing::info!(
        level = config.level.as_str(),
        format = ?config.format,
        output = ?config.output,
        file_path = ?config.file_path,
        "日志系统初始化完成"
    );

    Ok(())
}

/// 创建环境过滤器
fn create_env_filter(level: &LogLevel) -> EnvFilter {
    // RUST_LOG 优先，例如 RUST_LOG=portal_adapters=trace,reqwest=warn
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level))
}

fn default_filter(level: &LogLevel) -> EnvFilter {
    EnvFilter::new(default_directives(level))
}

fn default_directives(level: &LogLevel) -> String {
    format!(
        "portal_adapters={},portal_resolve={},hyper=warn,reqwest=warn,h2=warn,tokio=warn",
        level.as_str(),
        level.as_str()
    )
}

fn create_console_text_layer<S>() -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    // stdout 留给资源内容输出，日志统一写 stderr
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(cfg!(debug_assertions))
        .with_thread_ids(false)
        .with_ansi(true)
        .with_span_events(if cfg!(debug_assertions) {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        })
        .boxed()
}

fn create_console_json_layer<S>() -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(cfg!(debug_assertions))
        .with_thread_ids(false)
        .with_ansi(false)
        .boxed()
}

/// 创建文件输出层（按天滚动）
fn create_file_layer<S>(
    file_path: Option<&str>,
    format: LogFormat,
) -> AppResult<Box<dyn Layer<S> + Send + Sync + 'static>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let log_dir = get_log_dir(file_path)?;
    let file_appender = rolling::daily(log_dir, "portal-adapters");
    let (non_blocking, guard) = non_blocking(file_appender);

    // guard 需要存活到进程结束
    Box::leak(Box::new(guard));

    let layer = match format {
        LogFormat::Text => fmt::layer()
            .with_writer(non_blocking)
            .with_target(cfg!(debug_assertions))
            .with_thread_ids(false)
            .with_ansi(false)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_thread_ids(true)
            .with_ansi(false)
            .boxed(),
    };

    Ok(layer)
}

/// 获取日志目录
fn get_log_dir(file_path: Option<&str>) -> AppResult<std::path::PathBuf> {
    let dir = match file_path {
        Some(path) => std::path::PathBuf::from(path),
        None => dirs::home_dir()
            .ok_or_else(|| AppError::logger("无法获取用户主目录"))?
            .join(".portal-adapters")
            .join("logs"),
    };

    std::fs::create_dir_all(&dir).map_err(|e| {
        AppError::logger(format!("创建日志目录失败: {}: {e}", dir.display()))
    })?;
    Ok(dir)
}

/// 动态更新日志级别（热重载）
pub fn update_log_level(new_level: LogLevel) -> AppResult<()> {
    let handle = LOG_LEVEL_HANDLE
        .get()
        .ok_or_else(|| AppError::logger("日志系统未初始化"))?;

    handle
        .reload(create_env_filter(&new_level))
        .map_err(|e| AppError::logger(format!("重载日志级别失败: {e}")))?;

    tracing::info!(new_level = new_level.as_str(), "日志级别已动态更新");
    Ok(())
}
