use crate::core::error::{AppError, AppResult};
use crate::models::{AppConfig, LogLevel};
use std::fs;
use std::path::{Path, PathBuf};

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV_VAR: &str = "PORTAL_ADAPTERS_CONFIG";

/// 覆盖日志级别的环境变量
pub const LOG_LEVEL_ENV_VAR: &str = "PORTAL_ADAPTERS_LOG_LEVEL";

/// 配置文件路径
///
/// 优先使用 `PORTAL_ADAPTERS_CONFIG`，否则为 `<config_dir>/portal-adapters/config.toml`。
/// 无法确定配置目录时退回当前目录下的 `portal-adapters.toml`。
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .map(|dir| dir.join("portal-adapters").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("portal-adapters.toml"))
}

/// 读取指定路径的配置（文件不存在时返回默认配置）
pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "配置文件不存在，使用默认配置");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// 用外部传入的级别字符串覆盖配置中的日志级别
///
/// `None` 或空白字符串不做修改；无法识别的级别返回 `AppError::InvalidLogLevel`。
pub fn apply_log_level_override(config: &mut AppConfig, value: Option<&str>) -> AppResult<()> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(());
    };

    config.log.level =
        LogLevel::parse(value).ok_or_else(|| AppError::InvalidLogLevel(value.to_string()))?;
    Ok(())
}

/// 读取全局配置
///
/// `PORTAL_ADAPTERS_LOG_LEVEL` 设置时覆盖配置文件中的 `log.level`。
pub fn read_config() -> AppResult<AppConfig> {
    let mut config = load_config(&config_path())?;
    let level = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    apply_log_level_override(&mut config, level.as_deref())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_returns_default() {
        let config = load_config(Path::new("/nonexistent/portal-adapters.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[log]\nlevel = \"trace\"\n\n[loader]\nhttp_timeout_secs = 3")?;
        file.flush()?;

        let config = load_config(file.path())?;
        assert_eq!(config.log.level, LogLevel::Trace);
        assert_eq!(config.loader.http_timeout_secs, 3);
        Ok(())
    }

    #[test]
    fn test_invalid_toml() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[log\nlevel = ")?;
        file.flush()?;

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
        Ok(())
    }

    #[test]
    fn test_log_level_override() {
        let mut config = AppConfig::default();

        apply_log_level_override(&mut config, Some("DEBUG")).unwrap();
        assert_eq!(config.log.level, LogLevel::Debug);

        apply_log_level_override(&mut config, Some(" warn ")).unwrap();
        assert_eq!(config.log.level, LogLevel::Warn);

        // 未设置或空值保留原级别
        apply_log_level_override(&mut config, None).unwrap();
        apply_log_level_override(&mut config, Some("  ")).unwrap();
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_log_level_override() {
        let mut config = AppConfig::default();

        let err = apply_log_level_override(&mut config, Some("verbose")).unwrap_err();
        assert!(matches!(&err, AppError::InvalidLogLevel(level) if level == "verbose"));
        assert!(err.to_string().contains("verbose"));
        assert_eq!(config.log.level, LogLevel::Info);
    }
}
