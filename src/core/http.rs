use crate::core::error::AppResult;
use crate::models::LoaderConfig;
use reqwest::Client;

const USER_AGENT: &str = concat!("portal-adapters/", env!("CARGO_PKG_VERSION"));

/// 构建远程资源加载使用的 HTTP 客户端
///
/// # 参数
/// - `config`: 资源加载配置（超时、User-Agent）
///
/// # 返回
/// - 配置好的 reqwest::Client
pub fn build_http_client(config: &LoaderConfig) -> AppResult<Client> {
    let user_agent = config.user_agent.as_deref().unwrap_or(USER_AGENT);

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;

    Ok(client)
}
