// lib.rs - 门户渲染层适配器：缓存响应头写入与 XSL 引用解析

pub mod core; // 核心基础设施层：错误、日志、HTTP 客户端
pub mod models;
pub mod services;
pub mod utils;

pub use models::*;
pub use services::*;

pub use crate::core::{build_http_client, init_logger, update_log_level, AppError, AppResult};
