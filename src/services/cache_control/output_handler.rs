// 响应头输出端

use super::HeaderError;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Response};
use std::time::SystemTime;

/// 响应头输出端
///
/// 缓存指令装饰器只通过这三个操作写响应头，具体落到哪里（`HeaderMap`、
/// 正在构建的 `Response`、测试用的记录器）由实现决定。
pub trait ResourceOutputHandler {
    /// 设置响应头，替换同名的所有已有值
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError>;

    /// 追加响应头，保留同名的已有值
    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError>;

    /// 以 HTTP 日期格式（IMF-fixdate）设置响应头
    fn set_date_header(&mut self, name: &str, date: SystemTime) -> Result<(), HeaderError> {
        self.set_header(name, &httpdate::fmt_http_date(date))
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), HeaderError> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|source| HeaderError::InvalidName {
            name: name.to_string(),
            source,
        })?;
    let header_value = HeaderValue::from_str(value).map_err(|source| HeaderError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        source,
    })?;
    Ok((header_name, header_value))
}

impl ResourceOutputHandler for HeaderMap {
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let (name, value) = parse_header(name, value)?;
        self.insert(name, value);
        Ok(())
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        let (name, value) = parse_header(name, value)?;
        self.append(name, value);
        Ok(())
    }
}

impl<B> ResourceOutputHandler for Response<B> {
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        self.headers_mut().set_header(name, value)
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        self.headers_mut().add_header(name, value)
    }
}

impl<T: ResourceOutputHandler + ?Sized> ResourceOutputHandler for &mut T {
    fn set_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        (**self).set_header(name, value)
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
        (**self).add_header(name, value)
    }

    fn set_date_header(&mut self, name: &str, date: SystemTime) -> Result<(), HeaderError> {
        (**self).set_date_header(name, date)
    }
}
