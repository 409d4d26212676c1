// 写响应头的缓存指令装饰器

use super::{CacheControl, HeaderError, ResourceOutputHandler};
use hyper::header::{CACHE_CONTROL, ETAG, EXPIRES, LAST_MODIFIED};
use std::time::{Duration, SystemTime};

/// 写响应头的缓存指令装饰器
///
/// 对过期时间、范围和 ETag 的每次修改都会先转发给被包装的指令，再立即写出对应的
/// 响应头：
/// - `Last-Modified`：构造时记录的时间戳，在整个响应生命周期内不变
/// - `Cache-Control`：`public` 或 `private`；过期时间大于 0 时追加 `max-age=<秒>`
/// - `Expires`：过期时间大于 0 时为当前时间加过期秒数
/// - `ETag`：设置的令牌原样写出（包括空字符串）
///
/// 读取操作直接透传给被包装的指令，不产生任何副作用。
pub struct HeaderSettingCacheControl<C, O> {
    cache_control: C,
    output: O,
    last_modified: SystemTime,
}

impl<C, O> HeaderSettingCacheControl<C, O>
where
    C: CacheControl,
    O: ResourceOutputHandler,
{
    pub fn new(cache_control: C, output: O) -> Self {
        Self {
            cache_control,
            output,
            last_modified: SystemTime::now(),
        }
    }

    /// 被包装的缓存指令
    pub fn delegate(&self) -> &C {
        &self.cache_control
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// 构造时记录的 Last-Modified 时间
    pub fn last_modified(&self) -> SystemTime {
        self.last_modified
    }

    pub fn into_parts(self) -> (C, O) {
        (self.cache_control, self.output)
    }

    fn set_cache_headers(&mut self, time: i32, public_scope: bool) -> Result<(), HeaderError> {
        self.output
            .set_date_header(LAST_MODIFIED.as_str(), self.last_modified)?;

        let scope = if public_scope { "public" } else { "private" };
        self.output.set_header(CACHE_CONTROL.as_str(), scope)?;

        if time > 0 {
            let expires = SystemTime::now() + Duration::from_secs(u64::from(time.unsigned_abs()));
            self.output.set_date_header(EXPIRES.as_str(), expires)?;
            self.output
                .add_header(CACHE_CONTROL.as_str(), &format!("max-age={time}"))?;
        }

        tracing::trace!(
            expiration_time = time,
            public_scope,
            "已写入缓存响应头"
        );

        Ok(())
    }
}

impl<C, O> CacheControl for HeaderSettingCacheControl<C, O>
where
    C: CacheControl,
    O: ResourceOutputHandler,
{
    fn expiration_time(&self) -> i32 {
        self.cache_control.expiration_time()
    }

    fn set_expiration_time(&mut self, time: i32) -> Result<(), HeaderError> {
        self.cache_control.set_expiration_time(time)?;
        let public_scope = self.is_public_scope();
        self.set_cache_headers(time, public_scope)
    }

    fn is_public_scope(&self) -> bool {
        self.cache_control.is_public_scope()
    }

    fn set_public_scope(&mut self, public_scope: bool) -> Result<(), HeaderError> {
        self.cache_control.set_public_scope(public_scope)?;
        let time = self.expiration_time();
        self.set_cache_headers(time, public_scope)
    }

    fn etag(&self) -> Option<&str> {
        self.cache_control.etag()
    }

    fn set_etag(&mut self, token: &str) -> Result<(), HeaderError> {
        self.cache_control.set_etag(token)?;
        self.output.set_header(ETAG.as_str(), token)
    }

    fn use_cached_content(&self) -> bool {
        self.cache_control.use_cached_content()
    }

    fn set_use_cached_content(&mut self, use_cached_content: bool) -> Result<(), HeaderError> {
        self.cache_control.set_use_cached_content(use_cached_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cache_control::DefaultCacheControl;
    use hyper::HeaderMap;
    use std::time::UNIX_EPOCH;

    /// 记录每次写入调用的输出端
    #[derive(Default)]
    struct RecordingOutput {
        calls: Vec<(&'static str, String, String)>,
    }

    impl ResourceOutputHandler for RecordingOutput {
        fn set_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
            self.calls.push(("set", name.to_string(), value.to_string()));
            Ok(())
        }

        fn add_header(&mut self, name: &str, value: &str) -> Result<(), HeaderError> {
            self.calls.push(("add", name.to_string(), value.to_string()));
            Ok(())
        }
    }

    fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
        headers
            .get_all(name)
            .iter()
            .map(|value| value.to_str().unwrap().to_string())
            .collect()
    }

    fn epoch_secs(time: SystemTime) -> u64 {
        time.duration_since(UNIX_EPOCH).unwrap().as_secs()
    }

    #[test]
    fn test_positive_expiration_sets_max_age_and_expires() {
        for seconds in [1, 30, 300, 86_400] {
            let mut headers = HeaderMap::new();
            let mut control =
                HeaderSettingCacheControl::new(DefaultCacheControl::new(), &mut headers);

            let before = epoch_secs(SystemTime::now());
            control.set_expiration_time(seconds).unwrap();
            let after = epoch_secs(SystemTime::now());
            assert_eq!(control.expiration_time(), seconds);
            drop(control);

            assert_eq!(
                header_values(&headers, "cache-control"),
                vec!["private".to_string(), format!("max-age={seconds}")]
            );

            let expires = headers.get("expires").unwrap().to_str().unwrap();
            let expires = epoch_secs(httpdate::parse_http_date(expires).unwrap());
            let seconds = u64::try_from(seconds).unwrap();
            assert!(expires >= before + seconds && expires <= after + seconds);
        }
    }

    #[test]
    fn test_non_positive_expiration_has_no_expiry() {
        for seconds in [0, -1, -3600] {
            let mut headers = HeaderMap::new();
            let mut control =
                HeaderSettingCacheControl::new(DefaultCacheControl::new(), &mut headers);
            control.set_expiration_time(seconds).unwrap();
            drop(control);

            assert!(headers.get("expires").is_none());
            assert_eq!(header_values(&headers, "cache-control"), vec!["private"]);
            assert!(headers.get("last-modified").is_some());
        }
    }

    #[test]
    fn test_last_modified_is_construction_time() {
        let control = HeaderSettingCacheControl::new(
            DefaultCacheControl::new(),
            RecordingOutput::default(),
        );
        let expected = httpdate::fmt_http_date(control.last_modified());
        let mut control = control;

        control.set_expiration_time(10).unwrap();
        control.set_public_scope(true).unwrap();

        let last_modified: Vec<_> = control
            .output()
            .calls
            .iter()
            .filter(|(_, name, _)| name == "last-modified")
            .map(|(_, _, value)| value.clone())
            .collect();
        assert_eq!(last_modified, vec![expected.clone(), expected]);
    }

    #[test]
    fn test_scope_reflects_last_value_set() {
        let mut headers = HeaderMap::new();
        let mut control = HeaderSettingCacheControl::new(DefaultCacheControl::new(), &mut headers);

        control.set_public_scope(true).unwrap();
        control.set_expiration_time(60).unwrap();
        control.set_public_scope(false).unwrap();
        assert!(!control.is_public_scope());
        drop(control);

        assert_eq!(
            header_values(&headers, "cache-control"),
            vec!["private", "max-age=60"]
        );
    }

    #[test]
    fn test_expiration_change_keeps_public_scope() {
        let mut headers = HeaderMap::new();
        let mut control = HeaderSettingCacheControl::new(DefaultCacheControl::new(), &mut headers);

        control.set_public_scope(true).unwrap();
        control.set_expiration_time(120).unwrap();
        control.set_expiration_time(0).unwrap();
        drop(control);

        assert_eq!(header_values(&headers, "cache-control"), vec!["public"]);
    }

    #[test]
    fn test_public_scope_uses_delegate_expiration() {
        let mut headers = HeaderMap::new();
        let mut control =
            HeaderSettingCacheControl::new(DefaultCacheControl::with_expiration(45), &mut headers);

        control.set_public_scope(true).unwrap();
        drop(control);

        assert_eq!(
            header_values(&headers, "cache-control"),
            vec!["public", "max-age=45"]
        );
        assert!(headers.get("expires").is_some());
    }

    #[test]
    fn test_etag_forwarded_and_emitted() {
        for token in ["\"abc123\"", "W/\"weak\"", ""] {
            let mut control = HeaderSettingCacheControl::new(
                DefaultCacheControl::new(),
                RecordingOutput::default(),
            );
            control.set_etag(token).unwrap();

            assert_eq!(control.etag(), Some(token));
            assert_eq!(control.delegate().etag(), Some(token));
            assert_eq!(
                control.output().calls,
                vec![("set", "etag".to_string(), token.to_string())]
            );
        }
    }

    #[test]
    fn test_use_cached_content_writes_nothing() {
        let mut control = HeaderSettingCacheControl::new(
            DefaultCacheControl::new(),
            RecordingOutput::default(),
        );
        control.set_use_cached_content(true).unwrap();

        assert!(control.use_cached_content());
        let (delegate, output) = control.into_parts();
        assert!(delegate.use_cached_content());
        assert!(output.calls.is_empty());
    }

    #[test]
    fn test_reads_have_no_side_effects() {
        let control = HeaderSettingCacheControl::new(
            DefaultCacheControl::with_expiration(5),
            RecordingOutput::default(),
        );

        assert_eq!(control.expiration_time(), 5);
        assert!(!control.is_public_scope());
        assert_eq!(control.etag(), None);
        assert!(!control.use_cached_content());
        assert!(control.output().calls.is_empty());
    }

    #[test]
    fn test_invalid_etag_surfaces_error() {
        let mut headers = HeaderMap::new();
        let mut control = HeaderSettingCacheControl::new(DefaultCacheControl::new(), &mut headers);

        let err = control.set_etag("line\r\nbreak").unwrap_err();
        assert!(matches!(err, HeaderError::InvalidValue { .. }));
        // 被包装的指令已先行更新
        assert_eq!(control.etag(), Some("line\r\nbreak"));
    }

    #[test]
    fn test_emission_order() {
        let mut control = HeaderSettingCacheControl::new(
            DefaultCacheControl::new(),
            RecordingOutput::default(),
        );
        control.set_expiration_time(10).unwrap();

        let calls: Vec<_> = control
            .output()
            .calls
            .iter()
            .map(|(op, name, _)| (*op, name.as_str()))
            .collect();
        assert_eq!(
            calls,
            vec![
                ("set", "last-modified"),
                ("set", "cache-control"),
                ("set", "expires"),
                ("add", "cache-control"),
            ]
        );
    }
}
