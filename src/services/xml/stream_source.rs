// 转换输入源：字节流 + system id

use super::resource::ResourceStream;
use std::fmt;
use tokio::io::AsyncReadExt;

/// XSL 转换的输入源
///
/// system id 供转换过程中继续解析相对引用使用。
pub struct StreamSource {
    stream: ResourceStream,
    system_id: Option<String>,
}

impl StreamSource {
    pub fn new(stream: ResourceStream) -> Self {
        Self {
            stream,
            system_id: None,
        }
    }

    pub fn system_id(&self) -> Option<&str> {
        self.system_id.as_deref()
    }

    pub fn set_system_id(&mut self, system_id: Option<String>) {
        self.system_id = system_id;
    }

    pub fn stream_mut(&mut self) -> &mut ResourceStream {
        &mut self.stream
    }

    pub fn into_stream(self) -> ResourceStream {
        self.stream
    }

    /// 读取剩余全部内容
    pub async fn read_to_end(&mut self) -> std::io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.stream.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSource")
            .field("system_id", &self.system_id)
            .finish_non_exhaustive()
    }
}
