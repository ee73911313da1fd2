//! Chat Replier Port - 聊天回复出站端口

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::ChatId;

#[derive(Debug, Error)]
pub enum ChatReplyError {
    #[error("Chat transport error: {0}")]
    Transport(String),
}

/// Chat Replier Port
///
/// 向发起请求的聊天发送文本或图片
#[async_trait]
pub trait ChatReplierPort: Send + Sync {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), ChatReplyError>;

    /// 以附件形式上传本地图片文件
    async fn send_photo(
        &self,
        chat: ChatId,
        photo: &Path,
        caption: &str,
    ) -> Result<(), ChatReplyError>;
}
