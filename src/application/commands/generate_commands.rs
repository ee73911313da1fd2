//! Generate Commands - 图片生成命令

use crate::application::error::ApplicationError;
use crate::domain::{ChatId, Prompt, RequesterId};

/// 生成图片命令
#[derive(Debug, Clone)]
pub struct GenerateImageCommand {
    pub chat: ChatId,
    pub requester: RequesterId,
    pub prompt: Prompt,
}

/// 一次请求最终发出的回复
#[derive(Debug)]
pub enum ReplyOutcome {
    /// 图片已发送
    PhotoSent,
    /// 已发送错误文本
    ErrorSent(ApplicationError),
    /// 错误文本也未能送达
    Undelivered(ApplicationError),
}

impl ReplyOutcome {
    pub fn is_photo(&self) -> bool {
        matches!(self, Self::PhotoSent)
    }
}
