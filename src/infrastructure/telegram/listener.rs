//! Chat Listener
//!
//! 每条文本消息：先发确认，再交给 GenerateImageHandler，
//! 后者负责唯一的结果回复（图片或错误文本）。

use std::sync::Arc;

use crate::application::ports::{ChatReplierPort, ChatReplyError, EventLogPort};
use crate::application::{GenerateImageCommand, GenerateImageHandler, ReplyOutcome};
use crate::domain::{replies, ChatId, Prompt, RequesterId};

pub struct ChatListener {
    replier: Arc<dyn ChatReplierPort>,
    generate_handler: GenerateImageHandler,
    event_log: Arc<dyn EventLogPort>,
}

impl ChatListener {
    pub fn new(
        replier: Arc<dyn ChatReplierPort>,
        generate_handler: GenerateImageHandler,
        event_log: Arc<dyn EventLogPort>,
    ) -> Self {
        Self {
            replier,
            generate_handler,
            event_log,
        }
    }

    /// /start、/help：发送使用说明
    pub async fn on_start(&self, chat: ChatId) -> Result<(), ChatReplyError> {
        self.replier.send_text(chat, replies::GREETING).await
    }

    /// 普通文本：整条消息即提示词
    pub async fn on_text(&self, chat: ChatId, requester: RequesterId, text: &str) -> ReplyOutcome {
        let prompt = Prompt::new(text);

        tracing::info!(
            chat_id = %chat,
            requester = %requester,
            prompt_len = text.len(),
            "Received prompt"
        );

        // 确认消息失败不阻断流程
        if let Err(e) = self
            .replier
            .send_text(chat, &replies::acknowledgement(&prompt))
            .await
        {
            self.event_log
                .log(&format!("Failed to send acknowledgement to {}: {}", chat, e));
        }

        self.generate_handler
            .handle(GenerateImageCommand {
                chat,
                requester,
                prompt,
            })
            .await
    }

    /// 处理流程之外的未预期错误：记录并尽力告知用户
    pub async fn on_failure(&self, chat: ChatId, error: &str) {
        self.event_log
            .log(&format!("Update from chat {} caused error {}", chat, error));
        if let Err(e) = self
            .replier
            .send_text(chat, replies::UNEXPECTED_FAILURE)
            .await
        {
            tracing::warn!(chat_id = %chat, error = %e, "Failed to send fallback reply");
        }
    }
}
