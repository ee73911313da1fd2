//! Telegram Replier
//!
//! 实现 ChatReplierPort：文本用 sendMessage，图片用 sendPhoto 上传本地文件

use async_trait::async_trait;
use std::path::Path;
use teloxide::payloads::SendPhotoSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId as TgChatId, InputFile};

use crate::application::ports::{ChatReplierPort, ChatReplyError};
use crate::domain::ChatId;

/// teloxide Bot 的回复适配器
#[derive(Clone)]
pub struct TelegramReplier {
    bot: Bot,
}

impl TelegramReplier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatReplierPort for TelegramReplier {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), ChatReplyError> {
        self.bot
            .send_message(TgChatId(chat.0), text)
            .await
            .map_err(|e| ChatReplyError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: ChatId,
        photo: &Path,
        caption: &str,
    ) -> Result<(), ChatReplyError> {
        self.bot
            .send_photo(TgChatId(chat.0), InputFile::file(photo.to_path_buf()))
            .caption(caption)
            .await
            .map_err(|e| ChatReplyError::Transport(e.to_string()))?;
        Ok(())
    }
}
