//! Generate Image Handler - 请求处理器
//!
//! 单条线性流程：推理 → 写临时文件 → 发送图片 → 删除临时文件。
//! 每次调用只发出一条结果回复：图片或错误文本。

use std::sync::Arc;

use crate::application::commands::generate_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArtifactStoragePort, ChatReplierPort, EventLogPort, ImageEnginePort,
};
use crate::domain::{replies, ImageRequest};

/// GenerateImage Handler
pub struct GenerateImageHandler {
    image_engine: Arc<dyn ImageEnginePort>,
    artifact_storage: Arc<dyn ArtifactStoragePort>,
    replier: Arc<dyn ChatReplierPort>,
    event_log: Arc<dyn EventLogPort>,
}

impl GenerateImageHandler {
    pub fn new(
        image_engine: Arc<dyn ImageEnginePort>,
        artifact_storage: Arc<dyn ArtifactStoragePort>,
        replier: Arc<dyn ChatReplierPort>,
        event_log: Arc<dyn EventLogPort>,
    ) -> Self {
        Self {
            image_engine,
            artifact_storage,
            replier,
            event_log,
        }
    }

    pub async fn handle(&self, cmd: GenerateImageCommand) -> ReplyOutcome {
        let err = match self.generate_and_send(&cmd).await {
            Ok(()) => {
                tracing::info!(chat_id = %cmd.chat, requester = %cmd.requester, "Image delivered");
                return ReplyOutcome::PhotoSent;
            }
            Err(err) => err,
        };

        match &err {
            ApplicationError::UpstreamError(status_text) => {
                tracing::warn!(
                    chat_id = %cmd.chat,
                    requester = %cmd.requester,
                    status_text = %status_text,
                    "Image generation rejected by upstream"
                );
            }
            ApplicationError::TransportFault(detail) => {
                self.event_log.log(&format!("Error: {}", detail));
            }
        }

        match self.replier.send_text(cmd.chat, &err.user_message()).await {
            Ok(()) => ReplyOutcome::ErrorSent(err),
            Err(send_err) => {
                self.event_log
                    .log(&format!("Failed to deliver error reply to {}: {}", cmd.chat, send_err));
                ReplyOutcome::Undelivered(err)
            }
        }
    }

    async fn generate_and_send(&self, cmd: &GenerateImageCommand) -> Result<(), ApplicationError> {
        let request = ImageRequest::new(&cmd.prompt);
        let image = self.image_engine.generate(&request).await?;

        let path = self.artifact_storage.save(cmd.requester, &image).await?;
        let sent = self
            .replier
            .send_photo(cmd.chat, &path, &replies::caption(&cmd.prompt))
            .await;

        // 尽力删除，失败不影响用户
        if let Err(e) = self.artifact_storage.delete(&path).await {
            tracing::warn!(path = %path.display(), error = %e, "Failed to delete transient artifact");
        }

        sent?;
        Ok(())
    }
}
