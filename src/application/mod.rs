//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ImageEngine、ArtifactStorage、ChatReplier、EventLog）
//! - commands: 图片生成命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{handlers::GenerateImageHandler, GenerateImageCommand, ReplyOutcome};

pub use error::ApplicationError;

pub use ports::{
    ArtifactStorageError, ArtifactStoragePort, ChatReplierPort, ChatReplyError, EventLogPort,
    ImageEngineError, ImageEnginePort,
};
