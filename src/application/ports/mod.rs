//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artifact_storage;
mod chat_replier;
mod event_log;
mod image_engine;

pub use artifact_storage::{ArtifactStorageError, ArtifactStoragePort};
pub use chat_replier::{ChatReplierPort, ChatReplyError};
pub use event_log::EventLogPort;
pub use image_engine::{ImageEngineError, ImageEnginePort};
