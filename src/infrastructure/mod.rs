//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod events;
pub mod http;
pub mod telegram;

pub use adapters::{FileArtifactStorage, HttpImageClient, HttpImageClientConfig};
pub use events::TracingEventLog;
pub use http::{HealthServer, ServerConfig};
pub use telegram::{ChatListener, TelegramReplier};
