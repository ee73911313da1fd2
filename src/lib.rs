//! Gambar Relay - Telegram 文生图中继
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Image Context: 提示词、生成参数、图片载荷
//! - Chat Context: 聊天标识与回复文案
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ImageEngine, ArtifactStorage, ChatReplier, EventLog）
//! - Commands: GenerateImageHandler（推理 → 临时文件 → 发送图片 → 清理）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 推理客户端, 文件临时存储
//! - Telegram: Chat Listener, teloxide 路由, 回复适配器
//! - HTTP: 健康检查服务
//! - Events: tracing 事件日志

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
