//! Telegram Layer - 聊天传输
//!
//! - listener: 与传输无关的消息处理（确认 → 生成 → 回复）
//! - dispatcher: teloxide 路由与长轮询
//! - replier: ChatReplierPort 的 teloxide 实现

mod dispatcher;
mod listener;
mod replier;

pub use dispatcher::{run_dispatcher, schema, verify_bot, Command};
pub use listener::ChatListener;
pub use replier::TelegramReplier;
