//! Chat Context - 聊天上下文
//!
//! 职责:
//! - 聊天与请求者标识
//! - 面向用户的回复文案（印尼语）

pub mod replies;
mod value_objects;

pub use value_objects::{ChatId, RequesterId};
