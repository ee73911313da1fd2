//! 应用层 - 命令
//!
//! 每条文本消息对应一次 GenerateImageCommand

mod generate_commands;

pub mod handlers;

pub use generate_commands::*;
