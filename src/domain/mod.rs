//! Domain Layer - 领域层
//!
//! 包含两个上下文:
//! - Image Context: 提示词、生成参数、图片载荷
//! - Chat Context: 聊天/请求者标识与回复文案

pub mod chat;
pub mod image;

pub use chat::{replies, ChatId, RequesterId};
pub use image::{GeneratedImage, GenerationParameters, ImageFormat, ImageRequest, Prompt};
