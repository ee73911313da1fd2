//! Image Context - 图片生成上下文
//!
//! 职责:
//! - 提示词（原样透传，不做校验）
//! - 固定的生成参数
//! - 推理结果载荷与格式识别

mod value_objects;

pub use value_objects::{GeneratedImage, GenerationParameters, ImageFormat, ImageRequest, Prompt};
