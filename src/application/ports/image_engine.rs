//! Image Engine Port - 图片推理引擎抽象
//!
//! 定义图片生成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{GeneratedImage, ImageRequest};

/// 图片推理错误
#[derive(Debug, Error)]
pub enum ImageEngineError {
    /// 上游返回了非 200 状态
    #[error("Upstream returned HTTP {status}: {status_text}")]
    Upstream { status: u16, status_text: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Image Engine Port
///
/// 外部图片推理服务的抽象接口
#[async_trait]
pub trait ImageEnginePort: Send + Sync {
    /// 执行一次推理，只有 HTTP 200 视为成功
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageEngineError>;
}
