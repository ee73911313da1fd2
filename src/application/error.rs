//! 应用层错误定义
//!
//! 用户可见的错误只有两类：上游错误与传输故障

use thiserror::Error;

use crate::application::ports::{ArtifactStorageError, ChatReplyError, ImageEngineError};
use crate::domain::replies;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 推理服务返回非 200，携带状态文本
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// HTTP 调用、载荷校验、文件读写或图片上传中的任何故障
    #[error("Transport fault: {0}")]
    TransportFault(String),
}

impl ApplicationError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFault(message.into())
    }

    /// 发给用户的文本；TransportFault 不暴露内部细节
    pub fn user_message(&self) -> String {
        match self {
            Self::UpstreamError(status_text) => replies::upstream_failure(status_text),
            Self::TransportFault(_) => replies::GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<ImageEngineError> for ApplicationError {
    fn from(err: ImageEngineError) -> Self {
        match err {
            ImageEngineError::Upstream { status_text, .. } => Self::UpstreamError(status_text),
            other => Self::TransportFault(other.to_string()),
        }
    }
}

impl From<ArtifactStorageError> for ApplicationError {
    fn from(err: ArtifactStorageError) -> Self {
        Self::TransportFault(err.to_string())
    }
}

impl From<ChatReplyError> for ApplicationError {
    fn from(err: ChatReplyError) -> Self {
        Self::TransportFault(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_maps_to_status_text() {
        let err: ApplicationError = ImageEngineError::Upstream {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }
        .into();

        assert!(matches!(err, ApplicationError::UpstreamError(_)));
        assert_eq!(
            err.user_message(),
            "Gagal menghasilkan gambar: Service Unavailable"
        );
    }

    #[test]
    fn test_transport_fault_hides_detail() {
        let err: ApplicationError =
            ImageEngineError::NetworkError("connection refused".to_string()).into();

        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.user_message(), replies::GENERIC_FAILURE);
        assert!(!err.user_message().contains("connection refused"));
    }
}
