//! Artifact Storage Port - 出站端口
//!
//! 临时图片文件：推理成功后写入，上传完成后立即删除

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{GeneratedImage, RequesterId};

/// 临时文件存储错误
#[derive(Debug, Error)]
pub enum ArtifactStorageError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Artifact Storage Port
#[async_trait]
pub trait ArtifactStoragePort: Send + Sync {
    /// 写入图片，返回本次请求独占的文件路径
    async fn save(
        &self,
        requester: RequesterId,
        image: &GeneratedImage,
    ) -> Result<PathBuf, ArtifactStorageError>;

    /// 删除临时文件，文件不存在视为成功
    async fn delete(&self, path: &Path) -> Result<(), ArtifactStorageError>;
}
