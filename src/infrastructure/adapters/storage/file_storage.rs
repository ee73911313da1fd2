//! File Storage - 文件系统临时图片存储
//!
//! 实现 ArtifactStoragePort trait。
//! 文件名 `temp_image_<requester>_<uuid>.<ext>`：同一请求者的并发请求也不会共用路径。

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{ArtifactStorageError, ArtifactStoragePort};
use crate::domain::{GeneratedImage, ImageFormat, RequesterId};

/// 文件系统临时存储
pub struct FileArtifactStorage {
    /// 临时文件目录
    base_dir: PathBuf,
}

impl FileArtifactStorage {
    /// 创建存储，确保目录存在
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, ArtifactStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| ArtifactStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn artifact_path(&self, requester: RequesterId, format: ImageFormat) -> PathBuf {
        self.base_dir.join(format!(
            "temp_image_{}_{}.{}",
            requester,
            Uuid::new_v4().simple(),
            format.extension()
        ))
    }
}

#[async_trait]
impl ArtifactStoragePort for FileArtifactStorage {
    async fn save(
        &self,
        requester: RequesterId,
        image: &GeneratedImage,
    ) -> Result<PathBuf, ArtifactStorageError> {
        let path = self.artifact_path(requester, image.format());

        fs::write(&path, image.data())
            .await
            .map_err(|e| ArtifactStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved artifact: requester={}, path={}, size={} bytes",
            requester,
            path.display(),
            image.len()
        );

        Ok(path)
    }

    async fn delete(&self, path: &Path) -> Result<(), ArtifactStorageError> {
        match fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!("Deleted artifact: {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ArtifactStorageError::IoError(e.to_string())),
        }
    }
}
