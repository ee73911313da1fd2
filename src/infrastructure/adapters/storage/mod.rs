//! Storage Adapter - 临时图片文件

mod file_storage;

pub use file_storage::FileArtifactStorage;
