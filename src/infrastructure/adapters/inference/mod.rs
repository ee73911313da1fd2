//! Inference Adapter - HTTP 图片推理客户端实现

mod http_image_client;

pub use http_image_client::*;
