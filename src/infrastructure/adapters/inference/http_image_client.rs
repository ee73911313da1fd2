//! HTTP Image Client - 调用外部图片推理服务
//!
//! 实现 ImageEnginePort trait，通过 HTTP 调用 Hugging Face Inference API
//!
//! 外部推理 API:
//! POST https://api-inference.huggingface.co/models/<model>
//! Header: Authorization: Bearer <api key>
//! Request: {"inputs": "...", "parameters": {"num_inference_steps": 30, "guidance_scale": 7.5}}
//! Response: 200 时为图片二进制，其他状态为错误

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::application::ports::{ImageEngineError, ImageEnginePort};
use crate::domain::{GeneratedImage, ImageRequest};

/// 默认模型地址
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";

/// HTTP 图片客户端配置
#[derive(Debug, Clone)]
pub struct HttpImageClientConfig {
    /// 推理服务完整 URL
    pub endpoint_url: String,
    /// Bearer token
    pub api_key: String,
    /// 请求超时时间（秒），None 表示使用 reqwest 默认值（不超时）
    pub timeout_secs: Option<u64>,
}

impl Default for HttpImageClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl HttpImageClientConfig {
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// HTTP 图片客户端
///
/// 不重试，单次调用的结果直接返回给调用方
pub struct HttpImageClient {
    client: Client,
    config: HttpImageClientConfig,
}

impl HttpImageClient {
    /// 创建新的 HTTP 图片客户端
    pub fn new(config: HttpImageClientConfig) -> Result<Self, ImageEngineError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ImageEngineError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

/// 非 200 状态的状态文本，优先使用标准 reason phrase
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[async_trait]
impl ImageEnginePort for HttpImageClient {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageEngineError> {
        tracing::debug!(
            url = %self.config.endpoint_url,
            prompt_len = request.prompt().len(),
            "Sending image inference request"
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageEngineError::Timeout
                } else if e.is_connect() {
                    ImageEngineError::NetworkError(format!(
                        "Cannot connect to inference service: {}",
                        e
                    ))
                } else {
                    ImageEngineError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status.as_u16(), body = %body, "Inference service returned an error");
            return Err(ImageEngineError::Upstream {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| ImageEngineError::InvalidResponse(format!("Failed to read image: {}", e)))?
            .to_vec();

        let image = GeneratedImage::from_bytes(data)
            .map_err(|e| ImageEngineError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            format = image.format().extension(),
            size = image.len(),
            "Image inference completed"
        );

        Ok(image)
    }
}
