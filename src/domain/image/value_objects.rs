//! Image Context - Value Objects

use serde::Serialize;

/// 用户提示词
///
/// 长度不限，不做任何校验，原样传给推理服务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 生成参数（常量，用户不可配置）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

impl GenerationParameters {
    pub const NUM_INFERENCE_STEPS: u32 = 30;
    pub const GUIDANCE_SCALE: f32 = 7.5;
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            num_inference_steps: Self::NUM_INFERENCE_STEPS,
            guidance_scale: Self::GUIDANCE_SCALE,
        }
    }
}

/// 推理请求
///
/// 序列化后即为推理 API 的请求体:
/// `{"inputs": "...", "parameters": {"num_inference_steps": 30, "guidance_scale": 7.5}}`
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    inputs: String,
    parameters: GenerationParameters,
}

impl ImageRequest {
    pub fn new(prompt: &Prompt) -> Self {
        Self {
            inputs: prompt.as_str().to_string(),
            parameters: GenerationParameters::default(),
        }
    }

    pub fn prompt(&self) -> &str {
        &self.inputs
    }

    pub fn parameters(&self) -> GenerationParameters {
        self.parameters
    }
}

/// 图片格式（根据文件头识别）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl ImageFormat {
    /// 根据载荷前几个字节识别格式
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

/// 推理结果 - 原始图片字节
///
/// 不变量: 载荷非空且格式可识别
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    data: Vec<u8>,
    format: ImageFormat,
}

impl GeneratedImage {
    /// 校验载荷并构造
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, &'static str> {
        if data.is_empty() {
            return Err("empty image payload");
        }
        let format = ImageFormat::sniff(&data).ok_or("unrecognized image payload")?;
        Ok(Self { data, format })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
