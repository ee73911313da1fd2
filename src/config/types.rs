//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::infrastructure::adapters::DEFAULT_ENDPOINT_URL;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Telegram 配置
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// 推理服务配置
    #[serde(default)]
    pub inference: InferenceConfig,

    /// 健康检查服务配置
    #[serde(default)]
    pub health: HealthConfig,

    /// 临时文件配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// Telegram 配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramConfig {
    /// BotFather 签发的 token
    #[serde(default)]
    pub token: String,
}

/// 推理服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// 推理服务完整 URL
    #[serde(default = "default_inference_url")]
    pub url: String,

    /// Hugging Face API key
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒），不设置则不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_inference_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: default_inference_url(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

/// 健康检查服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct HealthConfig {
    /// 是否启动健康检查服务
    #[serde(default)]
    pub enabled: bool,

    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HealthConfig {
    /// 获取监听地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 临时文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 临时图片目录
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
}

fn default_temp_dir() -> PathBuf {
    std::env::temp_dir().join("gambar-relay")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.telegram.token.is_empty());
        assert_eq!(config.inference.url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.inference.timeout_secs, None);
        assert!(!config.health.enabled);
        assert_eq!(config.health.port, 8080);
        assert!(config.storage.temp_dir.ends_with("gambar-relay"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_health_addr() {
        let config = HealthConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }
}
