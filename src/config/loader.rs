//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署平台常用的环境变量（`TELEGRAM_TOKEN`、`HF_API_KEY`、`PORT`）
//! 2. 带前缀的环境变量（`RELAY_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::infrastructure::adapters::DEFAULT_ENDPOINT_URL;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 无前缀的部署环境变量
#[derive(Debug, Clone, Default)]
pub struct PlatformEnv {
    pub telegram_token: Option<String>,
    pub hf_api_key: Option<String>,
    pub port: Option<String>,
}

impl PlatformEnv {
    /// 从进程环境读取
    pub fn from_process() -> Self {
        Self {
            telegram_token: std::env::var("TELEGRAM_TOKEN").ok(),
            hf_api_key: std::env::var("HF_API_KEY").ok(),
            port: std::env::var("PORT").ok(),
        }
    }
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `TELEGRAM_TOKEN=123456:ABC...`
/// - `HF_API_KEY=hf_...`
/// - `PORT=8080`（同时启用健康检查服务）
/// - `RELAY_INFERENCE__URL=https://...`
/// - `RELAY_STORAGE__TEMP_DIR=/tmp/relay`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None, &PlatformEnv::from_process())
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `platform_env` - 无前缀环境变量，优先级最高
pub fn load_config_from_path(
    config_path: Option<&Path>,
    platform_env: &PlatformEnv,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("telegram.token", "")?
        .set_default("inference.url", DEFAULT_ENDPOINT_URL)?
        .set_default("inference.api_key", "")?
        .set_default("health.enabled", false)?
        .set_default("health.host", "0.0.0.0")?
        .set_default("health.port", 8080)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 带前缀环境变量
    // 例如: RELAY_INFERENCE__TIMEOUT_SECS=120
    builder = builder.add_source(
        Environment::with_prefix("RELAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 部署平台环境变量（最高优先级）
    builder = builder
        .set_override_option("telegram.token", platform_env.telegram_token.clone())?
        .set_override_option("inference.api_key", platform_env.hf_api_key.clone())?;

    if let Some(raw) = &platform_env.port {
        let port: u16 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::ValidationError(format!("Invalid PORT value: {}", raw)))?;
        builder = builder
            .set_override("health.port", i64::from(port))?
            .set_override("health.enabled", true)?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.telegram.token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Telegram token is required (TELEGRAM_TOKEN)".to_string(),
        ));
    }

    if config.inference.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Inference API key is required (HF_API_KEY)".to_string(),
        ));
    }

    if config.inference.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Inference URL cannot be empty".to_string(),
        ));
    }

    if config.health.enabled && config.health.port == 0 {
        return Err(ConfigError::ValidationError(
            "Health port cannot be 0 when the health server is enabled".to_string(),
        ));
    }

    if config.storage.temp_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Temp directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 只显示密钥的前 4 个字符
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Telegram Token: {}", mask_secret(&config.telegram.token));
    tracing::info!("Inference URL: {}", config.inference.url);
    tracing::info!("Inference API Key: {}", mask_secret(&config.inference.api_key));
    match config.inference.timeout_secs {
        Some(secs) => tracing::info!("Inference Timeout: {}s", secs),
        None => tracing::info!("Inference Timeout: none"),
    }
    tracing::info!("Health Server Enabled: {}", config.health.enabled);
    if config.health.enabled {
        tracing::info!("Health Server: {}", config.health.addr());
    }
    tracing::info!("Temp Directory: {:?}", config.storage.temp_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.telegram.token = "123456:ABC".to_string();
        config.inference.api_key = "hf_key".to_string();
        config
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("relay.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_token() {
        let mut config = valid_config();
        config.telegram.token = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let mut config = valid_config();
        config.inference.api_key = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_port_when_enabled() {
        let mut config = valid_config();
        config.health.enabled = true;
        config.health.port = 0;
        assert!(validate_config(&config).is_err());

        config.health.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(
            r#"
[telegram]
token = "file-token"

[inference]
url = "http://localhost:9000/models/test"
api_key = "file-key"
timeout_secs = 90

[storage]
temp_dir = "/tmp/relay-test"
"#,
        );

        let config = load_config_from_path(Some(&path), &PlatformEnv::default()).unwrap();
        assert_eq!(config.telegram.token, "file-token");
        assert_eq!(config.inference.url, "http://localhost:9000/models/test");
        assert_eq!(config.inference.api_key, "file-key");
        assert_eq!(config.inference.timeout_secs, Some(90));
        assert_eq!(config.storage.temp_dir, std::path::PathBuf::from("/tmp/relay-test"));
        assert!(!config.health.enabled);
    }

    #[test]
    fn test_platform_env_overrides_file() {
        let (_dir, path) = write_config(
            r#"
[telegram]
token = "file-token"

[inference]
api_key = "file-key"
"#,
        );
        let env = PlatformEnv {
            telegram_token: Some("env-token".to_string()),
            hf_api_key: Some("env-key".to_string()),
            port: Some("3000".to_string()),
        };

        let config = load_config_from_path(Some(&path), &env).unwrap();
        assert_eq!(config.telegram.token, "env-token");
        assert_eq!(config.inference.api_key, "env-key");
        assert_eq!(config.inference.url, DEFAULT_ENDPOINT_URL);
        assert!(config.health.enabled);
        assert_eq!(config.health.port, 3000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let env = PlatformEnv {
            telegram_token: Some("t".to_string()),
            hf_api_key: Some("k".to_string()),
            port: Some("eighty".to_string()),
        };
        let (_dir, path) = write_config("");

        let err = load_config_from_path(Some(&path), &env).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_credentials_fail() {
        let (_dir, path) = write_config("");
        let err = load_config_from_path(Some(&path), &PlatformEnv::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("hf_abcdefgh"), "hf_a****");
        assert_eq!(mask_secret("abc"), "****");
        assert_eq!(mask_secret(""), "****");
    }
}
