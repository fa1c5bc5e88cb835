//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `PORT` 环境变量（仅覆盖端口）
//! 2. `QUIZHUB_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, StoreSource};

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

/// 端口覆盖环境变量
const PORT_ENV: &str = "PORT";

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=5001`
/// - `QUIZHUB_SERVER__HOST=127.0.0.1`
/// - `QUIZHUB_STORE__SOURCE=files`
/// - `QUIZHUB_STORE__DATA_DIR=/srv/quiz/data`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(config_path, std::env::var(PORT_ENV).ok())
}

fn build_config(
    config_path: Option<&Path>,
    port_override: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "frontend")?
        .set_default("store.source", "builtin")?
        .set_default("store.data_dir", "data")?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符 __
    // 例如: QUIZHUB_SERVER__PORT=8080
    builder = builder.add_source(
        Environment::with_prefix("QUIZHUB")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 裸 PORT 变量（最高优先级）
    let port_override = port_override.filter(|p| !p.trim().is_empty());
    builder = builder.set_override_option("server.port", port_override)?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server host cannot be empty".to_string(),
        ));
    }

    if config.store.source == StoreSource::Files
        && config.store.data_dir.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty when store source is files".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Question Source: {}", config.store.source.as_str());
    if config.store.source == StoreSource::Files {
        tracing::info!("Data Directory: {:?}", config.store.data_dir);
    }
    tracing::info!("Static Files Enabled: {}", config.server.static_files.enabled);
    if config.server.static_files.enabled {
        tracing::info!("Static Files Directory: {:?}", config.server.static_files.dir);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
