//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`KITTENS_` 前缀）
//! 2. 配置文件（config.toml）
//! 3. 默认值（`JWT_SECRET` 环境变量作为密钥的默认值）

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, DatabaseBackend};

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

/// 兼容的裸环境变量名
const LEGACY_SECRET_VAR: &str = "JWT_SECRET";

/// 加载应用配置
///
/// # 环境变量示例
/// - `KITTENS_SERVER__PORT=8080`
/// - `KITTENS_DATABASE__BACKEND=memory`
/// - `KITTENS_AUTH__JWT_SECRET=change-me`（或 `JWT_SECRET=change-me`）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.backend", "sqlite")?
        .set_default("database.path", "data/kittens.db")?
        .set_default("database.max_connections", 5)?
        .set_default(
            "auth.jwt_secret",
            std::env::var(LEGACY_SECRET_VAR).unwrap_or_default(),
        )?
        .set_default("auth.bcrypt_cost", 10)?
        .set_default("auth.token_ttl_secs", 86400)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），层级分隔符为双下划线
    builder = builder.add_source(
        Environment::with_prefix("KITTENS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

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

    if config.database.backend == DatabaseBackend::Sqlite && config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.auth.jwt_secret.is_empty() {
        return Err(ConfigError::ValidationError(
            "JWT secret must be set (KITTENS_AUTH__JWT_SECRET or JWT_SECRET)".to_string(),
        ));
    }

    if !(4..=31).contains(&config.auth.bcrypt_cost) {
        return Err(ConfigError::ValidationError(
            "bcrypt cost must be between 4 and 31".to_string(),
        ));
    }

    if config.auth.token_ttl_secs <= 0 {
        return Err(ConfigError::ValidationError(
            "Token TTL must be positive".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不输出密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Database Backend: {:?}", config.database.backend);
    if config.database.backend == DatabaseBackend::Sqlite {
        tracing::info!("Database: {}", config.database.path);
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Bcrypt Cost: {}", config.auth.bcrypt_cost);
    tracing::info!("Token TTL: {}s", config.auth.token_ttl_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
