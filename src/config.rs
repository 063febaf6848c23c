use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 静态数据文件路径
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub fee_schedule: PathBuf,
    pub permit_catalog: PathBuf,
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FEE_SCHEDULE: &str = "data/fees.village.json";
const DEFAULT_PERMIT_CATALOG: &str = "data/permits.village.json";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            data: DataConfig {
                fee_schedule: PathBuf::from(DEFAULT_FEE_SCHEDULE),
                permit_catalog: PathBuf::from(DEFAULT_PERMIT_CATALOG),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 < permitnow.{toml,json,yaml} < PERMITNOW_* 环境变量
    ///
    /// 环境变量使用 `__` 分隔层级, 例如 `PERMITNOW_SERVER__PORT=9000`。
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder(File::with_name("permitnow").required(false), environment())?
            .build()?
            .try_deserialize()
    }

    /// 从指定配置文件加载 (环境变量仍然生效)
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Self::builder(File::with_name(path).required(true), environment())?
            .build()?
            .try_deserialize()
    }

    fn builder(
        file: File<config::FileSourceFile, config::FileFormat>,
        env: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT as i64)?
            .set_default("data.fee_schedule", DEFAULT_FEE_SCHEDULE)?
            .set_default("data.permit_catalog", DEFAULT_PERMIT_CATALOG)?
            .add_source(file)
            .add_source(env))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `PERMITNOW_` 前缀后以 `__` 分隔层级
fn environment() -> Environment {
    Environment::with_prefix("PERMITNOW")
        .prefix_separator("_")
        .separator("__")
}
