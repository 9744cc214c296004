use config::{Config, ConfigError, Environment as ConfigEnvironment, File};
use std::env;
use std::path::Path;

/// 選擇運行環境的環境變數
pub const ENV_VAR: &str = "EPOCH_KIT_ENV";
/// 配置目錄的環境變數
pub const CONFIG_DIR_VAR: &str = "EPOCH_KIT_CONFIG_DIR";
/// 覆寫配置項的環境變數前綴，例如 `EPOCH_KIT__TIME__ZONE`
pub const ENV_PREFIX: &str = "EPOCH_KIT";

/// 環境類型枚舉
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 從環境變數取得當前環境設定
    pub fn from_env() -> Self {
        match env::var(ENV_VAR)
            .unwrap_or_else(|_| "development".into())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// 轉換為配置文件名
    pub fn as_filename(&self) -> &'static str {
        match self {
            Environment::Development => "development.toml",
            Environment::Production => "production.toml",
        }
    }
}

/// 配置加載器，負責根據環境加載適當的配置
pub struct ConfigLoader;

impl ConfigLoader {
    /// 載入指定環境的配置
    pub fn load(env: Environment) -> Result<Config, ConfigError> {
        let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".into());
        Self::load_from_dir(config_dir, env)
    }

    /// 從指定目錄載入配置
    ///
    /// 配置文件不存在時只使用預設值與環境變數。
    pub fn load_from_dir<P: AsRef<Path>>(config_dir: P, env: Environment) -> Result<Config, ConfigError> {
        let config_path = config_dir.as_ref().join(env.as_filename());

        Config::builder()
            // 加載環境特定配置
            .add_source(File::from(config_path).required(false))
            // 從環境變數加載配置（優先級高於文件配置）
            .add_source(
                ConfigEnvironment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
    }

    /// 載入當前環境的配置
    pub fn load_current() -> Result<Config, ConfigError> {
        Self::load(Environment::from_env())
    }
}
