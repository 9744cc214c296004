use config::ConfigError;
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::loader::{ConfigLoader, Environment};
use crate::config::types::ApplicationConfig;
use crate::config::validation::Validator;

// 全局配置實例
static CONFIG: OnceCell<ApplicationConfig> = OnceCell::new();

/// 獲取應用程序配置實例
///
/// 尚未初始化時嘗試從環境加載，失敗則退回預設配置。
pub fn get_config() -> &'static ApplicationConfig {
    CONFIG.get_or_init(|| {
        ApplicationConfig::load_from_env().unwrap_or_else(|err| {
            warn!("無法加載應用程序配置，使用預設值: {}", err);
            ApplicationConfig::default()
        })
    })
}

/// 初始化配置（在應用程序啟動時調用）
pub fn init_config() -> Result<&'static ApplicationConfig, ConfigError> {
    let app_config = ApplicationConfig::load_from_env()?;

    // 嘗試初始化全局配置
    if CONFIG.set(app_config).is_err() {
        warn!("配置已經被初始化，跳過重複初始化");
    } else {
        debug!("配置初始化成功，環境：{:?}", Environment::from_env());
    }

    Ok(get_config())
}

/// ApplicationConfig 加載方法實現
impl ApplicationConfig {
    /// 從環境變數指定的環境加載配置
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        debug!("從環境加載配置: {:?}", env);
        Self::from_config(ConfigLoader::load(env)?)
    }

    /// 從指定目錄與環境加載配置
    pub fn load_from_dir<P: AsRef<Path>>(config_dir: P, env: Environment) -> Result<Self, ConfigError> {
        Self::from_config(ConfigLoader::load_from_dir(config_dir, env)?)
    }

    fn from_config(config_source: config::Config) -> Result<Self, ConfigError> {
        // 使用 serde 反序列化配置
        let app_config: ApplicationConfig = config_source.try_deserialize()?;

        // 驗證配置
        app_config
            .validate()
            .map_err(|err| ConfigError::Message(err.to_string()))?;
        debug!("配置驗證通過");

        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::ZoneSetting;
    use serial_test::serial;
    use std::fs;

    #[test]
    #[serial]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("development.toml"),
            "[time]\nzone = \"+08:00\"\n\n[log]\nlevel = \"debug\"\nformat = \"compact\"\n",
        )
        .unwrap();

        let config = ApplicationConfig::load_from_dir(dir.path(), Environment::Development).unwrap();

        assert_eq!(config.time.zone, "+08:00".parse::<ZoneSetting>().unwrap());
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "compact");
    }

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApplicationConfig::load_from_dir(dir.path(), Environment::Development).unwrap();

        assert_eq!(config, ApplicationConfig::default());
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("production.toml"), "[log]\nlevel = \"loud\"\n").unwrap();
        assert!(ApplicationConfig::load_from_dir(dir.path(), Environment::Production).is_err());

        fs::write(dir.path().join("production.toml"), "[time]\nzone = \"mars\"\n").unwrap();
        assert!(ApplicationConfig::load_from_dir(dir.path(), Environment::Production).is_err());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("development.toml"), "[time]\nzone = \"utc\"\n").unwrap();
        std::env::set_var("EPOCH_KIT__TIME__ZONE", "-05:30");

        let config = ApplicationConfig::load_from_dir(dir.path(), Environment::Development);

        // 清理環境變數
        std::env::remove_var("EPOCH_KIT__TIME__ZONE");

        assert_eq!(
            config.unwrap().time.zone,
            "-05:30".parse::<ZoneSetting>().unwrap()
        );
    }
}
