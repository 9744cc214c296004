use serde::{Deserialize, Serialize};

use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::timestamp::ZoneSetting;

/// 支援的日誌級別
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
/// 支援的日誌格式
pub const LOG_FORMATS: [&str; 2] = ["pretty", "compact"];

/// 應用程序配置結構
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub time: TimeConfig,
    pub log: LogConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 時區設定在反序列化時已經驗證
        self.log.validate()?;

        Ok(())
    }
}

/// 時間配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// 解讀與輸出日曆時間所用的時區
    pub zone: ZoneSetting,
}

/// 日誌配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.level, "log.level")?;

        // 驗證日誌級別
        ValidationUtils::one_of(&self.level.to_lowercase().as_str(), &LOG_LEVELS, "log.level")?;

        // 驗證日誌格式
        ValidationUtils::one_of(&self.format.to_lowercase().as_str(), &LOG_FORMATS, "log.format")?;

        Ok(())
    }
}
