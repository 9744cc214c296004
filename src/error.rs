use thiserror::Error;

/// 時間戳工具錯誤類型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// 日期或時間字串不符合固定格式，或不是有效的日曆時間
    ///
    /// 不區分是日期錯誤、時間錯誤還是分隔符錯誤，`input` 僅供診斷使用。
    #[error("日期或時間格式無效，請使用 'YYYY-MM-DD' 與 'HH:MM:SS'")]
    Format { input: String },

    /// 不支援的比較運算子
    #[error("不支援的比較運算子: {0}")]
    UnsupportedOperator(String),

    /// 無效的時區設定
    #[error("無效的時區設定: {0}，請使用 'local'、'utc' 或 '±HH:MM'")]
    InvalidZone(String),
}

impl TimestampError {
    /// 以日期與時間字串建立格式錯誤
    pub fn format(date: &str, time: &str) -> Self {
        TimestampError::Format {
            input: format!("{} {}", date, time),
        }
    }
}

/// 時間戳工具結果類型別名
pub type TimestampResult<T> = Result<T, TimestampError>;
