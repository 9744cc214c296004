// timestamp/zone.rs - 時區設定
//
// 核心函數都以時區為顯式參數；ZoneSetting 只在最外層（配置與命令行）決定要傳入哪一個時區。

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimestampError;

/// 時區設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZoneSetting {
    /// 系統本地時區
    #[default]
    Local,
    /// UTC
    Utc,
    /// 固定偏移量
    Fixed(FixedOffset),
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneSetting::Local => write!(f, "local"),
            ZoneSetting::Utc => write!(f, "utc"),
            ZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for ZoneSetting {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => Ok(ZoneSetting::Local),
            "utc" | "z" => Ok(ZoneSetting::Utc),
            _ => parse_fixed_offset(trimmed)
                .map(ZoneSetting::Fixed)
                .ok_or_else(|| TimestampError::InvalidZone(s.to_string())),
        }
    }
}

impl TryFrom<String> for ZoneSetting {
    type Error = TimestampError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ZoneSetting> for String {
    fn from(zone: ZoneSetting) -> Self {
        zone.to_string()
    }
}

/// 解析 `+HH:MM` / `-HH:MM`
fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let bytes = s.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours = two_digits(&bytes[1..3])?;
    let minutes = two_digits(&bytes[4..6])?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn two_digits(bytes: &[u8]) -> Option<i32> {
    bytes.iter().try_fold(0, |acc, &c| {
        c.is_ascii_digit().then(|| acc * 10 + i32::from(c - b'0'))
    })
}
