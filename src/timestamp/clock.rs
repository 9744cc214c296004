// timestamp/clock.rs - 時鐘抽象
//
// 需要讀取「現在」的函數一律透過 Clock 取得時間，測試時可注入固定時間。

use chrono::{DateTime, Utc};

/// 當前時間來源
pub trait Clock: Send + Sync {
    /// 返回當前的 UTC 時間
    fn now(&self) -> DateTime<Utc>;
}

/// 系統時鐘，讀取牆上時間
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時鐘，永遠返回同一時間點
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// 以指定時間點建立固定時鐘
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// 以任意時區的時間點建立固定時鐘
    pub fn at<Tz: chrono::TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::new(instant.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
