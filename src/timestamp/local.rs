// timestamp/local.rs - 以系統本地時區與系統時鐘為預設的便捷函數
//
// 這是唯一隱式讀取平台本地時區與牆上時間的地方，其餘函數均需顯式傳入時區與時鐘。

use chrono::{DateTime, Local};

use crate::error::TimestampResult;
use crate::timestamp::calendar;
use crate::timestamp::clock::SystemClock;
use crate::timestamp::convert;

/// 將本地 DateTime 轉換為 epoch 秒數
pub fn to_epoch(dt: &DateTime<Local>) -> i64 {
    convert::to_epoch(dt)
}

/// 將 epoch 秒數轉換為本地 DateTime
pub fn from_epoch(epoch: i64) -> DateTime<Local> {
    convert::from_epoch(epoch, &Local)
}

/// 當前本地時間向前或向後移動 `days` 個日曆日後的 epoch 秒數
pub fn epoch_in_days(days: i64) -> i64 {
    calendar::epoch_in_days(days, &SystemClock, &Local)
}

/// 以本地時區解析 `YYYY-MM-DD` 與 `HH:MM:SS`
pub fn epoch_for_date(date: &str, time: &str) -> TimestampResult<i64> {
    calendar::epoch_for_date(date, time, &Local)
}
