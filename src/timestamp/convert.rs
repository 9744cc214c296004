// timestamp/convert.rs
//
// 提供 epoch 秒數與日曆時間之間的轉換函數。
// 主要功能：
// 1. 單值與批量的 DateTime <-> epoch 秒數轉換
// 2. 時間範圍的雙向轉換
// 3. 將本地牆上時間解析為確定的時間點（處理夏令時空隙與重疊）

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use tracing::warn;

use crate::timestamp::clock::Clock;

//
// 基礎時間轉換函數
//

/// 將 DateTime 轉換為 epoch 秒數，次秒部分向下截斷
pub fn to_epoch<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp()
}

/// 將 epoch 秒數轉換為指定時區的 DateTime
///
/// 超出可表示範圍的值會被截斷至最近的邊界。
pub fn from_epoch<Tz: TimeZone>(epoch: i64, tz: &Tz) -> DateTime<Tz> {
    clamp_epoch(epoch).with_timezone(tz)
}

/// 從時鐘讀取當前的 epoch 秒數
pub fn now_epoch<C: Clock + ?Sized>(clock: &C) -> i64 {
    to_epoch(&clock.now())
}

/// 將 epoch 秒數數組轉換為 DateTime 數組
pub fn epochs_to_datetimes<Tz: TimeZone>(epochs: &[i64], tz: &Tz) -> Vec<DateTime<Tz>> {
    epochs.iter().map(|&epoch| from_epoch(epoch, tz)).collect()
}

/// 將 DateTime 數組轉換為 epoch 秒數數組
pub fn datetimes_to_epochs<Tz: TimeZone>(datetimes: &[DateTime<Tz>]) -> Vec<i64> {
    datetimes.iter().map(to_epoch).collect()
}

//
// 時間範圍轉換函數
//

/// 將 DateTime 時間範圍轉換為 epoch 秒數範圍
pub fn datetime_range_to_epoch_range<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
) -> (i64, i64) {
    (to_epoch(start), to_epoch(end))
}

/// 將 epoch 秒數範圍轉換為指定時區的 DateTime 時間範圍
pub fn epoch_range_to_datetime_range<Tz: TimeZone>(
    start: i64,
    end: i64,
    tz: &Tz,
) -> (DateTime<Tz>, DateTime<Tz>) {
    (from_epoch(start, tz), from_epoch(end, tz))
}

//
// 內部輔助函數
//

/// 將 epoch 秒數轉為 UTC 時間點，超出範圍時截斷
pub(crate) fn clamp_epoch(epoch: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch, 0).unwrap_or_else(|| {
        warn!(epoch, "epoch 秒數超出可表示範圍，已截斷至邊界");
        epoch_boundary(epoch.is_negative())
    })
}

/// 可表示範圍的整秒邊界
pub(crate) fn epoch_boundary(lower: bool) -> DateTime<Utc> {
    if lower {
        DateTime::<Utc>::MIN_UTC
    } else {
        // MAX_UTC 帶有 999_999_999 奈秒
        DateTime::<Utc>::MAX_UTC
            .with_nanosecond(0)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// 將本地牆上時間解析為指定時區中的時間點
///
/// 重疊時段取較早的時間點；夏令時空隙中的時間沿用該處附近的偏移量換算。
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => dt,
        // chrono::Local 不保證兩個候選的先後順序
        LocalResult::Ambiguous(a, b) => {
            if a.timestamp() <= b.timestamp() {
                a
            } else {
                b
            }
        }
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(naive).fix();
            let utc = naive
                .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
                .unwrap_or(*naive);
            tz.from_utc_datetime(&utc)
        }
    }
}
