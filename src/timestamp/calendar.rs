// timestamp/calendar.rs - 日曆日位移與固定格式日期時間解析

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike};
use tracing::{debug, warn};

use crate::error::{TimestampError, TimestampResult};
use crate::timestamp::clock::Clock;
use crate::timestamp::convert::{epoch_boundary, resolve_local, to_epoch};

/// 日期字串格式
pub const DATE_LAYOUT: &str = "YYYY-MM-DD";
/// 時間字串格式（24 小時制）
pub const TIME_LAYOUT: &str = "HH:MM:SS";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// 計算「現在」向前或向後移動 `days` 個日曆日後的 epoch 秒數
///
/// 位移作用於 `tz` 中的本地日期，牆上時間保持不變，因此月份長度與跨年都會被正確處理。
/// 負數表示過去。
pub fn epoch_in_days<C, Tz>(days: i64, clock: &C, tz: &Tz) -> i64
where
    C: Clock + ?Sized,
    Tz: TimeZone,
{
    let now = clock.now().naive_utc();
    let offset = tz.offset_from_utc_datetime(&now).fix();
    let shifted = now
        .checked_add_offset(offset)
        .and_then(|local| shift_days(&local, days));

    match shifted {
        Some(shifted) => to_epoch(&resolve_local(tz, &shifted)),
        None => {
            warn!(days, "日期位移超出可表示範圍，已截斷至邊界");
            // 位移為 0 時依「現在」所在的一側截斷
            let lower = if days == 0 {
                now.and_utc().timestamp().is_negative()
            } else {
                days.is_negative()
            };
            to_epoch(&epoch_boundary(lower))
        }
    }
}

fn shift_days(local: &NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let delta = Days::new(days.unsigned_abs());
    if days.is_negative() {
        local.checked_sub_days(delta)
    } else {
        local.checked_add_days(delta)
    }
}

/// 將 `YYYY-MM-DD` 日期與 `HH:MM:SS` 時間解析為 `tz` 中的時間點
pub fn datetime_for_date<Tz: TimeZone>(
    date: &str,
    time: &str,
    tz: &Tz,
) -> TimestampResult<DateTime<Tz>> {
    let naive = parse_naive(date, time).ok_or_else(|| {
        debug!(date, time, "日期時間解析失敗");
        TimestampError::format(date, time)
    })?;
    Ok(resolve_local(tz, &naive))
}

/// 將 `YYYY-MM-DD` 日期與 `HH:MM:SS` 時間解析為 epoch 秒數
///
/// 任一欄位不符格式或不是有效日曆時間時返回 [`TimestampError::Format`]。
pub fn epoch_for_date<Tz: TimeZone>(date: &str, time: &str, tz: &Tz) -> TimestampResult<i64> {
    datetime_for_date(date, time, tz).map(|dt| to_epoch(&dt))
}

fn parse_naive(date: &str, time: &str) -> Option<NaiveDateTime> {
    if !matches_layout(date, DATE_LAYOUT, b'-') || !matches_layout(time, TIME_LAYOUT, b':') {
        return None;
    }

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).ok()?;

    // chrono 會把 60 秒解析為閏秒
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }

    Some(date.and_time(time))
}

/// 逐字元比對固定寬度格式：分隔符位置必須相符，其餘位置必須是 ASCII 數字
fn matches_layout(input: &str, layout: &str, separator: u8) -> bool {
    input.len() == layout.len()
        && input.bytes().zip(layout.bytes()).all(|(c, l)| {
            if l == separator {
                c == separator
            } else {
                c.is_ascii_digit()
            }
        })
}
