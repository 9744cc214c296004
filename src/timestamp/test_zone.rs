// timestamp/test_zone.rs - 測試用的美東時區（僅含 2024 年的夏令時規則）
//
// 夏令時: 2024-03-10 07:00Z 至 2024-11-03 06:00Z，偏移 -04:00，其餘時間 -05:00。
// 重疊時段的兩個候選以「較晚的在前」返回，與 chrono::Local 在部分平台上的行為相同。

use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Eastern2024;

fn est() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

fn edt() -> FixedOffset {
    FixedOffset::west_opt(4 * 3600).unwrap()
}

fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

impl TimeZone for Eastern2024 {
    type Offset = FixedOffset;

    fn from_offset(_offset: &FixedOffset) -> Self {
        Eastern2024
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
        self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
        if *local >= at(3, 10, 2) && *local < at(3, 10, 3) {
            LocalResult::None
        } else if *local >= at(11, 3, 1) && *local < at(11, 3, 2) {
            LocalResult::Ambiguous(est(), edt())
        } else if *local >= at(3, 10, 3) && *local < at(11, 3, 1) {
            LocalResult::Single(edt())
        } else {
            LocalResult::Single(est())
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
        self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
        if *utc >= at(3, 10, 7) && *utc < at(11, 3, 6) {
            edt()
        } else {
            est()
        }
    }
}
