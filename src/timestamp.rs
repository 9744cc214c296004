// timestamp.rs - 時間戳工具模組
//
// 提供 epoch 秒數與日曆時間之間的轉換、比較與範圍判斷。
// 所有函數都是純計算，時區與時鐘一律以參數傳入；
// 以系統本地時區為預設的版本集中在 local 子模組。

pub mod calendar;
pub mod clock;
pub mod compare;
pub mod convert;
pub mod local;
pub mod zone;

#[cfg(test)]
mod test_zone;

// 重新導出常用函數，使其可以通過 timestamp::function_name 直接訪問
pub use calendar::{datetime_for_date, epoch_for_date, epoch_in_days, DATE_LAYOUT, TIME_LAYOUT};
pub use clock::{Clock, FixedClock, SystemClock};
pub use compare::{compare_epoch, compare_epoch_str, time_range, CompareOp, EpochRange};
pub use convert::{
    datetime_range_to_epoch_range,
    datetimes_to_epochs,
    epoch_range_to_datetime_range,
    epochs_to_datetimes,
    from_epoch,
    now_epoch,
    to_epoch,
};
pub use zone::ZoneSetting;
