// 模組定義
pub mod config;
pub mod error;
pub mod logging;
pub mod timestamp;

pub use error::{TimestampError, TimestampResult};
pub use timestamp::{
    compare_epoch, compare_epoch_str, epoch_for_date, epoch_in_days, from_epoch, time_range,
    to_epoch, Clock, CompareOp, EpochRange, FixedClock, SystemClock, ZoneSetting,
};
