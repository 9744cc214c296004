// timestamp/compare.rs - epoch 比較與範圍判斷

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::TimestampError;

/// 比較運算子
///
/// 只支援四種順序比較，`==` 與 `!=` 不在支援範圍內。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `<=`
    #[serde(rename = "<=")]
    Le,
    /// `>=`
    #[serde(rename = ">=")]
    Ge,
}

impl CompareOp {
    /// 轉換為運算子符號
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }

    /// 計算 `left <op> right`
    pub fn evaluate(&self, left: i64, right: i64) -> bool {
        match self {
            CompareOp::Lt => left < right,
            CompareOp::Gt => left > right,
            CompareOp::Le => left <= right,
            CompareOp::Ge => left >= right,
        }
    }

    /// 獲取所有運算子列表
    pub fn all() -> [CompareOp; 4] {
        [CompareOp::Lt, CompareOp::Gt, CompareOp::Le, CompareOp::Ge]
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompareOp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(CompareOp::Lt),
            ">" => Ok(CompareOp::Gt),
            "<=" => Ok(CompareOp::Le),
            ">=" => Ok(CompareOp::Ge),
            other => Err(TimestampError::UnsupportedOperator(other.to_string())),
        }
    }
}

/// 比較兩個 epoch 秒數
pub fn compare_epoch(epoch1: i64, epoch2: i64, op: CompareOp) -> bool {
    op.evaluate(epoch1, epoch2)
}

/// 以字串運算子比較兩個 epoch 秒數
///
/// 無法識別的運算子一律返回 `false`，不視為錯誤。
pub fn compare_epoch_str(epoch1: i64, epoch2: i64, op: &str) -> bool {
    match op.parse::<CompareOp>() {
        Ok(op) => compare_epoch(epoch1, epoch2, op),
        Err(_) => {
            debug!(op, "不支援的比較運算子，返回 false");
            false
        }
    }
}

/// 檢查 epoch 是否落在 `[start, end]` 閉區間內
///
/// 不檢查 `start <= end`；起點大於終點時區間為空。
pub fn time_range(epoch: i64, start: i64, end: i64) -> bool {
    epoch >= start && epoch <= end
}

/// epoch 秒數閉區間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochRange {
    pub start: i64,
    pub end: i64,
}

impl EpochRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// 檢查 epoch 是否落在區間內（含兩端）
    pub fn contains(&self, epoch: i64) -> bool {
        time_range(epoch, self.start, self.end)
    }

    /// 起點大於終點時區間為空
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}
