use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Parser, Subcommand};
use epoch_kit::config;
use epoch_kit::logging::init_logging;
use epoch_kit::timestamp::{
    compare_epoch_str, datetime_for_date, epoch_in_days, from_epoch, time_range, to_epoch,
    SystemClock, ZoneSetting,
};
use std::fmt;
use tracing::debug;

#[derive(Parser)]
#[command(name = "epoch_kit", version, about = "epoch 秒數與日曆時間轉換工具")]
struct Cli {
    /// 時區 (local、utc 或 ±HH:MM)，未指定時使用配置中的 time.zone
    #[arg(short, long, global = true)]
    zone: Option<ZoneSetting>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 將 RFC 3339 時間戳轉換為 epoch 秒數
    ToEpoch {
        /// 例如 2023-06-15T12:30:00+08:00
        timestamp: String,
    },

    /// 將 epoch 秒數轉換為日曆時間
    FromEpoch {
        #[arg(allow_negative_numbers = true)]
        epoch: i64,
    },

    /// 計算現在向前或向後移動若干日曆日後的 epoch 秒數
    InDays {
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },

    /// 比較兩個 epoch 秒數 (<、>、<=、>=)，其他運算子一律輸出 false
    Compare {
        #[arg(allow_negative_numbers = true)]
        left: i64,
        op: String,
        #[arg(allow_negative_numbers = true)]
        right: i64,
    },

    /// 檢查 epoch 是否落在 [start, end] 內
    Range {
        #[arg(allow_negative_numbers = true)]
        epoch: i64,
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
    },

    /// 將 YYYY-MM-DD 與 HH:MM:SS 轉換為 epoch 秒數
    ForDate { date: String, time: String },
}

fn main() -> Result<()> {
    // 解析命令行參數
    let cli = Cli::parse();

    // 初始化配置
    let app_config = config::init_config().context("無法加載配置")?;

    // 初始化日誌系統
    init_logging(&app_config.log).map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    let zone = cli.zone.unwrap_or(app_config.time.zone);
    debug!(%zone, "使用時區設定");

    match zone {
        ZoneSetting::Local => run(cli.command, &Local),
        ZoneSetting::Utc => run(cli.command, &Utc),
        ZoneSetting::Fixed(offset) => run(cli.command, &offset),
    }
}

fn run<Tz>(command: Commands, tz: &Tz) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match command {
        Commands::ToEpoch { timestamp } => {
            let dt = DateTime::parse_from_rfc3339(&timestamp)
                .with_context(|| format!("無法解析 RFC 3339 時間戳: {}", timestamp))?;
            println!("{}", to_epoch(&dt));
        }
        Commands::FromEpoch { epoch } => {
            println!("{}", from_epoch(epoch, tz).to_rfc3339());
        }
        Commands::InDays { days } => {
            println!("{}", epoch_in_days(days, &SystemClock, tz));
        }
        Commands::Compare { left, op, right } => {
            println!("{}", compare_epoch_str(left, right, &op));
        }
        Commands::Range { epoch, start, end } => {
            println!("{}", time_range(epoch, start, end));
        }
        Commands::ForDate { date, time } => {
            let dt = datetime_for_date(&date, &time, tz)?;
            debug!(datetime = %dt.to_rfc3339(), "解析結果");
            println!("{}", to_epoch(&dt));
        }
    }

    Ok(())
}
