// logging.rs - 日誌系統初始化
//
// 程式庫內部只透過 tracing 宏發出事件，訂閱者由最外層（命令行）依 LogConfig 安裝。

use tracing::subscriber::SetGlobalDefaultError;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LogConfig;

/// 將配置中的日誌級別轉換為 tracing 級別，無法識別時默認為 INFO
pub fn level_from_config(log_config: &LogConfig) -> Level {
    match log_config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// 建立日誌過濾器，`RUST_LOG` 優先於配置
pub fn build_filter(log_config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(level_from_config(log_config).to_string().to_lowercase())
    })
}

/// 初始化全局日誌訂閱者，日誌輸出到 stderr
pub fn init_logging(log_config: &LogConfig) -> Result<(), SetGlobalDefaultError> {
    let builder = FmtSubscriber::builder()
        .with_env_filter(build_filter(log_config))
        .with_writer(std::io::stderr);

    match log_config.format.to_lowercase().as_str() {
        "compact" => tracing::subscriber::set_global_default(builder.compact().finish())?,
        _ => tracing::subscriber::set_global_default(builder.pretty().finish())?,
    }

    info!("日誌系統初始化完成");
    Ok(())
}
