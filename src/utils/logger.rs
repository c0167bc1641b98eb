use crate::utils::error::{Result, ToolboxError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("shared_toolbox=debug,info")
        } else {
            EnvFilter::new("shared_toolbox=info")
        }
    })
}

/// 以精簡格式初始化全域 subscriber；已初始化時回傳錯誤。
pub fn init_compact_logger(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| ToolboxError::LoggerError {
            message: e.to_string(),
        })
}

pub fn init_json_logger(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // log collectors parse structured lines
        )
        .try_init()
        .map_err(|e| ToolboxError::LoggerError {
            message: e.to_string(),
        })
}
