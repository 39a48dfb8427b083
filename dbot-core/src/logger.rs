//! 日志初始化：控制台与文件均使用 tracing_subscriber 的 fmt layer 完整格式（级别、target、span、所有字段）。

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// 未设置 RUST_LOG 时使用的过滤规则；HTTP 客户端相关 crate 只输出 warn，避免每次长轮询请求都被记录。
pub const DEFAULT_LOG_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

/// 初始化全局 tracing 订阅者。
/// 通过 Tee 将同一份输出同时写入 stdout 与日志文件（追加写入 `log_file_path`）。
/// 从环境变量 RUST_LOG 读取日志级别；未设置则使用 [`DEFAULT_LOG_FILTER`]。
/// 注意：需在调用本函数前加载 .env（如 dotenvy::dotenv()），否则 RUST_LOG 不会生效。
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    let file = Arc::new(file);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let writer = io::stdout.and(file);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
