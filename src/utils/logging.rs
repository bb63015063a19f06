// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush。
// 库本身从不主动初始化日志，由宿主程序决定是否调用 `init`。

use crate::config::LogConfig;
use crate::core::{RewriteError, RewriteResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// # Examples
/// ```no_run
/// use odata_rewrite::config::Config;
/// use odata_rewrite::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> RewriteResult<()> {
    if is_initialized() {
        return Err(RewriteError::Config("日志系统已初始化".to_string()));
    }

    let handle = Logger::try_with_str(log_spec(config))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    Ok(())
}

/// 生成 flexi_logger 日志规格字符串
///
/// 全局级别之后追加重写规则模块的级别，如 `info, odata_rewrite::query::rewrite=debug`
pub fn log_spec(config: &LogConfig) -> String {
    match &config.rewrite_level {
        Some(level) => format!("{}, {}={}", config.level, REWRITE_MODULE, level),
        None => config.level.clone(),
    }
}

const REWRITE_MODULE: &str = "odata_rewrite::query::rewrite";

/// 刷新并关闭日志系统
///
/// 阻塞直到异步日志线程写完当前内容
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
