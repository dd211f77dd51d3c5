use tauri::{plugin::TauriPlugin, Runtime};
use tauri_plugin_log::{Target, TargetKind};

use crate::{LOG_TARGET_BRIDGE, LOG_TARGET_DESKTOP, LOG_TARGET_STARTUP};

const DESKTOP_LOG_FILE_NAME: &str = "desktop";

pub(crate) fn log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

pub(crate) fn format_log_line(
    timestamp: &str,
    level: log::Level,
    target: &str,
    message: &std::fmt::Arguments<'_>,
) -> String {
    format!("[{timestamp}][{level}][{target}] {message}")
}

pub(crate) fn build_log_plugin<R: Runtime>() -> TauriPlugin<R> {
    tauri_plugin_log::Builder::new()
        .level(log_level())
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir {
                file_name: Some(DESKTOP_LOG_FILE_NAME.to_string()),
            }),
        ])
        .format(|out, message, record| {
            let timestamp = chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S%.3f")
                .to_string();
            out.finish(format_args!(
                "{}",
                format_log_line(&timestamp, record.level(), record.target(), message)
            ))
        })
        .build()
}

pub(crate) fn append_desktop_log(message: &str) {
    log::info!(target: LOG_TARGET_DESKTOP, "{message}");
}

pub(crate) fn append_startup_log(message: &str) {
    log::info!(target: LOG_TARGET_STARTUP, "{message}");
}

pub(crate) fn append_bridge_log(message: &str) {
    log::info!(target: LOG_TARGET_BRIDGE, "{message}");
}
