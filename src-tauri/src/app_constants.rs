pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Desktop Scaffold";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1100.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 750.0;

/// Packaged UI entry point, relative to `frontendDist`.
pub(crate) const PACKAGED_ENTRY_PATH: &str = "index.html";

pub(crate) const DEV_SERVER_URL_ENV: &str = "DESKTOP_DEV_SERVER_URL";
pub(crate) const START_URL_ENV: &str = "DESKTOP_START_URL";
pub(crate) const OPEN_DEVTOOLS_ENV: &str = "DESKTOP_OPEN_DEVTOOLS";

pub(crate) const PING_GLOBAL: &str = "api";
pub(crate) const CHANNEL_GLOBAL: &str = "bridge";
pub(crate) const PING_REPLY: &str = "pong";

pub(crate) const LOG_TARGET_DESKTOP: &str = "desktop";
pub(crate) const LOG_TARGET_STARTUP: &str = "startup";
pub(crate) const LOG_TARGET_BRIDGE: &str = "bridge";
