#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bridge_channels;
mod desktop_bridge;
mod desktop_bridge_commands;
mod exit_events;
mod logging;
mod main_window;
mod shell_config;

pub(crate) use app_constants::*;
pub(crate) use app_types::{ChannelKind, HostInfo};
pub(crate) use logging::{append_bridge_log, append_desktop_log, append_startup_log};

fn main() {
    app_runtime::run();
}
