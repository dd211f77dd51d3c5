use std::env;

use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{append_desktop_log, main_window, shell_config::ShellConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowsClosedDecision {
    Exit,
    KeepRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReopenDecision {
    CreateWindow,
    FocusExisting,
}

/// macOS apps stay alive in the dock with no windows open.
pub(crate) fn decide_all_windows_closed(platform: &str) -> WindowsClosedDecision {
    if platform == "macos" {
        WindowsClosedDecision::KeepRunning
    } else {
        WindowsClosedDecision::Exit
    }
}

pub(crate) fn decide_reopen(open_windows: usize) -> ReopenDecision {
    if open_windows == 0 {
        ReopenDecision::CreateWindow
    } else {
        ReopenDecision::FocusExisting
    }
}

/// `code` is `None` when the runtime asks to exit because the last window
/// closed, and `Some` for explicit `AppHandle::exit` calls.
pub(crate) fn handle_exit_requested(code: Option<i32>, api: &ExitRequestApi) {
    if code.is_some() {
        append_desktop_log(&format!("exit requested with code {code:?}"));
        return;
    }

    match decide_all_windows_closed(env::consts::OS) {
        WindowsClosedDecision::Exit => {
            append_desktop_log("all windows closed, exiting desktop process");
        }
        WindowsClosedDecision::KeepRunning => {
            append_desktop_log("all windows closed, staying resident until reopened");
            api.prevent_exit();
        }
    }
}

pub(crate) fn handle_reopen(app_handle: &AppHandle) {
    match decide_reopen(main_window::open_window_count(app_handle)) {
        ReopenDecision::FocusExisting => {
            main_window::focus_main_window(app_handle, append_desktop_log);
        }
        ReopenDecision::CreateWindow => {
            let config = app_handle.state::<ShellConfig>();
            if let Err(error) =
                main_window::create_main_window(app_handle, &config, append_desktop_log)
            {
                append_desktop_log(&format!("failed to recreate main window on reopen: {error}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_windows_closed_exits_except_on_macos() {
        assert_eq!(
            decide_all_windows_closed("linux"),
            WindowsClosedDecision::Exit
        );
        assert_eq!(
            decide_all_windows_closed("windows"),
            WindowsClosedDecision::Exit
        );
        assert_eq!(
            decide_all_windows_closed("macos"),
            WindowsClosedDecision::KeepRunning
        );
    }

    #[test]
    fn reopen_creates_window_only_when_none_are_open() {
        assert_eq!(decide_reopen(0), ReopenDecision::CreateWindow);
        assert_eq!(decide_reopen(1), ReopenDecision::FocusExisting);
        assert_eq!(decide_reopen(3), ReopenDecision::FocusExisting);
    }
}
