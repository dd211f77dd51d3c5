use tauri::{AppHandle, Manager, WebviewWindow, WebviewWindowBuilder};

use crate::{desktop_bridge, shell_config::ShellConfig, MAIN_WINDOW_LABEL};

pub(crate) fn open_window_count(app_handle: &AppHandle) -> usize {
    app_handle.webview_windows().len()
}

pub(crate) fn create_main_window<F>(
    app_handle: &AppHandle,
    config: &ShellConfig,
    log: F,
) -> Result<WebviewWindow, String>
where
    F: Fn(&str),
{
    if let Some(existing) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        log("main window already exists, reusing it");
        return Ok(existing);
    }

    log(&format!(
        "creating main window ({}x{}) from {}",
        config.width,
        config.height,
        config.content_source.describe()
    ));
    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        config.content_source.webview_url(),
    )
    .title(&config.title)
    .inner_size(config.width, config.height)
    .initialization_script(&desktop_bridge::bridge_script())
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;

    if config.open_devtools {
        open_inspector(&window, &log);
    }

    Ok(window)
}

#[cfg(any(debug_assertions, feature = "devtools"))]
fn open_inspector<F>(window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    log("opening webview inspector");
    window.open_devtools();
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
fn open_inspector<F>(_window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    log("webview inspector requested but this build has no devtools support");
}

pub(crate) fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
