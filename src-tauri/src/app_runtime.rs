use tauri::{webview::PageLoadEvent, Manager, RunEvent};

use crate::{
    append_desktop_log, append_startup_log, exit_events, logging, main_window,
    shell_config::ShellConfig,
};

pub(crate) fn run() {
    let shell_config = ShellConfig::from_env();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            append_desktop_log("second instance launched, reusing existing desktop process");
            exit_events::handle_reopen(app);
        }))
        .plugin(logging::build_log_plugin())
        .manage(shell_config)
        // Channels are registered here, before `setup` creates the window.
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::get_app_info,
            crate::desktop_bridge_commands::test_message,
        ])
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!(
                    "page-load started in {}: {}",
                    webview.label(),
                    payload.url()
                ));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!(
                    "page-load finished in {}: {}",
                    webview.label(),
                    payload.url()
                ));
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            append_startup_log(&format!(
                "desktop process starting: version={} packaged={}",
                app_handle.package_info().version,
                !tauri::is_dev()
            ));

            let config = app_handle.state::<ShellConfig>();
            if let Err(error) =
                main_window::create_main_window(&app_handle, &config, append_startup_log)
            {
                append_startup_log(&error);
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(code, &api);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                exit_events::handle_reopen(app_handle);
            }
            RunEvent::Exit => {
                append_desktop_log(&format!(
                    "desktop process exiting with {} open window(s)",
                    main_window::open_window_count(app_handle)
                ));
            }
            _ => {}
        });
}
