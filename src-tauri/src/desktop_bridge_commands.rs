use serde_json::Value;
use tauri::{AppHandle, Manager, Runtime};

use crate::{append_bridge_log, HostInfo};

fn is_packaged_build() -> bool {
    !tauri::is_dev()
}

fn describe_payload(payload: Option<&Value>) -> String {
    match payload {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}

#[tauri::command]
pub(crate) fn get_app_info<R: Runtime>(app_handle: AppHandle<R>) -> HostInfo {
    HostInfo::collect(
        app_handle.package_info().version.to_string(),
        is_packaged_build(),
    )
}

/// `payload` is optional so `send("test-message")` with no argument is accepted.
#[tauri::command]
pub(crate) fn test_message(payload: Option<Value>) {
    append_bridge_log(&format!(
        "test-message received: {}",
        describe_payload(payload.as_ref())
    ));
}
