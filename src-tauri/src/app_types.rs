use std::env;

use serde::Serialize;

/// Snapshot returned by the `get-app-info` channel. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostInfo {
    pub(crate) tauri_version: String,
    pub(crate) webview_version: String,
    pub(crate) app_version: String,
    pub(crate) is_packaged: bool,
    pub(crate) platform: String,
    pub(crate) arch: String,
}

impl HostInfo {
    pub(crate) fn collect(app_version: String, is_packaged: bool) -> Self {
        let webview_version = match tauri::webview_version() {
            Ok(version) => version,
            Err(error) => {
                crate::append_bridge_log(&format!("failed to read webview version: {error}"));
                "unknown".to_string()
            }
        };

        Self {
            tauri_version: tauri::VERSION.to_string(),
            webview_version,
            app_version,
            is_packaged,
            platform: env::consts::OS.to_string(),
            arch: env::consts::ARCH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ChannelKind {
    Invoke,
    Send,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_info_serializes_all_six_fields_in_camel_case() {
        let info = HostInfo {
            tauri_version: "2.0.0".to_string(),
            webview_version: "120.0".to_string(),
            app_version: "0.1.0".to_string(),
            is_packaged: true,
            platform: "linux".to_string(),
            arch: "x86_64".to_string(),
        };

        let value = serde_json::to_value(&info).expect("host info should serialize");
        let object = value.as_object().expect("host info should be an object");

        assert_eq!(object.len(), 6);
        for key in [
            "tauriVersion",
            "webviewVersion",
            "appVersion",
            "isPackaged",
            "platform",
            "arch",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(value["isPackaged"], serde_json::Value::Bool(true));
    }

    #[test]
    fn host_info_collect_reports_current_platform_and_flag() {
        let info = HostInfo::collect("1.2.3".to_string(), false);

        assert_eq!(info.app_version, "1.2.3");
        assert!(!info.is_packaged);
        assert_eq!(info.platform, env::consts::OS);
        assert_eq!(info.arch, env::consts::ARCH);
        assert_eq!(info.tauri_version, tauri::VERSION);
        assert!(!info.webview_version.is_empty());
    }

    #[test]
    fn channel_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChannelKind::Invoke).unwrap(),
            "\"invoke\""
        );
        assert_eq!(serde_json::to_string(&ChannelKind::Send).unwrap(), "\"send\"");
    }
}
