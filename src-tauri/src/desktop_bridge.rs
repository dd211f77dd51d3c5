use std::collections::BTreeMap;

use crate::{bridge_channels::BridgeChannel, CHANNEL_GLOBAL, PING_GLOBAL, PING_REPLY};

const BRIDGE_TEMPLATE: &str = include_str!("desktop_bridge.js");

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

pub(crate) fn channel_table_json() -> String {
    let table: BTreeMap<&'static str, _> = BridgeChannel::ALL
        .into_iter()
        .map(|channel| (channel.name(), channel.descriptor()))
        .collect();

    match serde_json::to_string(&table) {
        Ok(json) => json,
        Err(error) => {
            crate::append_bridge_log(&format!("failed to serialize bridge channel table: {error}"));
            "{}".to_string()
        }
    }
}

/// Initialization script installed on every page of the main window, before
/// any page script runs.
pub(crate) fn bridge_script() -> String {
    BRIDGE_TEMPLATE
        .replace("__CHANNEL_TABLE__", &channel_table_json())
        .replace("__PING_GLOBAL__", &js_string(PING_GLOBAL))
        .replace("__CHANNEL_GLOBAL__", &js_string(CHANNEL_GLOBAL))
        .replace("__PING_REPLY__", &js_string(PING_REPLY))
}
