//! The fixed set of channels the UI sandbox can address.
//!
//! The injected bridge script is generated from [`BridgeChannel`]; the tests
//! below keep the `build.rs` command manifest and both capability files in
//! step with it.

use serde::Serialize;

use crate::ChannelKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BridgeChannel {
    GetAppInfo,
    TestMessage,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChannelDescriptor {
    pub(crate) command: &'static str,
    pub(crate) kind: ChannelKind,
    pub(crate) args: &'static [&'static str],
}

impl BridgeChannel {
    pub(crate) const ALL: [BridgeChannel; 2] =
        [BridgeChannel::GetAppInfo, BridgeChannel::TestMessage];

    pub(crate) fn name(self) -> &'static str {
        match self {
            BridgeChannel::GetAppInfo => "get-app-info",
            BridgeChannel::TestMessage => "test-message",
        }
    }

    /// Name of the `#[tauri::command]` serving this channel.
    pub(crate) fn command(self) -> &'static str {
        match self {
            BridgeChannel::GetAppInfo => "get_app_info",
            BridgeChannel::TestMessage => "test_message",
        }
    }

    pub(crate) fn kind(self) -> ChannelKind {
        match self {
            BridgeChannel::GetAppInfo => ChannelKind::Invoke,
            BridgeChannel::TestMessage => ChannelKind::Send,
        }
    }

    /// Command parameter names, in the positional order the UI passes them.
    pub(crate) fn arg_names(self) -> &'static [&'static str] {
        match self {
            BridgeChannel::GetAppInfo => &[],
            BridgeChannel::TestMessage => &["payload"],
        }
    }

    pub(crate) fn descriptor(self) -> ChannelDescriptor {
        ChannelDescriptor {
            command: self.command(),
            kind: self.kind(),
            args: self.arg_names(),
        }
    }
}
