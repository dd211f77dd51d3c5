//! Dev-loop helper: waits for the UI dev server to accept TCP connections and
//! then starts the desktop shell exactly once.

pub mod config;
pub mod connector;
pub mod launcher;
pub mod poller;
pub mod retry;

pub use config::{ConnectionTarget, LaunchCommand, PollerConfig};
pub use connector::{Connector, TcpConnector};
pub use launcher::{CommandLauncher, Launcher};
pub use poller::{PollOutcome, PollerState, ReadinessPoller, TickOutcome};
pub use retry::{CancelToken, RetryOutcome, RetryPolicy, Sleeper, ThreadSleeper};
