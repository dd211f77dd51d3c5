use std::{env, time::Duration};

use url::Url;

pub const BASE_PORT_ENV: &str = "PORT";
pub const LAUNCH_CMD_ENV: &str = "DESKTOP_LAUNCH_CMD";
pub const START_URL_ENV: &str = "DESKTOP_START_URL";

pub const DEFAULT_DEV_SERVER_PORT: u16 = 3000;
pub const DEFAULT_LAUNCH_CMD: &str = "cargo run --package desktop-scaffold --no-default-features";
pub const DEV_SERVER_HOST: &str = "localhost";
pub const RETRY_DELAY: Duration = Duration::from_secs(1);
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
}

impl ConnectionTarget {
    /// `http://<host>:<port>` without a trailing slash.
    pub fn start_url(&self) -> Result<String, String> {
        let raw = format!("http://{}:{}", self.host, self.port);
        Url::parse(&raw).map_err(|error| format!("Invalid start URL {raw}: {error}"))?;
        Ok(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let mut pieces =
            shlex::split(raw).ok_or_else(|| format!("Invalid launch command: {raw}"))?;
        if pieces.is_empty() {
            return Err("Launch command is empty.".to_string());
        }

        let program = pieces.remove(0);
        Ok(Self {
            program,
            args: pieces,
        })
    }

    pub fn debug_parts(&self) -> Vec<String> {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.clone());
        parts
    }
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub target: ConnectionTarget,
    pub start_url: String,
    pub launch_command: LaunchCommand,
    pub retry_delay: Duration,
    pub connect_timeout: Duration,
}

impl PollerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = derive_dev_server_port(lookup(BASE_PORT_ENV).as_deref());
        let target = ConnectionTarget {
            host: DEV_SERVER_HOST.to_string(),
            port,
        };
        let start_url = target.start_url()?;

        let launch_command = match lookup(LAUNCH_CMD_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            Some(custom) => LaunchCommand::parse(&custom).or_else(|error| {
                log::warn!("{error}; falling back to `{DEFAULT_LAUNCH_CMD}`");
                LaunchCommand::parse(DEFAULT_LAUNCH_CMD)
            })?,
            None => LaunchCommand::parse(DEFAULT_LAUNCH_CMD)?,
        };

        Ok(Self {
            target,
            start_url,
            launch_command,
            retry_delay: RETRY_DELAY,
            connect_timeout: CONNECT_TIMEOUT,
        })
    }
}

/// Process managers hand out consecutive ports, with the desktop process one
/// above the UI dev server.
pub fn derive_dev_server_port(base_port: Option<&str>) -> u16 {
    let Some(raw) = base_port.map(str::trim).filter(|value| !value.is_empty()) else {
        return DEFAULT_DEV_SERVER_PORT;
    };

    match raw.parse::<u16>() {
        Ok(port) if port > 0 => port - 1,
        _ => {
            log::warn!(
                "ignoring unusable {BASE_PORT_ENV}={raw:?}; using port {DEFAULT_DEV_SERVER_PORT}"
            );
            DEFAULT_DEV_SERVER_PORT
        }
    }
}
