use std::process::ExitCode;

use wait_dev_server::{
    CancelToken, CommandLauncher, PollOutcome, PollerConfig, ReadinessPoller, TcpConnector,
    ThreadSleeper,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match PollerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("failed to resolve poller configuration: {error}");
            return ExitCode::FAILURE;
        }
    };

    let connector = TcpConnector::new(config.connect_timeout);
    let launcher = CommandLauncher::new(config.launch_command.clone());
    let mut poller = ReadinessPoller::new(config, connector, launcher);

    match poller.run(&ThreadSleeper, &CancelToken::new()) {
        PollOutcome::Ready { attempts, .. } => {
            log::debug!("dev server became reachable after {attempts} attempt(s)");
        }
        PollOutcome::GaveUp { attempts } | PollOutcome::Cancelled { attempts } => {
            log::warn!("stopped waiting for dev server after {attempts} attempt(s)");
            return ExitCode::FAILURE;
        }
    }

    // Stay alive alongside the shell so process managers keep the group running.
    match poller.launcher_mut().wait() {
        Some(Ok(status)) => {
            log::info!("desktop shell exited: {status}");
            if status.success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Some(Err(error)) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
        None => ExitCode::FAILURE,
    }
}
