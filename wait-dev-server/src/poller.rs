use crate::{
    config::PollerConfig,
    connector::Connector,
    launcher::Launcher,
    retry::{self, CancelToken, RetryOutcome, RetryPolicy, Sleeper},
};

/// Launch latch. Once set it is never cleared for the lifetime of the poller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PollerState {
    pub launched: bool,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    NotReady,
    Launched,
    LaunchFailed(String),
    AlreadyLaunched,
}

impl TickOutcome {
    fn is_ready(&self) -> bool {
        !matches!(self, TickOutcome::NotReady)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Ready { attempts: u32, tick: TickOutcome },
    GaveUp { attempts: u32 },
    Cancelled { attempts: u32 },
}

pub struct ReadinessPoller<C, L> {
    config: PollerConfig,
    connector: C,
    launcher: L,
    state: PollerState,
}

impl<C, L> ReadinessPoller<C, L>
where
    C: Connector,
    L: Launcher,
{
    pub fn new(config: PollerConfig, connector: C, launcher: L) -> Self {
        Self {
            config,
            connector,
            launcher,
            state: PollerState::default(),
        }
    }

    pub fn state(&self) -> PollerState {
        self.state
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn launcher_mut(&mut self) -> &mut L {
        &mut self.launcher
    }

    /// One connection attempt. Errors of any kind mean "not ready yet".
    pub fn tick(&mut self) -> TickOutcome {
        self.state.attempts = self.state.attempts.saturating_add(1);
        if let Err(error) = self.connector.connect(&self.config.target) {
            log::debug!(
                "dev server {}:{} not ready (attempt {}): {error}",
                self.config.target.host,
                self.config.target.port,
                self.state.attempts
            );
            return TickOutcome::NotReady;
        }

        if self.state.launched {
            return TickOutcome::AlreadyLaunched;
        }
        self.state.launched = true;

        log::info!(
            "dev server reachable at {}; starting desktop shell: {:?}",
            self.config.start_url,
            self.config.launch_command.debug_parts()
        );
        match self.launcher.launch(&self.config.start_url) {
            Ok(()) => TickOutcome::Launched,
            Err(error) => {
                log::error!("{error}");
                TickOutcome::LaunchFailed(error)
            }
        }
    }

    /// Production loop: retry forever with the configured fixed delay.
    pub fn run<S>(&mut self, sleeper: &S, cancel: &CancelToken) -> PollOutcome
    where
        S: Sleeper + ?Sized,
    {
        let policy = RetryPolicy::unbounded(self.config.retry_delay);
        self.run_with_policy(&policy, sleeper, cancel)
    }

    pub fn run_with_policy<S>(
        &mut self,
        policy: &RetryPolicy,
        sleeper: &S,
        cancel: &CancelToken,
    ) -> PollOutcome
    where
        S: Sleeper + ?Sized,
    {
        log::info!(
            "waiting for dev server at {}:{}",
            self.config.target.host,
            self.config.target.port
        );
        let outcome = retry::retry(policy, sleeper, cancel, |_| {
            let tick = self.tick();
            if tick.is_ready() {
                Ok(tick)
            } else {
                Err(())
            }
        });

        match outcome {
            RetryOutcome::Succeeded { value, attempts } => PollOutcome::Ready {
                attempts,
                tick: value,
            },
            RetryOutcome::Exhausted { attempts } => PollOutcome::GaveUp { attempts },
            RetryOutcome::Cancelled { attempts } => PollOutcome::Cancelled { attempts },
        }
    }
}
