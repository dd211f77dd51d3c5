use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

/// How often and how many times an operation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn unbounded(delay: Duration) -> Self {
        Self {
            max_attempts: None,
            delay,
        }
    }

    pub fn bounded(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            delay,
        }
    }

    fn allows_attempt(&self, attempt: u32) -> bool {
        self.max_attempts.map_or(true, |limit| attempt <= limit)
    }
}

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    Succeeded { value: T, attempts: u32 },
    Exhausted { attempts: u32 },
    Cancelled { attempts: u32 },
}

/// Runs `operation` until it returns `Ok`, sleeping `policy.delay` after every
/// failed attempt. Attempts are numbered from 1.
pub fn retry<T, E, S, F>(
    policy: &RetryPolicy,
    sleeper: &S,
    cancel: &CancelToken,
    mut operation: F,
) -> RetryOutcome<T>
where
    S: Sleeper + ?Sized,
    F: FnMut(u32) -> Result<T, E>,
{
    let mut attempts = 0_u32;
    loop {
        if cancel.is_cancelled() {
            return RetryOutcome::Cancelled { attempts };
        }

        let next_attempt = attempts.saturating_add(1);
        if !policy.allows_attempt(next_attempt) {
            return RetryOutcome::Exhausted { attempts };
        }
        attempts = next_attempt;

        match operation(attempts) {
            Ok(value) => return RetryOutcome::Succeeded { value, attempts },
            Err(_) => {
                if policy.allows_attempt(attempts.saturating_add(1)) {
                    sleeper.sleep(policy.delay);
                }
            }
        }
    }
}
