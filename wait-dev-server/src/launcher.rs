use std::process::{Child, Command, ExitStatus, Stdio};

use crate::config::{LaunchCommand, START_URL_ENV};

/// Starts the desktop shell once the dev server is reachable.
pub trait Launcher {
    fn launch(&mut self, start_url: &str) -> Result<(), String>;
}

#[derive(Debug)]
pub struct CommandLauncher {
    command: LaunchCommand,
    child: Option<Child>,
}

impl CommandLauncher {
    pub fn new(command: LaunchCommand) -> Self {
        Self {
            command,
            child: None,
        }
    }

    /// Blocks until the launched shell exits. `None` when nothing was spawned.
    pub fn wait(&mut self) -> Option<Result<ExitStatus, String>> {
        let child = self.child.as_mut()?;
        Some(
            child
                .wait()
                .map_err(|error| format!("Failed to wait for desktop shell: {error}")),
        )
    }
}

impl Launcher for CommandLauncher {
    fn launch(&mut self, start_url: &str) -> Result<(), String> {
        if self.child.is_some() {
            return Ok(());
        }

        let child = Command::new(&self.command.program)
            .args(&self.command.args)
            .env(START_URL_ENV, start_url)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|error| {
                format!(
                    "Failed to spawn desktop shell with command {:?}: {}",
                    self.command.debug_parts(),
                    error
                )
            })?;
        self.child = Some(child);
        Ok(())
    }
}
