use crate::domain::{
    config::LauncherConfig,
    error::{SerialPickError, SerialPickResult},
};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Hands an interactive session over to some terminal program.
pub trait SessionLauncher {
    /// Block until the session ends and return its exit code.
    fn launch_session(&self, device: &str, baud_rate: u32) -> SerialPickResult<i32>;
}

/// Runs an external program as `program [args..] <device> <baud>`
#[derive(Debug, Clone)]
pub struct ExternalLauncher {
    program: String,
    args: Vec<String>,
}

impl ExternalLauncher {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list passed to the program
    pub fn command_args(&self, device: &str, baud_rate: u32) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(device.to_string());
        args.push(baud_rate.to_string());
        args
    }
}

impl SessionLauncher for ExternalLauncher {
    fn launch_session(&self, device: &str, baud_rate: u32) -> SerialPickResult<i32> {
        let args = self.command_args(device, baud_rate);
        info!("Launching {} {}", self.program, args.join(" "));

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| SerialPickError::Launch {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        match status.code() {
            Some(code) => {
                debug!("{} exited with status {}", self.program, code);
                Ok(code)
            }
            None => {
                warn!("{} was terminated by a signal", self.program);
                Ok(1)
            }
        }
    }
}
