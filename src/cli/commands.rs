use crate::cli::args::Args;
use crate::core::{enumerate_devices, Picker};
use crate::domain::config::SerialPickConfig;
use crate::domain::error::SerialPickResult;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::launcher::ExternalLauncher;
use crate::infrastructure::logging::init_logging;
use std::io;

/// Run the interactive picker and return the process exit code
pub fn execute(args: Args) -> SerialPickResult<i32> {
    let config = load_config(&args)?;

    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose)?;
    }

    let devices = enumerate_devices(&config.discovery)?;
    let picker = Picker::new(ExternalLauncher::from_config(&config.launcher));

    let mut answers = answer_source()?;
    let stdout = io::stdout();
    picker.run(&devices, &mut answers, &mut stdout.lock())
}

/// Unbuffered handle on stdin, so the terminal program sees input typed ahead
#[cfg(unix)]
fn answer_source() -> SerialPickResult<std::fs::File> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(std::fs::File::from(fd))
}

#[cfg(not(unix))]
fn answer_source() -> SerialPickResult<io::Stdin> {
    Ok(io::stdin())
}

fn load_config(args: &Args) -> SerialPickResult<SerialPickConfig> {
    let config_manager = ConfigManager::new()?;
    match &args.config {
        Some(config_path) => config_manager.load_config_from_path(config_path),
        None => config_manager.load_config(),
    }
}
