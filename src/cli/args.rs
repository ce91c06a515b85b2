use clap::Parser;
use std::path::PathBuf;

/// Command line arguments for SerialPick
#[derive(Parser, Debug)]
#[command(
    name = "serialpick",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pick a serial device and baud rate, then open it in a terminal program",
    long_about = "Lists serial devices such as /dev/ttyUSB* and /dev/ttyACM*, asks for a \
                  device and a baud rate, and hands the session over to an external \
                  terminal program (screen by default)."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["serialpick"]).unwrap();
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_config_path() {
        let args =
            Args::try_parse_from(["serialpick", "-v", "--config", "/tmp/pick.toml"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pick.toml")));
    }

    #[test]
    fn test_rejects_positional() {
        assert!(Args::try_parse_from(["serialpick", "/dev/ttyUSB0"]).is_err());
        assert!(Args::try_parse_from(["serialpick", "-v", "-q"]).is_err());
    }
}
