// SerialPick - Interactive serial device picker
use clap::Parser;
use serialpick::cli::{execute, Args};

fn main() {
    let args = Args::parse();

    match execute(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
