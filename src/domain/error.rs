use thiserror::Error;

/// SerialPick unified error type
#[derive(Error, Debug)]
pub enum SerialPickError {
    #[error("No serial devices found")]
    NoDevicesFound,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to launch '{program}': {message}")]
    Launch { program: String, message: String },

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SerialPickResult<T> = Result<T, SerialPickError>;
