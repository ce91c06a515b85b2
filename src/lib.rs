//! SerialPick Library
//!
//! Serial device discovery, numbered-menu selection of a device and baud
//! rate, and hand-off of the session to an external terminal program.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use domain::error::{SerialPickError, SerialPickResult};
pub use domain::config::SerialPickConfig;
pub use self::core::{enumerate_devices, Picker, BAUD_RATES};
pub use infrastructure::launcher::{ExternalLauncher, SessionLauncher};
