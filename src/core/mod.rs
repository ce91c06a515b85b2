// Core module - Device discovery and interactive selection
pub mod devices;
pub mod menu;
pub mod picker;

pub use devices::enumerate_devices;
pub use menu::{prompt_selection, BAUD_RATES};
pub use picker::Picker;
