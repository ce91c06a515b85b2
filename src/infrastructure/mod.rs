// Infrastructure module - External dependencies and adapters
pub mod config;
pub mod launcher;
pub mod logging;
