use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SerialPick configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialPickConfig {
    /// Global configuration
    pub global: GlobalConfig,
    /// Device discovery settings
    pub discovery: DiscoveryConfig,
    /// External terminal program settings
    pub launcher: LauncherConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// How device nodes are discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMethod {
    /// Match entries of `device_dir` against the configured prefixes
    Glob,
    /// Ask the operating system for its serial ports
    System,
}

/// Device discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_discovery_method")]
    pub method: DiscoveryMethod,
    /// Directory holding device nodes
    #[serde(default = "default_device_dir")]
    pub device_dir: PathBuf,
    /// File name prefixes, matched in order
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

/// External terminal program configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Program that takes over the session
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the device path and baud rate
    #[serde(default)]
    pub args: Vec<String>,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_discovery_method() -> DiscoveryMethod {
    DiscoveryMethod::Glob
}

fn default_device_dir() -> PathBuf {
    PathBuf::from("/dev")
}

fn default_prefixes() -> Vec<String> {
    vec!["ttyUSB".to_string(), "ttyACM".to_string()]
}

fn default_program() -> String {
    "screen".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            method: default_discovery_method(),
            device_dir: default_device_dir(),
            prefixes: default_prefixes(),
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
        }
    }
}

impl std::fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryMethod::Glob => write!(f, "glob"),
            DiscoveryMethod::System => write!(f, "system"),
        }
    }
}
