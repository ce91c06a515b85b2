use crate::domain::{
    config::{DiscoveryConfig, DiscoveryMethod},
    error::{SerialPickError, SerialPickResult},
};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// List serial device nodes according to the discovery settings.
///
/// Fails with [`SerialPickError::NoDevicesFound`] when nothing matches.
pub fn enumerate_devices(config: &DiscoveryConfig) -> SerialPickResult<Vec<String>> {
    let devices = match config.method {
        DiscoveryMethod::Glob => glob_devices(&config.device_dir, &config.prefixes),
        DiscoveryMethod::System => system_devices()?,
    };

    if devices.is_empty() {
        return Err(SerialPickError::NoDevicesFound);
    }

    info!("Found {} serial device(s) via {} discovery", devices.len(), config.method);
    Ok(devices)
}

/// Expand `<dir>/<prefix>*` for each prefix in turn.
///
/// Matches are sorted within a prefix, and prefixes keep their given order.
/// A missing or unreadable directory matches nothing. Names that are not
/// valid UTF-8 are still listed, converted lossily.
pub fn glob_devices(dir: &Path, prefixes: &[String]) -> Vec<String> {
    let names: Vec<OsString> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name())
            .collect(),
        Err(e) => {
            debug!("Cannot read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut devices = Vec::new();
    for prefix in prefixes {
        let mut matched: Vec<&OsString> = names
            .iter()
            .filter(|name| name.to_string_lossy().starts_with(prefix.as_str()))
            .collect();
        matched.sort();
        debug!("{}/{}* matched {} entries", dir.display(), prefix, matched.len());

        devices.extend(
            matched
                .into_iter()
                .map(|name| dir.join(name).to_string_lossy().into_owned()),
        );
    }

    devices
}

fn system_devices() -> SerialPickResult<Vec<String>> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|port| port.port_name).collect())
}
