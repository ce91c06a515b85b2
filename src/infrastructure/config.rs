use crate::domain::{
    config::SerialPickConfig,
    error::{SerialPickError, SerialPickResult},
};
use std::path::{Path, PathBuf};
use std::fs;
use tracing::debug;

/// Configuration manager
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> SerialPickResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Create a configuration manager over explicit file locations
    pub fn with_paths(global_config_path: PathBuf, project_config_path: Option<PathBuf>) -> Self {
        Self {
            global_config_path,
            project_config_path,
        }
    }

    /// Load configuration from files
    pub fn load_config(&self) -> SerialPickResult<SerialPickConfig> {
        // Start with default configuration
        let mut config = SerialPickConfig::default();

        if self.global_config_path.exists() {
            debug!("Loading global config from {}", self.global_config_path.display());
            config = self.load_config_from_path(&self.global_config_path)?;
        }

        // Sections present in the project file replace the global ones
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                debug!("Merging project config from {}", project_path.display());
                let table = Self::read_table(project_path)?;
                Self::merge_sections(&mut config, table, project_path)?;
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> SerialPickResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| SerialPickError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("serialpick").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".serialpick").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> SerialPickResult<SerialPickConfig> {
        let content = Self::read_file(path)?;

        toml::from_str(&content).map_err(|e| SerialPickError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    fn read_file(path: &Path) -> SerialPickResult<String> {
        fs::read_to_string(path).map_err(|e| SerialPickError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })
    }

    fn read_table(path: &Path) -> SerialPickResult<toml::Table> {
        let content = Self::read_file(path)?;

        content.parse::<toml::Table>().map_err(|e| SerialPickError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    fn merge_sections(
        config: &mut SerialPickConfig,
        table: toml::Table,
        path: &Path,
    ) -> SerialPickResult<()> {
        let invalid = |section: &str, e: toml::de::Error| SerialPickError::Config {
            message: format!("Invalid [{}] section in {}: {}", section, path.display(), e),
        };

        for (section, value) in table {
            match section.as_str() {
                "global" => {
                    config.global = value.try_into().map_err(|e| invalid("global", e))?
                }
                "discovery" => {
                    config.discovery = value.try_into().map_err(|e| invalid("discovery", e))?
                }
                "launcher" => {
                    config.launcher = value.try_into().map_err(|e| invalid("launcher", e))?
                }
                other => debug!("Ignoring unknown config section '{}'", other),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::DiscoveryMethod;
    use tempfile::TempDir;

    #[test]
    fn test_missing_files_give_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_paths(
            temp_dir.path().join("global.toml"),
            Some(temp_dir.path().join("project.toml")),
        );

        let config = manager.load_config().unwrap();
        assert_eq!(config.launcher.program, "screen");
        assert_eq!(config.global.log_level, "warn");
    }

    #[test]
    fn test_project_overrides_global_sections() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let project = temp_dir.path().join("project.toml");

        fs::write(
            &global,
            "[global]\nlog_level = \"debug\"\n\n[launcher]\nprogram = \"minicom\"\n",
        )
        .unwrap();
        fs::write(
            &project,
            "[launcher]\nprogram = \"picocom\"\n\n[discovery]\nmethod = \"system\"\n",
        )
        .unwrap();

        let manager = ConfigManager::with_paths(global, Some(project));
        let config = manager.load_config().unwrap();

        assert_eq!(config.global.log_level, "debug");
        assert_eq!(config.launcher.program, "picocom");
        assert_eq!(config.discovery.method, DiscoveryMethod::System);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[discovery\nmethod = ").unwrap();

        let manager = ConfigManager::with_paths(path.clone(), None);
        let result = manager.load_config_from_path(&path);
        assert!(matches!(result, Err(SerialPickError::Config { .. })));
    }

    #[test]
    fn test_invalid_project_section() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("project.toml");
        fs::write(&project, "[discovery]\nmethod = \"bluetooth\"\n").unwrap();

        let manager = ConfigManager::with_paths(temp_dir.path().join("none.toml"), Some(project));
        let err = manager.load_config().unwrap_err();
        assert!(err.to_string().contains("[discovery]"));
    }
}
