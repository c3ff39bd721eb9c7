use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".grmod.json";

/// Tool locations and behavior toggles, read from `.grmod.json` at or
/// above the working directory. Every field has a default, so a missing
/// file means a default configuration rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Flowgraph editor executable.
    pub companion_cmd: String,
    /// Flowgraph compiler executable.
    pub compiler_cmd: String,
    /// Scaffold tool executable.
    pub modtool_cmd: String,
    /// Hint about legacy XML definitions in informational commands.
    pub check_xml: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            companion_cmd: "gnuradio-companion".to_string(),
            compiler_cmd: "grcc".to_string(),
            modtool_cmd: "gr_modtool".to_string(),
            check_xml: true,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Configuration for `start_path`: the nearest `.grmod.json`, or the
    /// defaults when none exists.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.companion_cmd, "gnuradio-companion");
        assert_eq!(config.compiler_cmd, "grcc");
        assert_eq!(config.modtool_cmd, "gr_modtool");
        assert!(config.check_xml);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"modtool_cmd": "/opt/gr/bin/gr_modtool"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.modtool_cmd, "/opt/gr/bin/gr_modtool");
        assert_eq!(config.compiler_cmd, "grcc");
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("lib/deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"{"check_xml": false}"#,
        )
        .unwrap();

        let config = Config::load(&nested).unwrap();
        assert!(!config.check_xml);
    }

    #[test]
    fn test_invalid_file_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        let mut config = Config::default();
        config.compiler_cmd = "/usr/local/bin/grcc".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.compiler_cmd, config.compiler_cmd);
    }
}
