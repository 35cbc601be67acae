// Configuration loader with two-pass loading

use std::path::Path;

use config::{Config, File, FileFormat};

use crate::KeyboardTomlConfig;
use crate::default_config::CRKBD_DEFAULT_CONFIG;
use crate::error::{ConfigError, ConfigResult};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load keyboard configuration with two-pass approach:
    ///
    /// **Pass 1**: Read and parse the user config alone, so that errors point at the user's file
    /// **Pass 2**: Merge the crkbd defaults with the user config
    ///
    /// The defaults provide the keyboard name and the matrix geometry, so a keyboard.toml
    /// only needs `[[layer]]` entries.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use corne_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("keyboard.toml").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<KeyboardTomlConfig> {
        let path = path.as_ref();
        // Pass 1: Check the user config
        let content = Self::load_user_config(path)?;

        // Pass 2: Merge defaults with user config
        Self::merge_configs(CRKBD_DEFAULT_CONFIG, &content, path)
    }

    /// Load user configuration file (first pass)
    fn load_user_config(path: &Path) -> ConfigResult<String> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str::<toml::Table>(&content).map_err(|e| ConfigError::TomlParse {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })?;
        Ok(content)
    }

    /// Merge defaults with user config (second pass)
    fn merge_configs(default_str: &str, user_str: &str, user_path: &Path) -> ConfigResult<KeyboardTomlConfig> {
        let merge_error = |e: config::ConfigError| ConfigError::TomlParse {
            path: user_path.display().to_string(),
            message: format!("Failed to merge configs: {}", e),
        };
        Config::builder()
            .add_source(File::from_str(default_str, FileFormat::Toml))
            .add_source(File::from_str(user_str, FileFormat::Toml))
            .build()
            .map_err(merge_error)?
            .try_deserialize()
            .map_err(merge_error)
    }
}
