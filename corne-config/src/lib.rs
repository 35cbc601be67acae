//! # corne-config
//!
//! Reads the crkbd keymap from `keyboard.toml`.
//!
//! ```no_run
//! use corne_config::ConfigLoader;
//!
//! let config = ConfigLoader::load("keyboard.toml").unwrap();
//! let layout = config.get_layout_config().unwrap();
//! ```

use std::collections::HashMap;

use corne_types::action::{EncoderAction, KeyAction};
use serde_derive::Deserialize;

pub mod action_parser;
pub mod default_config;
pub mod error;
pub mod keycode_alias;
pub mod layout;
pub mod loader;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::KEYCODE_ALIAS;
pub use loader::ConfigLoader;

/// Configurations of the keyboard, as written in keyboard.toml
#[derive(Clone, Debug, Deserialize)]
pub struct KeyboardTomlConfig {
    /// Basic keyboard info
    keyboard: Option<KeyboardInfo>,
    // Aliases for key maps
    aliases: Option<HashMap<String, String>>,
    // Layers of key maps
    layer: Option<Vec<LayerTomlConfig>>,
    /// Layout config
    layout: Option<LayoutTomlConfig>,
}

impl KeyboardTomlConfig {
    /// Parse a complete keyboard.toml document, without the built-in defaults
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: "<string>".to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn keyboard(&self) -> Option<&KeyboardInfo> {
        self.keyboard.as_ref()
    }
}

/// Configurations for keyboard info
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyboardInfo {
    /// Keyboard name
    pub name: String,
    pub manufacturer: Option<String>,
}

/// Configurations for keyboard layout
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutTomlConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
    /// Matrix coordinates of the keys, in the order they're listed in `[[layer]].keys`
    pub matrix_map: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LayerTomlConfig {
    pub name: Option<String>,
    pub keys: String,
    /// `[clockwise, counter-clockwise]` of every encoder
    pub encoders: Option<Vec<[String; 2]>>,
}

/// Keymap parsed from keyboard.toml
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub rows: u8,
    pub cols: u8,
    pub layers: u8,
    /// Indexed by `[layer][row][col]`
    pub keymap: Vec<Vec<Vec<KeyAction>>>,
    /// Indexed by `[layer][encoder]`, every layer has the same number of encoders
    pub encoder_map: Vec<Vec<EncoderAction>>,
}
