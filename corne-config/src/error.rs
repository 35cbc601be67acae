//! Error type of corne-config
//!
//! Every failure while reading `keyboard.toml` or turning it into a keymap is reported
//! as a [`ConfigError`], nothing in this crate panics on bad input.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File I/O error
    FileRead { path: String, message: String },
    /// TOML parsing error
    TomlParse { path: String, message: String },
    /// Missing required field
    MissingField { field: String },
    /// `layout.matrix_map` has a syntax error, a coordinate out of bounds or a duplicate coordinate
    InvalidMatrixMap { message: String },
    /// A key entry is syntactically wrong, e.g. `WM(A)`
    InvalidKey { key: String, message: String },
    /// A key name which isn't a known keycode or alias
    UnknownKeycode { key: String },
    /// A layer action references a layer name which isn't defined
    UnknownLayerName { name: String },
    DuplicateLayerName { name: String },
    /// `@alias` without a definition in `[aliases]`
    UndefinedAlias { alias: String },
    /// Alias resolution didn't terminate, usually aliases referencing each other
    AliasDepthExceeded { keys: String },
    /// A layer has more keys than `layout.matrix_map` has coordinates
    TooManyKeys { layer: usize, max: usize },
    /// More `[[layer]]` entries than `layout.layers`
    TooManyLayers { found: usize, max: usize },
    /// Generic validation error
    Validation { field: String, message: String },
    TransparentOnDefaultLayer { row: u8, col: u8 },
    LayerOutOfRange { layer: usize, row: u8, col: u8, target: u8 },
    EncoderLayerOutOfRange { layer: usize, encoder: usize, target: u8 },
    /// All layers which bind encoders must bind the same number of them
    EncoderCountMismatch { layer: usize, expected: usize, found: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::TomlParse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::MissingField { field } => write!(f, "Missing required field: {}", field),
            ConfigError::InvalidMatrixMap { message } => {
                write!(f, "keyboard.toml: Error in `layout.matrix_map`: {}", message)
            }
            ConfigError::InvalidKey { key, message } => {
                write!(f, "keyboard.toml: Invalid key '{}': {}", key, message)
            }
            ConfigError::UnknownKeycode { key } => write!(f, "keyboard.toml: Unknown keycode '{}'", key),
            ConfigError::UnknownLayerName { name } => write!(f, "keyboard.toml: Invalid layer name: {}", name),
            ConfigError::DuplicateLayerName { name } => {
                write!(f, "keyboard.toml: Duplicate layer name '{}' found in [[layer]]", name)
            }
            ConfigError::UndefinedAlias { alias } => write!(f, "keyboard.toml: Undefined alias: {}", alias),
            ConfigError::AliasDepthExceeded { keys } => write!(
                f,
                "keyboard.toml: Alias resolution exceeded maximum depth, potential infinite loop detected in '{}'",
                keys
            ),
            ConfigError::TooManyKeys { layer, max } => write!(
                f,
                "keyboard.toml: layer #{} contains too many entries, layout.matrix_map has {} keys",
                layer, max
            ),
            ConfigError::TooManyLayers { found, max } => write!(
                f,
                "keyboard.toml: Number of [[layer]] entries ({}) is larger than layout.layers ({})",
                found, max
            ),
            ConfigError::Validation { field, message } => {
                write!(f, "Validation error in '{}': {}", field, message)
            }
            ConfigError::TransparentOnDefaultLayer { row, col } => write!(
                f,
                "keyboard.toml: Transparent key at ({}, {}) on layer 0, the default layer can't fall through",
                row, col
            ),
            ConfigError::LayerOutOfRange { layer, row, col, target } => write!(
                f,
                "keyboard.toml: Key ({}, {}) on layer {} references invalid layer {}",
                row, col, layer, target
            ),
            ConfigError::EncoderLayerOutOfRange { layer, encoder, target } => write!(
                f,
                "keyboard.toml: Encoder {} on layer {} references invalid layer {}",
                encoder, layer, target
            ),
            ConfigError::EncoderCountMismatch { layer, expected, found } => write!(
                f,
                "keyboard.toml: Layer {} binds {} encoders, expected {}",
                layer, found, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
