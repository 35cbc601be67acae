//! Built-in defaults merged under the user's keyboard.toml

/// Geometry of the crkbd `split_3x6_3_ex2` layout
pub const CRKBD_DEFAULT_CONFIG: &str = include_str!("default_config/crkbd.toml");
