pub mod common;

use corne_config::{ConfigError, ConfigLoader, KeyboardTomlConfig};
use corne_keymap::corne::{COL, ENCODER_MAP, KEYMAP, NUM_ENCODER, NUM_LAYER, ROW};
use corne_keymap::{k, shifted};

const KEYBOARD_TOML: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/keyboard.toml");

#[test]
fn test_keyboard_toml_matches_keymap() {
    let config = ConfigLoader::load(KEYBOARD_TOML).unwrap();
    let layout = config.get_layout_config().unwrap();

    assert_eq!(layout.rows as usize, ROW);
    assert_eq!(layout.cols as usize, COL);
    assert_eq!(layout.layers as usize, NUM_LAYER);
    for (layer_idx, layer) in KEYMAP.iter().enumerate() {
        for (row_idx, row) in layer.iter().enumerate() {
            for (col_idx, action) in row.iter().enumerate() {
                assert_eq!(
                    layout.keymap[layer_idx][row_idx][col_idx], *action,
                    "mismatch at layer {} ({}, {})",
                    layer_idx, row_idx, col_idx
                );
            }
        }
    }
}

#[test]
fn test_keyboard_toml_matches_encoder_map() {
    let config = ConfigLoader::load(KEYBOARD_TOML).unwrap();
    let layout = config.get_layout_config().unwrap();

    assert_eq!(layout.encoder_map.len(), NUM_LAYER);
    for (layer_idx, encoders) in ENCODER_MAP.iter().enumerate() {
        assert_eq!(layout.encoder_map[layer_idx].len(), NUM_ENCODER);
        assert_eq!(layout.encoder_map[layer_idx].as_slice(), encoders.as_slice());
    }
}

#[test]
fn test_aliases_resolve_to_shifted_keys() {
    let config = ConfigLoader::load(KEYBOARD_TOML).unwrap();
    let layout = config.get_layout_config().unwrap();

    // `@exlm` and `@tild` on the symbol layer
    assert_eq!(layout.keymap[2][0][1], shifted!(Kc1));
    assert_eq!(layout.keymap[2][6][0], shifted!(Grave));
    assert_eq!(layout.keymap[2][5][0], k!(NonusBackslash));
}

#[test]
fn test_config_without_layout_is_rejected() {
    // Without the loader, the crkbd defaults aren't merged
    let config = KeyboardTomlConfig::from_toml_str("[[layer]]\nkeys = \"A\"\n").unwrap();
    assert_eq!(
        config.get_layout_config(),
        Err(ConfigError::MissingField {
            field: "layout".to_string()
        })
    );
}
