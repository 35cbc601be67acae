//! Compile-time checks of keymap tables.
//!
//! Both checks are `const fn`, so a keymap can be rejected during the build:
//!
//! ```ignore
//! const _: () = assert!(check_keymap(&DEFAULT_KEYMAP).is_ok());
//! ```

use core::fmt;

use corne_types::action::{EncoderAction, KeyAction};

/// A keymap table which can't be used by the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    /// The default layer must resolve every key, it can't fall through
    TransparentOnDefaultLayer { row: u8, col: u8 },
    /// A layer action references a layer which doesn't exist
    LayerOutOfRange { layer: u8, row: u8, col: u8, target: u8 },
    /// A layer action bound to an encoder references a layer which doesn't exist
    EncoderLayerOutOfRange { layer: u8, encoder: u8, target: u8 },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::TransparentOnDefaultLayer { row, col } => {
                write!(f, "transparent key at ({}, {}) on the default layer", row, col)
            }
            KeymapError::LayerOutOfRange { layer, row, col, target } => write!(
                f,
                "key ({}, {}) on layer {} references invalid layer {}",
                row, col, layer, target
            ),
            KeymapError::EncoderLayerOutOfRange { layer, encoder, target } => write!(
                f,
                "encoder {} on layer {} references invalid layer {}",
                encoder, layer, target
            ),
        }
    }
}

/// Returns the invalid layer referenced by `action`, if any.
///
/// A momentary layer key on the default layer is useless, so `MO(0)` is rejected too.
const fn invalid_layer_target(action: &KeyAction, num_layer: usize) -> Option<u8> {
    let KeyAction::Single(action) = action else {
        return None;
    };
    let Some(target) = action.layer_target() else {
        return None;
    };
    if target as usize >= num_layer || (action.is_momentary_layer() && target == 0) {
        Some(target)
    } else {
        None
    }
}

/// Check a keymap table.
///
/// Layer 0 must not contain transparent keys, and every layer action must reference an existing layer.
pub const fn check_keymap<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keymap: &[[[KeyAction; COL]; ROW]; NUM_LAYER],
) -> Result<(), KeymapError> {
    let mut layer = 0;
    while layer < NUM_LAYER {
        let mut row = 0;
        while row < ROW {
            let mut col = 0;
            while col < COL {
                let action = &keymap[layer][row][col];
                if layer == 0 && action.is_transparent() {
                    return Err(KeymapError::TransparentOnDefaultLayer {
                        row: row as u8,
                        col: col as u8,
                    });
                }
                if let Some(target) = invalid_layer_target(action, NUM_LAYER) {
                    return Err(KeymapError::LayerOutOfRange {
                        layer: layer as u8,
                        row: row as u8,
                        col: col as u8,
                        target,
                    });
                }
                col += 1;
            }
            row += 1;
        }
        layer += 1;
    }
    Ok(())
}

/// Check every layer action bound to an encoder, in both directions
pub const fn check_encoder_map<const NUM_ENCODER: usize, const NUM_LAYER: usize>(
    encoder_map: &[[EncoderAction; NUM_ENCODER]; NUM_LAYER],
) -> Result<(), KeymapError> {
    let mut layer = 0;
    while layer < NUM_LAYER {
        let mut encoder = 0;
        while encoder < NUM_ENCODER {
            let binding = &encoder_map[layer][encoder];
            let mut target = invalid_layer_target(&binding.clockwise(), NUM_LAYER);
            if target.is_none() {
                target = invalid_layer_target(&binding.counter_clockwise(), NUM_LAYER);
            }
            if let Some(target) = target {
                return Err(KeymapError::EncoderLayerOutOfRange {
                    layer: layer as u8,
                    encoder: encoder as u8,
                    target,
                });
            }
            encoder += 1;
        }
        layer += 1;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{a, df, encoder, k, layer, mo, tg, to};

    #[test]
    fn test_valid_keymap() {
        let keymap: [[[KeyAction; 2]; 1]; 2] = [layer!([[k!(A), mo!(1)]]), layer!([[a!(Transparent), df!(0)]])];
        assert_eq!(check_keymap(&keymap), Ok(()));
    }

    #[test]
    fn test_transparent_on_default_layer() {
        let keymap: [[[KeyAction; 2]; 1]; 2] = [layer!([[k!(A), a!(Transparent)]]), layer!([[k!(B), k!(C)]])];
        assert_eq!(
            check_keymap(&keymap),
            Err(KeymapError::TransparentOnDefaultLayer { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_layer_out_of_range() {
        let keymap: [[[KeyAction; 2]; 1]; 2] = [layer!([[k!(A), k!(B)]]), layer!([[tg!(1), to!(2)]])];
        assert_eq!(
            check_keymap(&keymap),
            Err(KeymapError::LayerOutOfRange {
                layer: 1,
                row: 0,
                col: 1,
                target: 2
            })
        );
    }

    #[test]
    fn test_momentary_default_layer() {
        let keymap: [[[KeyAction; 1]; 1]; 2] = [layer!([[k!(A)]]), layer!([[mo!(0)]])];
        let err = check_keymap(&keymap).unwrap_err();
        assert_eq!(
            err,
            KeymapError::LayerOutOfRange {
                layer: 1,
                row: 0,
                col: 0,
                target: 0
            }
        );
        assert_eq!(err.to_string(), "key (0, 0) on layer 1 references invalid layer 0");
    }

    #[test]
    fn test_encoder_map() {
        let valid: [[EncoderAction; 1]; 2] = [[encoder!(k!(AudioVolUp), mo!(1))], [encoder!(a!(No), a!(No))]];
        assert_eq!(check_encoder_map(&valid), Ok(()));

        let invalid: [[EncoderAction; 2]; 1] = [[encoder!(a!(No), a!(No)), encoder!(k!(Left), tg!(4))]];
        assert_eq!(
            check_encoder_map(&invalid),
            Err(KeymapError::EncoderLayerOutOfRange {
                layer: 0,
                encoder: 1,
                target: 4
            })
        );
    }

    // Both checks must be usable in const context
    const _: () = assert!(check_keymap(&[layer!([[k!(A)]])]).is_ok());
    const _: () = assert!(check_encoder_map::<0, 1>(&[[]]).is_ok());
}
