// Centralized validation logic

use std::collections::HashMap;

use corne_types::action::KeyAction;

use crate::LayoutConfig;
use crate::error::{ConfigError, ConfigResult};

pub struct Validator;

impl Validator {
    /// Alias keys are referenced as `@alias`, so they can't contain whitespace
    pub fn validate_aliases(aliases: &HashMap<String, String>) -> ConfigResult<()> {
        for key in aliases.keys() {
            if key.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation {
                    field: "aliases".to_string(),
                    message: format!("Alias key '{}' must not contain whitespace characters", key),
                });
            }
        }
        Ok(())
    }

    /// Validate the parsed keymap.
    ///
    /// Layer 0 must not contain transparent keys, and layer actions must reference existing layers.
    /// `MO(0)` is rejected as well.
    pub fn validate_layout(layout: &LayoutConfig) -> ConfigResult<()> {
        for (layer, grid) in layout.keymap.iter().enumerate() {
            for (row, keys) in grid.iter().enumerate() {
                for (col, action) in keys.iter().enumerate() {
                    if layer == 0 && action.is_transparent() {
                        return Err(ConfigError::TransparentOnDefaultLayer {
                            row: row as u8,
                            col: col as u8,
                        });
                    }
                    if let Some(target) = Self::invalid_layer_target(action, layout.layers) {
                        return Err(ConfigError::LayerOutOfRange {
                            layer,
                            row: row as u8,
                            col: col as u8,
                            target,
                        });
                    }
                }
            }
        }

        for (layer, encoders) in layout.encoder_map.iter().enumerate() {
            for (encoder, binding) in encoders.iter().enumerate() {
                let target = Self::invalid_layer_target(&binding.clockwise(), layout.layers)
                    .or_else(|| Self::invalid_layer_target(&binding.counter_clockwise(), layout.layers));
                if let Some(target) = target {
                    return Err(ConfigError::EncoderLayerOutOfRange { layer, encoder, target });
                }
            }
        }
        Ok(())
    }

    fn invalid_layer_target(action: &KeyAction, num_layer: u8) -> Option<u8> {
        let action = action.to_action()?;
        let target = action.layer_target()?;
        (target >= num_layer || (action.is_momentary_layer() && target == 0)).then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use corne_types::action::{Action, EncoderAction};

    use super::*;

    fn layout(keymap: Vec<Vec<Vec<KeyAction>>>, encoder_map: Vec<Vec<EncoderAction>>) -> LayoutConfig {
        LayoutConfig {
            rows: 1,
            cols: 2,
            layers: keymap.len() as u8,
            keymap,
            encoder_map,
        }
    }

    #[test]
    fn test_transparent_on_layer_0() {
        let config = layout(
            vec![vec![vec![KeyAction::No, KeyAction::Transparent]], vec![vec![KeyAction::Transparent; 2]]],
            vec![vec![], vec![]],
        );
        assert_eq!(
            Validator::validate_layout(&config),
            Err(ConfigError::TransparentOnDefaultLayer { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_layer_targets() {
        let mo = |n| KeyAction::Single(Action::LayerOn(n));
        let valid = layout(vec![vec![vec![mo(1), KeyAction::No]], vec![vec![KeyAction::No; 2]]], vec![vec![], vec![]]);
        assert_eq!(Validator::validate_layout(&valid), Ok(()));

        let out_of_range = layout(vec![vec![vec![KeyAction::No, mo(2)]], vec![vec![KeyAction::No; 2]]], vec![vec![], vec![]]);
        assert_eq!(
            Validator::validate_layout(&out_of_range),
            Err(ConfigError::LayerOutOfRange {
                layer: 0,
                row: 0,
                col: 1,
                target: 2
            })
        );

        let mo_0 = layout(vec![vec![vec![KeyAction::No; 2]], vec![vec![mo(0), KeyAction::No]]], vec![vec![], vec![]]);
        assert!(matches!(
            Validator::validate_layout(&mo_0),
            Err(ConfigError::LayerOutOfRange { target: 0, .. })
        ));

        let encoder = layout(
            vec![vec![vec![KeyAction::No; 2]]],
            vec![vec![EncoderAction::new(KeyAction::No, KeyAction::Single(Action::LayerToggle(5)))]],
        );
        assert_eq!(
            Validator::validate_layout(&encoder),
            Err(ConfigError::EncoderLayerOutOfRange {
                layer: 0,
                encoder: 0,
                target: 5
            })
        );
    }

    #[test]
    fn test_alias_whitespace() {
        let mut aliases = HashMap::new();
        aliases.insert("my alias".to_string(), "A".to_string());
        assert!(matches!(
            Validator::validate_aliases(&aliases),
            Err(ConfigError::Validation { .. })
        ));
    }
}
