use corne_types::action::{Action, KeyAction};

use crate::event::{KeyEvent, RotaryEncoderEvent};
use crate::keymap::KeyMap;

/// Resolves key and encoder events to actions, and applies the layer actions to the keymap.
///
/// Everything else (HID reports, lighting, bootloader jumps) is left to the caller, which receives
/// the resolved `KeyAction`.
pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize = 0> {
    pub(crate) keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>
    Keyboard<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>) -> Self {
        Keyboard { keymap }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER> {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER> {
        &mut self.keymap
    }

    /// Process a key change, returns the action resolved for this key
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> KeyAction {
        let key_action = self.keymap.get_action_with_layer_cache(key_event);
        debug!(
            "Key ({}, {}) {}, action: {:?}",
            key_event.row,
            key_event.col,
            if key_event.pressed { "pressed" } else { "released" },
            key_action
        );

        if let KeyAction::Single(action) = key_action {
            self.process_key_action_normal(action, key_event);
        }

        key_action
    }

    /// Process a rotary encoder detent, returns the action bound to the direction on the activated layer
    pub fn process_encoder_event(&mut self, encoder_event: RotaryEncoderEvent) -> Option<KeyAction> {
        let action = self.keymap.get_encoder_action(encoder_event);
        if action.is_none() {
            trace!("No action for encoder event {:?}", encoder_event);
        }
        action
    }

    fn process_key_action_normal(&mut self, action: Action, key_event: KeyEvent) {
        match action {
            Action::LayerOn(layer_num) => {
                // Turn on a layer temporarily when the key is pressed
                if key_event.pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::LayerOff(layer_num) => {
                // Turn off a layer temporarily when the key is pressed
                if key_event.pressed {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                // Toggle a layer when the key is release
                if !key_event.pressed {
                    self.keymap.toggle_layer(layer_num);
                }
            }
            Action::LayerToggleOnly(layer_num) => {
                // Activate a layer and deactivate all other layers(except default layer)
                if key_event.pressed {
                    let default_layer = self.keymap.get_default_layer();
                    for i in 0..NUM_LAYER as u8 {
                        if i != default_layer {
                            self.keymap.deactivate_layer(i);
                        }
                    }
                    self.keymap.activate_layer(layer_num);
                }
            }
            Action::DefaultLayer(layer_num) => {
                if key_event.pressed {
                    self.keymap.set_default_layer(layer_num);
                }
            }
            Action::Bootloader | Action::Reboot => {
                if key_event.pressed {
                    info!("{:?} requested", action);
                }
            }
            Action::Key(_) | Action::Modifier(_) | Action::KeyWithModifier(_, _) => {}
        }
    }
}
