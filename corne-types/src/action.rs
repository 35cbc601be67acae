//! Keyboard actions.
//!
//! Key types:
//! - [`Action`] - Single operations that the keyboard sends or executes
//! - [`KeyAction`] - What is stored at a keymap position
//! - [`EncoderAction`] - Rotary encoder actions, one per direction

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: KeyAction::No,
            counter_clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Get the clockwise action.
    pub const fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub const fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action, the position is not bound.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer.
    /// Action is triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Returns `None` for `No` and `Transparent`.
    pub const fn to_action(self) -> Option<Action> {
        match self {
            KeyAction::Single(a) => Some(a),
            _ => None,
        }
    }

    pub const fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode`, including media and lighting keys.
    Key(KeyCode),
    /// Modifier Combination
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Deactivate a layer
    LayerOff(u8),
    /// Toggle a layer
    LayerToggle(u8),
    /// Set default layer
    DefaultLayer(u8),
    /// Activate a layer and deactivate all other layers(except default layer)
    LayerToggleOnly(u8),
    /// Jump to the bootloader
    Bootloader,
    /// Reboot the keyboard
    Reboot,
}

impl Action {
    /// The layer referenced by a layer action
    pub const fn layer_target(&self) -> Option<u8> {
        match *self {
            Action::LayerOn(layer)
            | Action::LayerOff(layer)
            | Action::LayerToggle(layer)
            | Action::DefaultLayer(layer)
            | Action::LayerToggleOnly(layer) => Some(layer),
            _ => None,
        }
    }

    /// Momentary layer activation, i.e. `MO(n)`
    pub const fn is_momentary_layer(&self) -> bool {
        matches!(self, Action::LayerOn(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keycode::HidKeyCode;

    #[test]
    fn test_layer_target() {
        assert_eq!(Action::LayerOn(2).layer_target(), Some(2));
        assert_eq!(Action::LayerToggleOnly(3).layer_target(), Some(3));
        assert_eq!(Action::Key(KeyCode::Hid(HidKeyCode::A)).layer_target(), None);
        assert_eq!(Action::Bootloader.layer_target(), None);
    }

    #[test]
    fn test_encoder_action_directions() {
        let vol_up = KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::AudioVolUp)));
        let vol_down = KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::AudioVolDown)));
        let encoder = EncoderAction::new(vol_up, vol_down);
        assert_eq!(encoder.clockwise(), vol_up);
        assert_eq!(encoder.counter_clockwise(), vol_down);
        assert_eq!(EncoderAction::default().clockwise(), KeyAction::No);
    }
}
