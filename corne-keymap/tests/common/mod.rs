pub mod test_macro;

use corne_keymap::corne::{self, COL, NUM_ENCODER, NUM_LAYER, ROW};
use corne_keymap::event::{Direction, KeyEvent, RotaryEncoderEvent};
use corne_keymap::keyboard::Keyboard;
use corne_keymap::keymap::KeyMap;
use corne_keymap::types::action::KeyAction;
use log::debug;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Position of the left thumb key which holds the numeric layer
pub const MO_NUM: (u8, u8) = (3, 4);
/// Position of the right thumb key which holds the symbol layer
pub const MO_SYM: (u8, u8) = (7, 4);

#[derive(Debug, Clone)]
pub struct TestKeyPress {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

pub type CorneKeyboard = Keyboard<'static, ROW, COL, NUM_LAYER, NUM_ENCODER>;

/// A keyboard running the crkbd keymap and encoder map
pub fn create_corne_keyboard() -> CorneKeyboard {
    Keyboard::new(KeyMap::new(&corne::KEYMAP, corne::encoder_map()))
}

// Feed the key sequence to the keyboard, and verify the action resolved for every event
pub fn run_key_sequence_test(keyboard: &mut CorneKeyboard, key_sequence: &[TestKeyPress], expected_actions: &[KeyAction]) {
    assert_eq!(
        key_sequence.len(),
        expected_actions.len(),
        "every key event needs an expected action"
    );
    for (key, expected) in key_sequence.iter().zip(expected_actions) {
        let event = KeyEvent {
            row: key.row,
            col: key.col,
            pressed: key.pressed,
        };
        let action = keyboard.process_key_event(event);
        debug!("{:?} -> {:?}", event, action);
        assert_eq!(action, *expected, "unexpected action for {:?}", event);
    }
}

pub fn turn(id: u8, direction: Direction) -> RotaryEncoderEvent {
    RotaryEncoderEvent { id, direction }
}
