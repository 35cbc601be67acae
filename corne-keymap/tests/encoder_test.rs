pub mod common;

use corne_keymap::corne::{ENCODER_MAP, NUM_ENCODER};
use corne_keymap::event::{Direction, KeyEvent};
use corne_keymap::{k, light};

use crate::common::{MO_NUM, MO_SYM, create_corne_keyboard, turn};

#[test]
fn test_encoder_bindings_are_layer_independent() {
    for layer in ENCODER_MAP.iter() {
        assert_eq!(layer, &ENCODER_MAP[0]);
    }
}

#[test]
fn test_encoder_directions() {
    let mut keyboard = create_corne_keyboard();
    let expected = [
        (k!(AudioVolUp), k!(AudioVolDown)),
        (k!(MediaNextTrack), k!(MediaPrevTrack)),
        (light!(RgbVai), light!(RgbVad)),
        (k!(Left), k!(Right)),
    ];
    for (id, (clockwise, counter_clockwise)) in expected.into_iter().enumerate() {
        let id = id as u8;
        assert_eq!(keyboard.process_encoder_event(turn(id, Direction::Clockwise)), Some(clockwise));
        assert_eq!(
            keyboard.process_encoder_event(turn(id, Direction::CounterClockwise)),
            Some(counter_clockwise)
        );
    }
}

#[test]
fn test_encoder_on_upper_layers() {
    let mut keyboard = create_corne_keyboard();
    let (row, col) = MO_NUM;
    keyboard.process_key_event(KeyEvent::press(row, col));
    assert_eq!(
        keyboard.process_encoder_event(turn(0, Direction::Clockwise)),
        Some(k!(AudioVolUp))
    );
    let (row, col) = MO_SYM;
    keyboard.process_key_event(KeyEvent::press(row, col));
    // Both thumbs held: adjust layer
    assert_eq!(keyboard.keymap().get_activated_layer(), 3);
    assert_eq!(
        keyboard.process_encoder_event(turn(3, Direction::CounterClockwise)),
        Some(k!(Right))
    );
}

#[test]
fn test_unknown_encoder_or_no_rotation() {
    let mut keyboard = create_corne_keyboard();
    assert_eq!(keyboard.process_encoder_event(turn(NUM_ENCODER as u8, Direction::Clockwise)), None);
    assert_eq!(keyboard.process_encoder_event(turn(0, Direction::None)), None);
}
