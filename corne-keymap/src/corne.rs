//! Keymap of the crkbd (Corne) split keyboard, `split_3x6_3_ex2` layout.
//!
//! | layer | content |
//! | --- | --- |
//! | 0 `BASE` | letters, held with the left thumb for `NUM` and the right thumb for `SYM` |
//! | 1 `NUM` | digits and arrows |
//! | 2 `SYM` | shifted digits, brackets and other symbols |
//! | 3 `ADJUST` | bootloader, function keys and RGB controls, reached from `NUM` or `SYM` |
//!
//! Four rotary encoders are bound the same way on every layer.

use corne_types::action::{EncoderAction, KeyAction};

use crate::validate::check_keymap;
#[cfg(feature = "encoder_map")]
use crate::validate::check_encoder_map;
use crate::{a, boot, k, layout_split_3x6_3_ex2, light, mo, shifted};

/// Matrix rows, rows `0..4` are the left half
pub const ROW: usize = 8;
/// Matrix columns per half
pub const COL: usize = 7;
pub const NUM_LAYER: usize = 4;
pub const NUM_ENCODER: usize = 4;

pub const BASE: u8 = 0;
pub const NUM: u8 = 1;
pub const SYM: u8 = 2;
pub const ADJUST: u8 = 3;

#[rustfmt::skip]
const DEFAULT_KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layout_split_3x6_3_ex2!(
        k!(Tab),    k!(Q),   k!(W),   k!(E),   k!(R),   k!(T),   k!(LAlt),      k!(LAlt), k!(Y),   k!(U),     k!(I),   k!(O),     k!(P),         k!(Backspace),
        k!(LCtrl),  k!(A),   k!(S),   k!(D),   k!(F),   k!(G),   k!(RAlt),      k!(RAlt), k!(H),   k!(J),     k!(K),   k!(L),     k!(Semicolon), k!(Quote),
        k!(LShift), k!(Z),   k!(X),   k!(C),   k!(V),   k!(B),                            k!(N),   k!(M),     k!(Comma), k!(Dot), k!(Slash), k!(Escape),
                                               k!(LGui), mo!(1), k!(Space),     k!(Enter), mo!(2), k!(RAlt)
    ),
    layout_split_3x6_3_ex2!(
        k!(Tab),    k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(LAlt),      k!(LAlt), k!(Kc6), k!(Kc7),   k!(Kc8), k!(Kc9),   k!(Kc0),       k!(Backspace),
        k!(LCtrl),  a!(No),  a!(No),  a!(No),  a!(No),  a!(No),  k!(RAlt),      k!(RAlt), k!(Left), k!(Down), k!(Up),  k!(Right), a!(No),        a!(No),
        k!(LShift), a!(No),  a!(No),  a!(No),  a!(No),  a!(No),                           a!(No),  a!(No),    a!(No),  a!(No),    a!(No),        a!(No),
                                               k!(LGui), a!(Transparent), k!(Space),     k!(Enter), mo!(3), k!(RAlt)
    ),
    layout_split_3x6_3_ex2!(
        k!(Tab),    shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), k!(LAlt),      k!(LAlt), shifted!(Kc6),   shifted!(Kc7),   shifted!(Kc8),         shifted!(Kc9),          shifted!(Kc0),       k!(Backspace),
        k!(LCtrl),  a!(No),        a!(No),        a!(No),        a!(No),        a!(No),        k!(RAlt),      k!(RAlt), k!(Minus),       k!(Equal),       k!(LeftBracket),       k!(RightBracket),       k!(Backslash),       k!(NonusBackslash),
        k!(LShift), a!(No),        a!(No),        a!(No),        a!(No),        a!(No),                                 shifted!(Minus), shifted!(Equal), shifted!(LeftBracket), shifted!(RightBracket), shifted!(Backslash), shifted!(Grave),
                                               k!(LGui), mo!(3), k!(Space),     k!(Enter), a!(Transparent), k!(RAlt)
    ),
    layout_split_3x6_3_ex2!(
        boot!(),            k!(F1),         k!(F2),         k!(F3),         k!(F4),  k!(F5),  k!(LAlt),      k!(LAlt), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), a!(No),
        light!(RgbTog),     light!(RgbHui), light!(RgbSai), light!(RgbVai), a!(No),  a!(No),  k!(RAlt),      k!(RAlt), a!(No), a!(No), a!(No), a!(No), a!(No),  a!(No),
        light!(RgbModeForward), light!(RgbHud), light!(RgbSad), light!(RgbVad), a!(No), a!(No),                        a!(No), a!(No), a!(No), a!(No), a!(No),  a!(No),
                                               k!(LGui), a!(Transparent), k!(Space),     k!(Enter), a!(Transparent), k!(RAlt)
    ),
];

/// Bindings of all four encoders, `(clockwise, counter-clockwise)`
#[cfg(feature = "encoder_map")]
const ENCODER_LAYER: [EncoderAction; NUM_ENCODER] = [
    EncoderAction::new(k!(AudioVolUp), k!(AudioVolDown)),
    EncoderAction::new(k!(MediaNextTrack), k!(MediaPrevTrack)),
    EncoderAction::new(light!(RgbVai), light!(RgbVad)),
    EncoderAction::new(k!(Left), k!(Right)),
];

#[cfg(feature = "encoder_map")]
const DEFAULT_ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = [ENCODER_LAYER; NUM_LAYER];

const _: () = assert!(check_keymap(&DEFAULT_KEYMAP).is_ok(), "invalid crkbd keymap");
#[cfg(feature = "encoder_map")]
const _: () = assert!(check_encoder_map(&DEFAULT_ENCODER_MAP).is_ok(), "invalid crkbd encoder map");

/// The keymap, indexed by `[layer][row][col]`
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = DEFAULT_KEYMAP;

/// The encoder map, indexed by `[layer][encoder]`
#[cfg(feature = "encoder_map")]
pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = DEFAULT_ENCODER_MAP;

/// A copy of the keymap, e.g. as the initial content of a writable keymap
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    DEFAULT_KEYMAP
}

#[cfg(feature = "encoder_map")]
pub const fn get_default_encoder_map() -> [[EncoderAction; NUM_ENCODER]; NUM_LAYER] {
    DEFAULT_ENCODER_MAP
}

/// The encoder table passed to [`KeyMap::new`](crate::keymap::KeyMap::new), `None` without the `encoder_map` feature
pub fn encoder_map() -> Option<&'static [[EncoderAction; NUM_ENCODER]; NUM_LAYER]> {
    #[cfg(feature = "encoder_map")]
    {
        Some(&ENCODER_MAP)
    }
    #[cfg(not(feature = "encoder_map"))]
    {
        None
    }
}
