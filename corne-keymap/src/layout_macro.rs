/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$k),
        ))
    };
}

/// Create a RGB lighting key, e.g. `light!(RgbTog)`
#[macro_export]
macro_rules! light {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Light($crate::types::keycode::LightKeyCode::$k),
        ))
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Create a shifted key, `shifted!(Kc1)` sends `!` on a US layout
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::SHIFT)
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1.
#[macro_export]
macro_rules! mo {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x))
    };
}

/// Create a layer toggle action
#[macro_export]
macro_rules! tg {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerToggle($x))
    };
}

/// Create a layer toggle only action (activate layer `n` and deactivate all other layers), `n` is the layer number
#[macro_export]
macro_rules! to {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerToggleOnly($x))
    };
}

/// create a switch default layer action, `n` is the layer number
#[macro_export]
macro_rules! df {
    ($x: literal) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::DefaultLayer($x))
    };
}

/// Jump to the bootloader
#[macro_export]
macro_rules! boot {
    () => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Bootloader)
    };
}

/// Create an encoder action, the first argument is the clockwise action, the second is the counter-clockwise action
#[macro_export]
macro_rules! encoder {
    ($clockwise: expr, $counter_clockwise: expr) => {
        $crate::types::action::EncoderAction::new($clockwise, $counter_clockwise)
    };
}

/// Arrange the 46 keys of a Corne in visual order into the 8x7 split matrix.
///
/// Arguments are given left to right, top to bottom, the way the keys sit on the desk:
/// two rows of 14 keys (six columns plus one inner key per half), one row of 12 keys,
/// and 6 thumb keys. Rows `0..4` of the matrix belong to the left half, rows `4..8` to the
/// right half. The right half is mirrored, matrix column 0 is its outermost key.
/// Positions without a switch are filled with `KeyAction::No`.
#[macro_export]
macro_rules! layout_split_3x6_3_ex2 {
    (
        $l00:expr, $l01:expr, $l02:expr, $l03:expr, $l04:expr, $l05:expr, $l06:expr,
        $r06:expr, $r05:expr, $r04:expr, $r03:expr, $r02:expr, $r01:expr, $r00:expr,
        $l10:expr, $l11:expr, $l12:expr, $l13:expr, $l14:expr, $l15:expr, $l16:expr,
        $r16:expr, $r15:expr, $r14:expr, $r13:expr, $r12:expr, $r11:expr, $r10:expr,
        $l20:expr, $l21:expr, $l22:expr, $l23:expr, $l24:expr, $l25:expr,
        $r25:expr, $r24:expr, $r23:expr, $r22:expr, $r21:expr, $r20:expr,
        $l33:expr, $l34:expr, $l35:expr,
        $r35:expr, $r34:expr, $r33:expr $(,)?
    ) => {
        [
            [$l00, $l01, $l02, $l03, $l04, $l05, $l06],
            [$l10, $l11, $l12, $l13, $l14, $l15, $l16],
            [$l20, $l21, $l22, $l23, $l24, $l25, $crate::a!(No)],
            [$crate::a!(No), $crate::a!(No), $crate::a!(No), $l33, $l34, $l35, $crate::a!(No)],
            [$r00, $r01, $r02, $r03, $r04, $r05, $r06],
            [$r10, $r11, $r12, $r13, $r14, $r15, $r16],
            [$r20, $r21, $r22, $r23, $r24, $r25, $crate::a!(No)],
            [$crate::a!(No), $crate::a!(No), $crate::a!(No), $r33, $r34, $r35, $crate::a!(No)],
        ]
    };
}

#[cfg(test)]
mod test {
    use corne_types::action::{Action, KeyAction};
    use corne_types::keycode::{HidKeyCode, KeyCode, LightKeyCode};
    use corne_types::modifier::SHIFT;

    #[test]
    fn test_key_macros() {
        assert_eq!(k!(Tab), KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::Tab))));
        assert_eq!(
            light!(RgbVai),
            KeyAction::Single(Action::Key(KeyCode::Light(LightKeyCode::RgbVai)))
        );
        assert_eq!(
            shifted!(Grave),
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Hid(HidKeyCode::Grave), SHIFT))
        );
        assert_eq!(mo!(2), KeyAction::Single(Action::LayerOn(2)));
        assert_eq!(boot!(), KeyAction::Single(Action::Bootloader));
    }

    #[test]
    #[rustfmt::skip]
    fn test_split_layout_is_mirrored() {
        let layout: [[KeyAction; 7]; 8] = layout_split_3x6_3_ex2!(
            k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(LAlt),     k!(RAlt), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace),
            k!(A), k!(A), k!(A), k!(A), k!(A), k!(A), k!(A),          k!(B), k!(B), k!(B), k!(B), k!(B), k!(B), k!(B),
            k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N),                 k!(M), k!(Comma), k!(Dot), k!(Slash), k!(Quote), k!(Escape),
                                   k!(LGui), mo!(1), k!(Space),       k!(Enter), mo!(2), k!(RAlt)
        );
        assert_eq!(layout[0][0], k!(Tab));
        assert_eq!(layout[0][6], k!(LAlt));
        // Outermost right key
        assert_eq!(layout[4][0], k!(Backspace));
        assert_eq!(layout[4][6], k!(RAlt));
        assert_eq!(layout[4][5], k!(Y));
        assert_eq!(layout[6][0], k!(Escape));
        assert_eq!(layout[6][5], k!(M));
        assert_eq!(layout[3][4], mo!(1));
        assert_eq!(layout[7][3], k!(RAlt));
        assert_eq!(layout[7][5], k!(Enter));
        assert_eq!(layout[2][6], a!(No));
        assert_eq!(layout[6][6], a!(No));
        assert_eq!(layout[3][0], a!(No));
        assert_eq!(layout[7][6], a!(No));
    }
}
