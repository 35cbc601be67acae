use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Lower case names and short aliases of keycodes, mapped to the keycode name.
///
/// Every keycode is reachable by its lower cased name, so lookups are case-insensitive.
pub static KEYCODE_ALIAS: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:tt) => {
            m.insert(paste::paste!{ stringify!([<$keycode:lower>]) }, $keycode);
        };
        ($keycode:tt = $( $alias:expr),*) => {
            add_alias!($keycode);
            $(
                m.insert($alias, $keycode);
            )*
        };
    }

    add_alias!("A");
    add_alias!("B");
    add_alias!("C");
    add_alias!("D");
    add_alias!("E");
    add_alias!("F");
    add_alias!("G");
    add_alias!("H");
    add_alias!("I");
    add_alias!("J");
    add_alias!("K");
    add_alias!("L");
    add_alias!("M");
    add_alias!("N");
    add_alias!("O");
    add_alias!("P");
    add_alias!("Q");
    add_alias!("R");
    add_alias!("S");
    add_alias!("T");
    add_alias!("U");
    add_alias!("V");
    add_alias!("W");
    add_alias!("X");
    add_alias!("Y");
    add_alias!("Z");
    add_alias!("Kc1" = "1");
    add_alias!("Kc2" = "2");
    add_alias!("Kc3" = "3");
    add_alias!("Kc4" = "4");
    add_alias!("Kc5" = "5");
    add_alias!("Kc6" = "6");
    add_alias!("Kc7" = "7");
    add_alias!("Kc8" = "8");
    add_alias!("Kc9" = "9");
    add_alias!("Kc0" = "0");
    add_alias!("Enter" = "ent");
    add_alias!("Escape" = "esc");
    add_alias!("Backspace" = "bspc");
    add_alias!("Tab");
    add_alias!("Space" = "spc");
    add_alias!("Minus" = "mins", "-");
    add_alias!("Equal" = "eql", "=");
    add_alias!("LeftBracket" = "left_bracket", "lbrc", "[");
    add_alias!("RightBracket" = "right_bracket", "rbrc", "]");
    add_alias!("Backslash" = "bsls", "\\");
    add_alias!("NonusHash" = "nonus_hash", "nuhs");
    add_alias!("Semicolon" = "scln", ";");
    add_alias!("Quote" = "quot", "'");
    add_alias!("Grave" = "grv", "`");
    add_alias!("Comma" = "comm", ",");
    add_alias!("Dot" = ".");
    add_alias!("Slash" = "slsh", "/");
    add_alias!("CapsLock" = "caps_lock", "caps");
    add_alias!("F1");
    add_alias!("F2");
    add_alias!("F3");
    add_alias!("F4");
    add_alias!("F5");
    add_alias!("F6");
    add_alias!("F7");
    add_alias!("F8");
    add_alias!("F9");
    add_alias!("F10");
    add_alias!("F11");
    add_alias!("F12");
    add_alias!("PrintScreen" = "print_screen", "pscr");
    add_alias!("ScrollLock" = "scroll_lock", "scrl");
    add_alias!("Pause" = "paus", "brk");
    add_alias!("Insert" = "ins");
    add_alias!("Home");
    add_alias!("PageUp" = "page_up", "pgup");
    add_alias!("Delete" = "del");
    add_alias!("End");
    add_alias!("PageDown" = "page_down", "pgdn");
    add_alias!("Right" = "rght");
    add_alias!("Left");
    add_alias!("Down");
    add_alias!("Up");
    add_alias!("NumLock" = "num_lock", "num");
    add_alias!("KpSlash" = "kp_slash", "psls");
    add_alias!("KpAsterisk" = "kp_asterisk", "past");
    add_alias!("KpMinus" = "kp_minus", "pmns");
    add_alias!("KpPlus" = "kp_plus", "ppls");
    add_alias!("KpEnter" = "kp_enter", "pent");
    add_alias!("Kp1" = "kp_1");
    add_alias!("Kp2" = "kp_2");
    add_alias!("Kp3" = "kp_3");
    add_alias!("Kp4" = "kp_4");
    add_alias!("Kp5" = "kp_5");
    add_alias!("Kp6" = "kp_6");
    add_alias!("Kp7" = "kp_7");
    add_alias!("Kp8" = "kp_8");
    add_alias!("Kp9" = "kp_9");
    add_alias!("Kp0" = "kp_0");
    add_alias!("KpDot" = "kp_dot", "pdot");
    add_alias!("NonusBackslash" = "nonus_backslash", "nubs");
    add_alias!("Application" = "app");
    add_alias!("KpEqual" = "kp_equal", "peql");
    add_alias!("F13");
    add_alias!("F14");
    add_alias!("F15");
    add_alias!("F16");
    add_alias!("F17");
    add_alias!("F18");
    add_alias!("F19");
    add_alias!("F20");
    add_alias!("F21");
    add_alias!("F22");
    add_alias!("F23");
    add_alias!("F24");
    add_alias!("Undo");
    add_alias!("Cut");
    add_alias!("Copy");
    add_alias!("Paste" = "pste");
    add_alias!("Find");
    add_alias!("SystemPower" = "system_power", "pwr");
    add_alias!("SystemSleep" = "system_sleep", "slep");
    add_alias!("SystemWake" = "system_wake", "wake");
    add_alias!("AudioMute" = "audio_mute", "mute");
    add_alias!("AudioVolUp" = "audio_vol_up", "volu");
    add_alias!("AudioVolDown" = "audio_vol_down", "vold");
    add_alias!("MediaNextTrack" = "media_next_track", "mnxt");
    add_alias!("MediaPrevTrack" = "media_prev_track", "mprv");
    add_alias!("MediaStop" = "media_stop", "mstp");
    add_alias!("MediaPlayPause" = "media_play_pause", "mply");
    add_alias!("MediaSelect" = "media_select", "msel");
    add_alias!("MediaEject" = "media_eject", "ejct");
    add_alias!("Mail");
    add_alias!("Calculator" = "calc");
    add_alias!("MyComputer" = "my_computer", "mycm");
    add_alias!("MediaFastForward" = "media_fast_forward", "mffd");
    add_alias!("MediaRewind" = "media_rewind", "mrwd");
    add_alias!("BrightnessUp" = "brightness_up", "briu");
    add_alias!("BrightnessDown" = "brightness_down", "brid");
    add_alias!("LCtrl" = "lctl", "left_ctrl");
    add_alias!("LShift" = "lsft", "left_shift");
    add_alias!("LAlt" = "lopt", "left_alt");
    add_alias!("LGui" = "lcmd", "lwin", "left_gui");
    add_alias!("RCtrl" = "rctl", "right_ctrl");
    add_alias!("RShift" = "rsft", "right_shift");
    add_alias!("RAlt" = "ropt", "algr", "right_alt");
    add_alias!("RGui" = "rcmd", "rwin", "right_gui");
    // Lighting, QMK's `RM_*` names are accepted too
    add_alias!("RgbTog" = "rgb_tog", "rm_togg");
    add_alias!("RgbModeForward" = "rgb_mode_forward", "rm_next");
    add_alias!("RgbModeReverse" = "rgb_mode_reverse", "rm_prev");
    add_alias!("RgbHui" = "rgb_hui", "rm_hueu");
    add_alias!("RgbHud" = "rgb_hud", "rm_hued");
    add_alias!("RgbSai" = "rgb_sai", "rm_satu");
    add_alias!("RgbSad" = "rgb_sad", "rm_satd");
    add_alias!("RgbVai" = "rgb_vai", "rm_valu");
    add_alias!("RgbVad" = "rgb_vad", "rm_vald");
    add_alias!("RgbSpi" = "rgb_spi", "rm_spdu");
    add_alias!("RgbSpd" = "rgb_spd", "rm_spdd");

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_case_names() {
        assert_eq!(KEYCODE_ALIAS.get("tab"), Some(&"Tab"));
        assert_eq!(KEYCODE_ALIAS.get("kc1"), Some(&"Kc1"));
        assert_eq!(KEYCODE_ALIAS.get("audiovolup"), Some(&"AudioVolUp"));
        assert_eq!(KEYCODE_ALIAS.get("rgbmodeforward"), Some(&"RgbModeForward"));
    }

    #[test]
    fn test_short_aliases() {
        assert_eq!(KEYCODE_ALIAS.get("bspc"), Some(&"Backspace"));
        assert_eq!(KEYCODE_ALIAS.get("algr"), Some(&"RAlt"));
        assert_eq!(KEYCODE_ALIAS.get("rm_valu"), Some(&"RgbVai"));
        assert_eq!(KEYCODE_ALIAS.get(";"), Some(&"Semicolon"));
        assert_eq!(KEYCODE_ALIAS.get("Tab"), None);
    }
}
