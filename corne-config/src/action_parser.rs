//! Turns a single key entry of keyboard.toml into a [`KeyAction`].
//!
//! Layer names and aliases are already resolved when a key reaches [`parse_key`],
//! so layer actions always carry a layer number here.

use corne_types::action::{Action, KeyAction};
use corne_types::keycode::KeyCode;
use corne_types::modifier::ModifierCombination;

use crate::error::{ConfigError, ConfigResult};
use crate::keycode_alias::KEYCODE_ALIAS;

/// Parse the key string at a single position
pub fn parse_key(key: &str) -> ConfigResult<KeyAction> {
    let key = key.trim();
    if !key.is_empty() && (key.trim_start_matches('_').is_empty() || key.eq_ignore_ascii_case("trns")) {
        return Ok(KeyAction::Transparent);
    } else if key.eq_ignore_ascii_case("no") {
        return Ok(KeyAction::No);
    }

    let lower = key.to_lowercase();
    let action = match lower.as_str() {
        s if s.starts_with("wm(") => {
            let internal = strip_call(key, 3)?;
            let parts: Vec<&str> = internal
                .split_terminator(',')
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .collect();
            if parts.len() != 2 {
                return Err(invalid(key, "expected WM(key, modifier)"));
            }
            let keycode = get_keycode_with_alias(parts[0])?;
            let modifiers = parse_modifiers(parts[1]);
            if modifiers.is_empty() {
                return Err(invalid(key, "modifier in WM(key, modifier) is not valid"));
            }
            Action::KeyWithModifier(keycode, modifiers)
        }
        s if s.starts_with("shifted(") => {
            let internal = strip_call(key, 8)?.trim();
            if internal.is_empty() {
                return Err(invalid(key, "expected SHIFTED(key)"));
            }
            let keycode = get_keycode_with_alias(internal)?;
            Action::KeyWithModifier(keycode, ModifierCombination::new().with_shift(true))
        }
        s if s.starts_with("mo(") => Action::LayerOn(get_number(key, 3)?),
        s if s.starts_with("tg(") => Action::LayerToggle(get_number(key, 3)?),
        s if s.starts_with("to(") => Action::LayerToggleOnly(get_number(key, 3)?),
        s if s.starts_with("df(") => Action::DefaultLayer(get_number(key, 3)?),
        "bootloader" | "boot" | "qk_boot" => Action::Bootloader,
        "reboot" | "qk_rboot" => Action::Reboot,
        _ => Action::Key(get_keycode_with_alias(key)?),
    };

    Ok(KeyAction::Single(action))
}

/// Parse modifiers like `LShift | RAlt`, names which aren't modifier keys are ignored
pub(crate) fn parse_modifiers(modifiers_str: &str) -> ModifierCombination {
    modifiers_str
        .split_terminator('|')
        .filter_map(|w| match get_keycode_with_alias(w.trim()) {
            Ok(KeyCode::Hid(keycode)) if keycode.is_modifier() => Some(keycode.to_modifier_combination()),
            _ => None,
        })
        .fold(ModifierCombination::new(), |combination, modifier| combination | modifier)
}

/// Look a keycode up by its name or alias, case-insensitive
pub(crate) fn get_keycode_with_alias(key: &str) -> ConfigResult<KeyCode> {
    let name = KEYCODE_ALIAS.get(key.to_lowercase().as_str()).copied().unwrap_or(key);
    KeyCode::from_name(name).ok_or_else(|| ConfigError::UnknownKeycode { key: key.to_string() })
}

/// The text between `PREFIX(` and the closing parenthesis
fn strip_call(key: &str, prefix_len: usize) -> ConfigResult<&str> {
    key.get(prefix_len..)
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| invalid(key, "missing closing parenthesis"))
}

/// Parse the layer number of `MO(1)`, `TG(1)`, etc.
fn get_number(key: &str, prefix_len: usize) -> ConfigResult<u8> {
    let number = strip_call(key, prefix_len)?.trim();
    number
        .parse::<u8>()
        .map_err(|e| invalid(key, &format!("invalid layer number '{}': {}", number, e)))
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidKey {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use corne_types::keycode::{HidKeyCode, LightKeyCode};

    use super::*;

    fn key(k: HidKeyCode) -> KeyAction {
        KeyAction::Single(Action::Key(KeyCode::Hid(k)))
    }

    #[test]
    fn test_parse_key_transparent() {
        assert_eq!(parse_key("_"), Ok(KeyAction::Transparent));
        assert_eq!(parse_key("___"), Ok(KeyAction::Transparent));
        assert_eq!(parse_key("trns"), Ok(KeyAction::Transparent));
    }

    #[test]
    fn test_parse_key_no() {
        assert_eq!(parse_key("No"), Ok(KeyAction::No));
        assert_eq!(parse_key("no"), Ok(KeyAction::No));
    }

    #[test]
    fn test_parse_key_hid_keycode() {
        assert_eq!(parse_key("A"), Ok(key(HidKeyCode::A)));
        assert_eq!(parse_key("bspc"), Ok(key(HidKeyCode::Backspace)));
        assert_eq!(parse_key("1"), Ok(key(HidKeyCode::Kc1)));
        assert_eq!(parse_key("AudioVolUp"), Ok(key(HidKeyCode::AudioVolUp)));
        assert_eq!(
            parse_key("rm_togg"),
            Ok(KeyAction::Single(Action::Key(KeyCode::Light(LightKeyCode::RgbTog))))
        );
    }

    #[test]
    fn test_parse_key_unknown() {
        assert_eq!(
            parse_key("NotAKey"),
            Err(ConfigError::UnknownKeycode {
                key: "NotAKey".to_string()
            })
        );
    }

    #[test]
    fn test_parse_key_layer_actions() {
        assert_eq!(parse_key("MO(1)"), Ok(KeyAction::Single(Action::LayerOn(1))));
        assert_eq!(parse_key("mo(3)"), Ok(KeyAction::Single(Action::LayerOn(3))));
        assert_eq!(parse_key("TG(2)"), Ok(KeyAction::Single(Action::LayerToggle(2))));
        assert_eq!(parse_key("TO(0)"), Ok(KeyAction::Single(Action::LayerToggleOnly(0))));
        assert_eq!(parse_key("DF(1)"), Ok(KeyAction::Single(Action::DefaultLayer(1))));
        assert!(matches!(parse_key("MO(x)"), Err(ConfigError::InvalidKey { .. })));
        assert!(matches!(parse_key("MO(1"), Err(ConfigError::InvalidKey { .. })));
    }

    #[test]
    fn test_parse_key_with_modifiers() {
        assert_eq!(
            parse_key("WM(A, LShift)"),
            Ok(KeyAction::Single(Action::KeyWithModifier(
                KeyCode::Hid(HidKeyCode::A),
                ModifierCombination::new().with_shift(true)
            )))
        );
        assert_eq!(
            parse_key("SHIFTED(Kc1)"),
            Ok(KeyAction::Single(Action::KeyWithModifier(
                KeyCode::Hid(HidKeyCode::Kc1),
                ModifierCombination::new().with_shift(true)
            )))
        );
        assert!(matches!(parse_key("WM(A)"), Err(ConfigError::InvalidKey { .. })));
        assert!(matches!(parse_key("WM(A, Hyper)"), Err(ConfigError::InvalidKey { .. })));
    }

    #[test]
    fn test_parse_modifiers() {
        let combination = parse_modifiers("LCtrl | ralt");
        assert!(combination.ctrl());
        assert!(combination.alt());
        assert!(combination.right());
        assert!(!combination.shift());
        assert!(parse_modifiers("Nothing").is_empty());
        // Keys which aren't modifiers add nothing
        assert_eq!(parse_modifiers("A | lsft"), parse_modifiers("LShift"));
        assert!(parse_modifiers("Space").is_empty());
    }

    #[test]
    fn test_parse_key_boot() {
        assert_eq!(parse_key("Bootloader"), Ok(KeyAction::Single(Action::Bootloader)));
        assert_eq!(parse_key("QK_BOOT"), Ok(KeyAction::Single(Action::Bootloader)));
        assert_eq!(parse_key("Reboot"), Ok(KeyAction::Single(Action::Reboot)));
    }
}
