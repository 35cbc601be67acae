//! # Corne keymap
//!
//! The four layer keymap and the rotary encoder map of the crkbd (Corne) split keyboard,
//! together with the lookup engine a host firmware uses to resolve key events against them.
//!
//! ```ignore
//! use corne_keymap::corne::{encoder_map, KEYMAP};
//! use corne_keymap::event::KeyEvent;
//! use corne_keymap::keyboard::Keyboard;
//! use corne_keymap::keymap::KeyMap;
//!
//! let mut keyboard = Keyboard::new(KeyMap::new(&KEYMAP, encoder_map()));
//! let action = keyboard.process_key_event(KeyEvent::press(0, 0));
//! ```
//!
//! The keymap is checked at compile time, see [`validate`].

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod corne;
pub mod event;
pub mod keyboard;
pub mod keymap;
pub mod layout_macro;
pub mod validate;

pub use corne_types as types;
