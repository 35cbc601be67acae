//! # Corne types
//!
//! Fundamental type definitions shared by the crkbd keymap crates.
//!
//! ## Modules
//!
//! - [`action`] - What a key position or an encoder direction does: keys, layer switches, boot
//! - [`keycode`] - HID keycodes and the lighting keycodes handled by the host firmware
//! - [`modifier`] - Modifier key combinations
//!
//! `corne-keymap` stores these types in its static tables, `corne-config`
//! produces them when parsing `keyboard.toml`.

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
