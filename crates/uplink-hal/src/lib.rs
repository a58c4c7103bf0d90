//! Board-facing layer: buttons, OLED bring-up, and screen rendering.

#![cfg_attr(not(test), no_std)]

pub mod input;
pub mod platform;
pub mod render;
