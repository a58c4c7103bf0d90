//! Peripheral bring-up helpers for the front panel.

pub mod display;
