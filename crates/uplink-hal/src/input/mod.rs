//! Input drivers producing [`uplink_core::input::InputEvent`]s.

pub mod buttons;
