//! Display-independent navigation core for the transmitter front panel.
//!
//! Everything in here is plain state-machine logic: menu browsing, value
//! editing, and the mirror of link-side selections. No peripheral types leak
//! in; boards plug in through [`input::InputProvider`] and [`link::LinkPort`]
//! and render whatever [`app::UplinkApp::with_screen`] lends out.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod input;
pub mod link;
pub mod menu;
pub mod params;
pub mod render;
