//! Menu icon and boot logo bitmaps, one bit per pixel, msb first.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;
use uplink_core::render::MenuIcon;

const ICON_SIDE: u32 = 24;
const LOGO_SIDE: u32 = 32;

// Square-wave trace.
#[rustfmt::skip]
const RATE: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000011, 0b11111100,
    0b00000000, 0b00000011, 0b11111100,
    0b00000000, 0b00000011, 0b00001100,
    0b00000000, 0b00000011, 0b00001100,
    0b00001111, 0b11110011, 0b00001100,
    0b00001111, 0b11110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b00001100, 0b00110011, 0b00001100,
    0b11111111, 0b11111111, 0b11111111,
    0b11111111, 0b11111111, 0b11111111,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Ascending signal bars.
#[rustfmt::skip]
const POWER: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00111100,
    0b00000000, 0b00000000, 0b00111100,
    0b00000000, 0b00000000, 0b00111100,
    0b00000000, 0b00000000, 0b00111100,
    0b00000000, 0b00000000, 0b00111100,
    0b00000000, 0b00001111, 0b00111100,
    0b00000000, 0b00001111, 0b00111100,
    0b00000000, 0b00001111, 0b00111100,
    0b00000000, 0b00001111, 0b00111100,
    0b00000000, 0b00001111, 0b00111100,
    0b00000011, 0b11001111, 0b00111100,
    0b00000011, 0b11001111, 0b00111100,
    0b00000011, 0b11001111, 0b00111100,
    0b00000011, 0b11001111, 0b00111100,
    0b11110011, 0b11001111, 0b00111100,
    0b11110011, 0b11001111, 0b00111100,
    0b11110011, 0b11001111, 0b00111100,
    0b11110011, 0b11001111, 0b00111100,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Up arrow against a down arrow.
#[rustfmt::skip]
const RATIO: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000100, 0b00000000, 0b00000000,
    0b00001110, 0b00000000, 0b00000000,
    0b00011111, 0b00000000, 0b11100000,
    0b00111111, 0b10000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000000, 0b11100000,
    0b00001110, 0b00000011, 0b11111000,
    0b00001110, 0b00000001, 0b11110000,
    0b00000000, 0b00000000, 0b11100000,
    0b00000000, 0b00000000, 0b01000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Three chevrons pointing right.
#[rustfmt::skip]
const MOTION: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b11000001, 0b10000011, 0b00000000,
    0b01100000, 0b11000001, 0b10000000,
    0b00110000, 0b01100000, 0b11000000,
    0b00011000, 0b00110000, 0b01100000,
    0b00001100, 0b00011000, 0b00110000,
    0b00000110, 0b00001100, 0b00011000,
    0b00000011, 0b00000110, 0b00001100,
    0b00000001, 0b10000011, 0b00000110,
    0b00000011, 0b00000110, 0b00001100,
    0b00000110, 0b00001100, 0b00011000,
    0b00001100, 0b00011000, 0b00110000,
    0b00011000, 0b00110000, 0b01100000,
    0b00110000, 0b01100000, 0b11000000,
    0b01100000, 0b11000001, 0b10000000,
    0b11000001, 0b10000011, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Four-blade fan around a hub.
#[rustfmt::skip]
const FAN: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00111111, 0b10111101, 0b11111100,
    0b00111111, 0b10111101, 0b11111100,
    0b00111111, 0b10111101, 0b11111100,
    0b00111111, 0b10111101, 0b11111100,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Signal arcs over a dot.
#[rustfmt::skip]
const WIFI: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00001111, 0b11111111, 0b11110000,
    0b00111111, 0b11111111, 0b11111100,
    0b00111110, 0b00000000, 0b01111100,
    0b01111000, 0b00000000, 0b00011110,
    0b00000000, 0b00000000, 0b00000000,
    0b00000001, 0b11111111, 0b10000000,
    0b00000111, 0b11111111, 0b11100000,
    0b00000111, 0b10000001, 0b11100000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b11111111, 0b00000000,
    0b00000000, 0b11100111, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Two interlocked links.
#[rustfmt::skip]
const BIND: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00001111, 0b11111111, 0b11110000,
    0b00011111, 0b11111111, 0b11111000,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00110000, 0b00111100, 0b00001100,
    0b00011111, 0b11111111, 0b11111000,
    0b00001111, 0b11111111, 0b11110000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Down arrow into a tray.
#[rustfmt::skip]
const UPDATE: [u8; 72] = [
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000011, 0b11111111, 0b11000000,
    0b00000001, 0b11111111, 0b10000000,
    0b00000000, 0b11111111, 0b00000000,
    0b00000000, 0b01111110, 0b00000000,
    0b00000000, 0b00111100, 0b00000000,
    0b00000000, 0b00011000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
    0b00110000, 0b00000000, 0b00001100,
    0b00110000, 0b00000000, 0b00001100,
    0b00111111, 0b11111111, 0b11111100,
    0b00111111, 0b11111111, 0b11111100,
    0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000,
];

// Antenna over a U-shaped base.
#[rustfmt::skip]
const LOGO: [u8; 128] = [
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000011, 0b11000000, 0b00000000,
    0b00000000, 0b00000111, 0b11100000, 0b00000000,
    0b00000000, 0b01100111, 0b11100110, 0b00000000,
    0b00000000, 0b11000011, 0b11000011, 0b00000000,
    0b00000001, 0b10000001, 0b10000001, 0b10000000,
    0b00000001, 0b10000001, 0b10000001, 0b10000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000000, 0b00000001, 0b10000000, 0b00000000,
    0b00000011, 0b11000001, 0b10000011, 0b11000000,
    0b00000011, 0b11000001, 0b10000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000011, 0b11000000, 0b00000011, 0b11000000,
    0b00000001, 0b11111111, 0b11111111, 0b10000000,
    0b00000000, 0b11111111, 0b11111111, 0b00000000,
    0b00000000, 0b01111111, 0b11111110, 0b00000000,
    0b00000000, 0b00111111, 0b11111100, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
    0b00000000, 0b00000000, 0b00000000, 0b00000000,
];

pub(super) fn icon_raw(icon: MenuIcon) -> ImageRaw<'static, BinaryColor> {
    let data: &'static [u8] = match icon {
        MenuIcon::Rate => &RATE,
        MenuIcon::Power => &POWER,
        MenuIcon::Ratio => &RATIO,
        MenuIcon::Motion => &MOTION,
        MenuIcon::Fan => &FAN,
        MenuIcon::Wifi => &WIFI,
        MenuIcon::Bind => &BIND,
        MenuIcon::Update => &UPDATE,
    };
    ImageRaw::new(data, ICON_SIDE)
}

pub(super) fn logo_raw() -> ImageRaw<'static, BinaryColor> {
    ImageRaw::new(&LOGO, LOGO_SIDE)
}
