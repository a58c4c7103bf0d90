//! Draws [`Screen`] descriptors onto the 128x64 panel.

mod icons;

use core::fmt::Write as _;

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15, FONT_10X20};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Text};
use uplink_core::config::WifiAccess;
use uplink_core::params::Param;
use uplink_core::render::{MenuIcon, Screen};

/// Renders one screen into `target` and reports whether the frame was
/// touched.
///
/// The motion and fan value pages are tracked by the app but have no layout
/// yet; for those nothing is drawn and the previous frame stays up, so the
/// caller must skip its flush when this returns `false`.
pub fn draw<D>(screen: &Screen<'_>, target: &mut D) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    match screen {
        Screen::Boot { version } => draw_boot(target, version)?,
        Screen::Idle {
            rate,
            ratio,
            power,
            version,
            temperature: _,
        } => draw_idle(target, rate, ratio, power, version)?,
        Screen::Menu { line1, line2, icon } => draw_menu(target, line1, line2, *icon)?,
        Screen::ValueEdit {
            param,
            value,
            index,
            count,
        } => {
            if matches!(param, Param::PowerSaving | Param::SmartFan) {
                return Ok(false);
            }
            draw_value_edit(target, *param, value, *index, *count)?;
        }
        Screen::WifiInfo { access } => draw_wifi_info(target, *access)?,
        Screen::BindConfirm => draw_bind_confirm(target)?,
        Screen::Binding => draw_binding(target)?,
    }
    Ok(true)
}

fn small_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn body_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_9X15)
        .text_color(BinaryColor::On)
        .build()
}

fn value_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

fn draw_boot<D>(target: &mut D, version: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let logo = icons::logo_raw();
    Image::new(&logo, Point::new(48, 6)).draw(target)?;
    Text::with_alignment(version, Point::new(64, 58), small_style(), Alignment::Center)
        .draw(target)?;
    Ok(())
}

fn draw_idle<D>(
    target: &mut D,
    rate: &str,
    ratio: &str,
    power: &str,
    version: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let small = small_style();
    let body = body_style();
    Text::new("UPLINK", Point::new(0, 10), small).draw(target)?;
    Text::new("Ver:", Point::new(0, 24), small).draw(target)?;
    Text::new(version, Point::new(30, 24), small).draw(target)?;
    Text::new(rate, Point::new(0, 42), body).draw(target)?;
    Text::new(ratio, Point::new(70, 42), body).draw(target)?;
    Text::new(power, Point::new(0, 57), body).draw(target)?;
    Text::new("TLM", Point::new(70, 57), small).draw(target)?;
    Ok(())
}

fn draw_menu<D>(target: &mut D, line1: &str, line2: &str, icon: MenuIcon) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let body = body_style();
    Text::new(line1, Point::new(0, 22), body).draw(target)?;
    Text::new(line2, Point::new(0, 48), body).draw(target)?;
    let raw = icons::icon_raw(icon);
    Image::new(&raw, Point::new(96, 20)).draw(target)?;
    Ok(())
}

fn draw_value_edit<D>(
    target: &mut D,
    param: Param,
    value: &str,
    index: u8,
    count: u8,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let small = small_style();
    Text::new(value, Point::new(0, 24), value_style()).draw(target)?;

    let mut position = heapless::String::<8>::new();
    let _ = write!(position, "{}/{}", index.saturating_add(1), count);
    Text::new(position.as_str(), Point::new(0, 44), small).draw(target)?;

    Text::new("PRESS TO", Point::new(72, 48), small).draw(target)?;
    Text::new("CONFIRM", Point::new(72, 60), small).draw(target)?;
    let raw = icons::icon_raw(param_icon(param));
    Image::new(&raw, Point::new(96, 8)).draw(target)?;
    Ok(())
}

fn draw_wifi_info<D>(target: &mut D, access: WifiAccess) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let small = small_style();
    match access {
        WifiAccess::HomeNetwork { url } => {
            Text::new("open http://", Point::new(0, 10), small).draw(target)?;
            Text::new(url, Point::new(0, 30), small).draw(target)?;
            Text::new("by browser", Point::new(0, 60), small).draw(target)?;
        }
        WifiAccess::AccessPoint {
            ssid,
            password,
            address,
        } => {
            Text::new(ssid, Point::new(0, 10), small).draw(target)?;
            Text::new(password, Point::new(0, 30), small).draw(target)?;
            Text::new(address, Point::new(0, 60), small).draw(target)?;
        }
    }
    Ok(())
}

fn draw_bind_confirm<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    let body = body_style();
    Text::new("PRESS TO SEND", Point::new(0, 20), body).draw(target)?;
    Text::new("BIND REQUEST", Point::new(0, 44), body).draw(target)?;
    Ok(())
}

fn draw_binding<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    Text::new("BINDING", Point::new(29, 38), value_style()).draw(target)?;
    Ok(())
}

fn param_icon(param: Param) -> MenuIcon {
    match param {
        Param::Rate => MenuIcon::Rate,
        Param::Power => MenuIcon::Power,
        Param::TelemRatio => MenuIcon::Ratio,
        Param::PowerSaving => MenuIcon::Motion,
        Param::SmartFan => MenuIcon::Fan,
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_graphics::Pixel;
    use embedded_graphics::primitives::Rectangle;

    use super::*;

    struct CountingTarget {
        lit: usize,
    }

    impl CountingTarget {
        fn new() -> Self {
            Self { lit: 0 }
        }
    }

    impl Dimensions for CountingTarget {
        fn bounding_box(&self) -> Rectangle {
            Rectangle::new(Point::zero(), Size::new(128, 64))
        }
    }

    impl DrawTarget for CountingTarget {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(_, color) in pixels {
                if color == BinaryColor::On {
                    self.lit += 1;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn drawn_screens_touch_the_frame() {
        let screens = [
            Screen::Boot { version: "3.4.1" },
            Screen::Idle {
                rate: "500HZ",
                ratio: "OFF",
                power: "10mW",
                version: "3.4.1",
                temperature: Some(30),
            },
            Screen::Menu {
                line1: "PACKET",
                line2: "RATE",
                icon: MenuIcon::Rate,
            },
            Screen::ValueEdit {
                param: Param::Rate,
                value: "250HZ",
                index: 1,
                count: 4,
            },
            Screen::WifiInfo {
                access: WifiAccess::HomeNetwork {
                    url: "uplink.local",
                },
            },
            Screen::WifiInfo {
                access: WifiAccess::AccessPoint {
                    ssid: "Uplink TX",
                    password: "uplink",
                    address: "10.0.0.1",
                },
            },
            Screen::BindConfirm,
            Screen::Binding,
        ];
        for screen in &screens {
            let mut target = CountingTarget::new();
            assert_eq!(draw(screen, &mut target), Ok(true));
            assert!(target.lit > 0);
        }
    }

    #[test]
    fn hidden_value_pages_leave_the_frame_alone() {
        for param in [Param::PowerSaving, Param::SmartFan] {
            let mut target = CountingTarget::new();
            let screen = Screen::ValueEdit {
                param,
                value: "OFF",
                index: 0,
                count: 2,
            };
            assert_eq!(draw(&screen, &mut target), Ok(false));
            assert_eq!(target.lit, 0);
        }
    }

    #[test]
    fn every_icon_has_at_least_one_lit_pixel() {
        let icons = [
            MenuIcon::Rate,
            MenuIcon::Power,
            MenuIcon::Ratio,
            MenuIcon::Motion,
            MenuIcon::Fan,
            MenuIcon::Wifi,
            MenuIcon::Bind,
            MenuIcon::Update,
        ];
        for icon in icons {
            let mut target = CountingTarget::new();
            let screen = Screen::Menu {
                line1: "",
                line2: "",
                icon,
            };
            assert_eq!(draw(&screen, &mut target), Ok(true));
            assert!(target.lit > 0, "{icon:?} is blank");
        }
    }
}
