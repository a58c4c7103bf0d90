//! Screen descriptors handed to the board renderer.

use crate::config::WifiAccess;
use crate::params::Param;

/// Icon shown next to a menu entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuIcon {
    Rate,
    Power,
    Ratio,
    Motion,
    Fan,
    Wifi,
    Bind,
    Update,
}

/// App-level view model consumed by the board renderer.
pub enum Screen<'a> {
    Boot {
        version: &'a str,
    },
    Idle {
        rate: &'a str,
        ratio: &'a str,
        power: &'a str,
        version: &'a str,
        /// Last reported temperature in degrees Celsius, if any arrived.
        temperature: Option<u8>,
    },
    Menu {
        line1: &'a str,
        line2: &'a str,
        icon: MenuIcon,
    },
    ValueEdit {
        param: Param,
        value: &'a str,
        index: u8,
        count: u8,
    },
    WifiInfo {
        access: WifiAccess,
    },
    BindConfirm,
    Binding,
}
