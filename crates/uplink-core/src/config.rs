//! Runtime device description resolved once at startup.

/// Optional sensors fitted to the board.
///
/// The menu only offers motion power saving and smart fan control when the
/// matching sensor is present.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Capabilities {
    pub has_motion_sensor: bool,
    pub has_thermal_sensor: bool,
}

impl Capabilities {
    pub const fn new() -> Self {
        Self {
            has_motion_sensor: false,
            has_thermal_sensor: false,
        }
    }

    pub const fn with_motion_sensor(mut self, present: bool) -> Self {
        self.has_motion_sensor = present;
        self
    }

    pub const fn with_thermal_sensor(mut self, present: bool) -> Self {
        self.has_thermal_sensor = present;
        self
    }
}

/// How the module's wifi portal is reached once it is up.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WifiAccess {
    /// Joined the user's network; the portal is at a plain URL.
    HomeNetwork { url: &'static str },
    /// Running its own access point.
    AccessPoint {
        ssid: &'static str,
        password: &'static str,
        address: &'static str,
    },
}

/// Everything the UI needs to know about the device it runs on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeviceConfig {
    pub fw_version: &'static str,
    pub capabilities: Capabilities,
    pub wifi: WifiAccess,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            fw_version: "0.0.0",
            capabilities: Capabilities::new(),
            wifi: WifiAccess::AccessPoint {
                ssid: "Uplink TX",
                password: "uplink",
                address: "10.0.0.1",
            },
        }
    }
}
