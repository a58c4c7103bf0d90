//! Loopback link endpoint used until the radio task lands.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use log::info;
use uplink_core::link::LinkPort;
use uplink_core::params::Param;

const CHANNEL_DEPTH: usize = 8;
// Placeholder reading reported with each telemetry echo.
const MODULE_TEMP_C: u8 = 25;

/// Link-side updates applied to the app between ticks.
#[derive(Clone, Copy, Debug)]
pub enum LinkUpdate {
    Telemetry { rate: u8, power: u8, ratio: u8 },
    Temperature(u8),
    BindComplete,
}

static LINK_UPDATES: Channel<CriticalSectionRawMutex, LinkUpdate, CHANNEL_DEPTH> = Channel::new();

pub fn updates() -> Receiver<'static, CriticalSectionRawMutex, LinkUpdate, CHANNEL_DEPTH> {
    LINK_UPDATES.receiver()
}

/// Stands in for the radio task: records confirmed selections and loops
/// them back as live telemetry, so the idle mirror path runs end to end.
#[derive(Debug, Default)]
pub struct LinkBridge {
    rate: u8,
    power: u8,
    ratio: u8,
}

impl LinkBridge {
    pub const fn new() -> Self {
        Self {
            rate: 0,
            power: 0,
            ratio: 0,
        }
    }

    fn push(&self, update: LinkUpdate) {
        if LINK_UPDATES.try_send(update).is_err() {
            info!("link: update queue full, dropping {:?}", update);
        }
    }
}

impl LinkPort for LinkBridge {
    fn value_committed(&mut self, param: Param, index: u8) {
        info!("link: committed {:?} index {}", param, index);
        match param {
            Param::Rate => self.rate = index,
            Param::Power => self.power = index,
            Param::TelemRatio => self.ratio = index,
            // Motion and fan settings are not part of the telemetry echo.
            Param::PowerSaving | Param::SmartFan => return,
        }
        self.push(LinkUpdate::Telemetry {
            rate: self.rate,
            power: self.power,
            ratio: self.ratio,
        });
        self.push(LinkUpdate::Temperature(MODULE_TEMP_C));
    }

    fn wifi_mode_entered(&mut self) {
        info!("link: wifi mode entered");
    }

    fn binding_started(&mut self) {
        info!("link: bind request sent");
        self.push(LinkUpdate::BindComplete);
    }

    fn firmware_update_entered(&mut self) {
        info!("link: firmware update entered");
    }
}
