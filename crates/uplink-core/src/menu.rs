//! Top-level menu entries, capability gating, and wraparound stepping.

use crate::config::Capabilities;
use crate::params::Param;
use crate::render::MenuIcon;

/// One entry of the top-level menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuEntry {
    Rate,
    Power,
    TelemRatio,
    PowerSaving,
    SmartFan,
    Wifi,
    Bind,
    UpdateFw,
}

impl MenuEntry {
    /// Fixed browse order; gated entries are skipped at step time.
    pub const ORDER: [Self; 8] = [
        Self::Rate,
        Self::Power,
        Self::TelemRatio,
        Self::PowerSaving,
        Self::SmartFan,
        Self::Wifi,
        Self::Bind,
        Self::UpdateFw,
    ];

    /// Whether the entry exists on this hardware.
    pub const fn available(self, caps: Capabilities) -> bool {
        match self {
            Self::PowerSaving => caps.has_motion_sensor,
            Self::SmartFan => caps.has_thermal_sensor,
            _ => true,
        }
    }

    /// The editable parameter behind the entry, if it has one.
    pub const fn param(self) -> Option<Param> {
        match self {
            Self::Rate => Some(Param::Rate),
            Self::Power => Some(Param::Power),
            Self::TelemRatio => Some(Param::TelemRatio),
            Self::PowerSaving => Some(Param::PowerSaving),
            Self::SmartFan => Some(Param::SmartFan),
            Self::Wifi | Self::Bind | Self::UpdateFw => None,
        }
    }

    pub const fn lines(self) -> (&'static str, &'static str) {
        match self {
            Self::Rate => ("PACKET", "RATE"),
            Self::Power => ("TX", "POWER"),
            Self::TelemRatio => ("TELEM", "RATIO"),
            Self::PowerSaving => ("MOTION", "DETECT"),
            Self::SmartFan => ("SMART", "FAN"),
            Self::Wifi => ("WIFI", "MODE"),
            Self::Bind => ("BIND", "MODE"),
            Self::UpdateFw => ("UPDATE", "FW"),
        }
    }

    pub const fn icon(self) -> MenuIcon {
        match self {
            Self::Rate => MenuIcon::Rate,
            Self::Power => MenuIcon::Power,
            Self::TelemRatio => MenuIcon::Ratio,
            Self::PowerSaving => MenuIcon::Motion,
            Self::SmartFan => MenuIcon::Fan,
            Self::Wifi => MenuIcon::Wifi,
            Self::Bind => MenuIcon::Bind,
            Self::UpdateFw => MenuIcon::Update,
        }
    }

    /// Next entry in browse order, wrapping and skipping gated entries.
    ///
    /// Rate is never gated, so the walk always terminates.
    pub fn next(self, caps: Capabilities) -> Self {
        let mut slot = step_forward(self.slot(), Self::ORDER.len());
        while !Self::ORDER[slot].available(caps) {
            slot = step_forward(slot, Self::ORDER.len());
        }
        Self::ORDER[slot]
    }

    /// Previous entry in browse order, wrapping and skipping gated entries.
    pub fn prev(self, caps: Capabilities) -> Self {
        let mut slot = step_back(self.slot(), Self::ORDER.len());
        while !Self::ORDER[slot].available(caps) {
            slot = step_back(slot, Self::ORDER.len());
        }
        Self::ORDER[slot]
    }

    fn slot(self) -> usize {
        match self {
            Self::Rate => 0,
            Self::Power => 1,
            Self::TelemRatio => 2,
            Self::PowerSaving => 3,
            Self::SmartFan => 4,
            Self::Wifi => 5,
            Self::Bind => 6,
            Self::UpdateFw => 7,
        }
    }
}

fn step_forward(slot: usize, len: usize) -> usize {
    if slot + 1 >= len { 0 } else { slot + 1 }
}

fn step_back(slot: usize, len: usize) -> usize {
    if slot == 0 { len - 1 } else { slot - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_caps() -> Capabilities {
        Capabilities::new()
            .with_motion_sensor(true)
            .with_thermal_sensor(true)
    }

    #[test]
    fn down_visits_every_entry_in_order_when_nothing_is_gated() {
        let caps = full_caps();
        let mut entry = MenuEntry::Rate;
        let mut walk = Vec::new();
        for _ in 0..MenuEntry::ORDER.len() {
            walk.push(entry);
            entry = entry.next(caps);
        }
        assert_eq!(walk, MenuEntry::ORDER);
        assert_eq!(entry, MenuEntry::Rate);
    }

    #[test]
    fn gated_walk_skips_the_sensor_entries() {
        let caps = Capabilities::new();
        let mut entry = MenuEntry::Rate;
        let mut walk = Vec::new();
        for _ in 0..6 {
            walk.push(entry);
            entry = entry.next(caps);
        }
        assert_eq!(
            walk,
            [
                MenuEntry::Rate,
                MenuEntry::Power,
                MenuEntry::TelemRatio,
                MenuEntry::Wifi,
                MenuEntry::Bind,
                MenuEntry::UpdateFw,
            ]
        );
        assert_eq!(entry, MenuEntry::Rate);
    }

    #[test]
    fn up_and_down_stay_inverse_across_gaps() {
        let caps = Capabilities::new().with_thermal_sensor(true);
        for entry in MenuEntry::ORDER {
            if !entry.available(caps) {
                continue;
            }
            assert_eq!(entry.next(caps).prev(caps), entry, "{entry:?}");
            assert_eq!(entry.prev(caps).next(caps), entry, "{entry:?}");
        }
    }

    #[test]
    fn single_gap_is_skipped_both_ways() {
        let caps = Capabilities::new().with_motion_sensor(true);
        assert_eq!(MenuEntry::PowerSaving.next(caps), MenuEntry::Wifi);
        assert_eq!(MenuEntry::Wifi.prev(caps), MenuEntry::PowerSaving);
    }

    #[test]
    fn browse_order_wraps_backwards_from_the_first_entry() {
        let caps = full_caps();
        assert_eq!(MenuEntry::Rate.prev(caps), MenuEntry::UpdateFw);
        assert_eq!(MenuEntry::UpdateFw.next(caps), MenuEntry::Rate);
    }
}
