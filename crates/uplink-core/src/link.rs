//! Outbound notifications to the radio side of the module.

use crate::params::Param;

/// Sink for UI decisions the link side has to act on.
///
/// Implementations own persistence and radio scheduling; the app only
/// reports what the user confirmed.
pub trait LinkPort {
    /// The user committed a new option index for `param`.
    fn value_committed(&mut self, param: Param, index: u8);

    /// The wifi page was entered; bring the portal up.
    fn wifi_mode_entered(&mut self);

    /// The user confirmed sending a bind request.
    fn binding_started(&mut self);

    /// The firmware update page was entered.
    fn firmware_update_entered(&mut self);
}

/// Link sink that drops every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLink;

impl NullLink {
    pub const fn new() -> Self {
        Self
    }
}

impl LinkPort for NullLink {
    fn value_committed(&mut self, _param: Param, _index: u8) {}

    fn wifi_mode_entered(&mut self) {}

    fn binding_started(&mut self) {}

    fn firmware_update_entered(&mut self) {}
}
