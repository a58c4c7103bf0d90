impl<IN, LK> UplinkApp<IN, LK>
where
    IN: InputProvider,
    LK: LinkPort,
{
    /// Mirrors link-side selections reported over telemetry.
    ///
    /// Indices are clamped into each option range. On the idle page any
    /// number of changed fields coalesce into one render request; everywhere
    /// else the update is stored silently so menu sessions keep their frame.
    pub fn handle_telemetry(&mut self, rate: u8, power: u8, ratio: u8) {
        let before = self.selections;
        self.selections.set_index(Param::Rate, rate);
        self.selections.set_index(Param::Power, power);
        self.selections.set_index(Param::TelemRatio, ratio);
        if self.selections != before && matches!(self.ui, UiState::Idle) {
            debug!("menu-nav: telemetry changed idle status");
            self.pending_redraw = true;
        }
    }

    /// Stores the reported temperature for the idle descriptor.
    ///
    /// Nothing draws it yet, so no render is requested.
    pub fn handle_temperature(&mut self, celsius: u8) {
        self.temperature = Some(celsius);
    }
}
