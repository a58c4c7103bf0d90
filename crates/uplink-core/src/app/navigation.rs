impl<IN, LK> UplinkApp<IN, LK>
where
    IN: InputProvider,
    LK: LinkPort,
{
    /// Puts the UI on the idle status page.
    ///
    /// The host calls this once bring-up finishes and again when the link
    /// reports a completed bind; internally it ends menu sessions.
    pub fn enter_idle(&mut self) {
        debug!("menu-nav: enter idle");
        self.ui = UiState::Idle;
        self.pending_redraw = true;
    }

    fn enter_menu(&mut self, entry: MenuEntry) {
        debug!("menu-nav: enter menu at {entry:?}");
        self.menu_entry = entry;
        self.ui = UiState::Menu;
        self.pending_redraw = true;
    }

    fn enter_value_edit(&mut self, param: Param) {
        let cursor = self.selections.index(param);
        debug!(
            "menu-nav: edit {param:?} from {cursor} of {}",
            param.option_count()
        );
        self.ui = UiState::ValueEdit { param, cursor };
        self.pending_redraw = true;
    }

    fn enter_wifi_info(&mut self) {
        debug!("menu-nav: enter wifi info");
        self.ui = UiState::WifiInfo;
        self.pending_redraw = true;
    }

    fn enter_bind_confirm(&mut self) {
        debug!("menu-nav: enter bind confirm");
        self.ui = UiState::BindConfirm;
        self.pending_redraw = true;
    }

    fn enter_binding(&mut self) {
        debug!("menu-nav: enter binding");
        self.ui = UiState::Binding;
        self.pending_redraw = true;
        self.link.binding_started();
    }

    /// Whether the menu session has sat untouched long enough to fall back
    /// to idle.
    ///
    /// Only browse and confirmation contexts time out; the wifi page and an
    /// active bind stay up until acted on.
    pub fn auto_idle_due(&self, now_ms: u64, timeout_ms: u64) -> bool {
        let timed_state = matches!(
            self.ui,
            UiState::Menu | UiState::ValueEdit { .. } | UiState::BindConfirm
        );
        timed_state && now_ms.saturating_sub(self.last_input_ms) >= timeout_ms
    }
}
