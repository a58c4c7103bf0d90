impl<IN, LK> UplinkApp<IN, LK>
where
    IN: InputProvider,
    LK: LinkPort,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("menu-nav: input provider fault; stopping drain");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        self.last_input_ms = now_ms;
        match self.ui {
            UiState::Boot => {
                debug!("menu-nav: ignoring {event:?} during boot");
            }
            UiState::Idle => {
                // Any action while idle opens the menu at the last visited
                // entry.
                self.enter_menu(self.menu_entry);
            }
            UiState::Menu => self.apply_menu_input(event),
            UiState::ValueEdit { param, cursor } => {
                self.apply_value_edit_input(param, cursor, event);
            }
            UiState::WifiInfo => self.apply_wifi_info_input(event),
            UiState::BindConfirm => self.apply_bind_confirm_input(event),
            UiState::Binding => {
                debug!("menu-nav: ignoring {event:?} while binding");
            }
        }
    }

    fn apply_menu_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Up => {
                let entry = self.menu_entry.prev(self.config.capabilities);
                debug!("menu-nav: browse up {:?} -> {:?}", self.menu_entry, entry);
                self.enter_menu(entry);
            }
            InputEvent::Down => {
                let entry = self.menu_entry.next(self.config.capabilities);
                debug!("menu-nav: browse down {:?} -> {:?}", self.menu_entry, entry);
                self.enter_menu(entry);
            }
            InputEvent::Confirm => self.select_menu_entry(),
            InputEvent::Back => self.enter_idle(),
        }
    }

    fn select_menu_entry(&mut self) {
        if let Some(param) = self.menu_entry.param() {
            self.enter_value_edit(param);
            return;
        }
        match self.menu_entry {
            MenuEntry::Wifi => {
                self.enter_wifi_info();
                self.link.wifi_mode_entered();
            }
            MenuEntry::UpdateFw => {
                // The update portal rides on the wifi screen.
                self.enter_wifi_info();
                self.link.firmware_update_entered();
            }
            MenuEntry::Bind => self.enter_bind_confirm(),
            _ => {}
        }
    }

    fn apply_value_edit_input(&mut self, param: Param, cursor: u8, event: InputEvent) {
        match event {
            InputEvent::Up => self.step_value(param, cursor, true),
            InputEvent::Down => self.step_value(param, cursor, false),
            InputEvent::Confirm => self.commit_value(param, cursor),
            InputEvent::Back => {
                debug!("menu-nav: discard {param:?} edit at {cursor}");
                self.enter_menu(self.menu_entry);
            }
        }
    }

    fn step_value(&mut self, param: Param, cursor: u8, up: bool) {
        let next = param.advance(cursor, up);
        debug!("menu-nav: step {param:?} {cursor} -> {next}");
        self.ui = UiState::ValueEdit {
            param,
            cursor: next,
        };
        self.pending_redraw = true;
    }

    fn commit_value(&mut self, param: Param, cursor: u8) {
        debug!("menu-nav: commit {param:?} = {cursor}");
        self.selections.set_index(param, cursor);
        self.link.value_committed(param, cursor);
        self.enter_idle();
    }

    fn apply_wifi_info_input(&mut self, event: InputEvent) {
        if event == InputEvent::Back {
            self.enter_menu(self.menu_entry);
        }
    }

    fn apply_bind_confirm_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Confirm => self.enter_binding(),
            InputEvent::Back => self.enter_menu(self.menu_entry),
            InputEvent::Up | InputEvent::Down => {}
        }
    }
}
