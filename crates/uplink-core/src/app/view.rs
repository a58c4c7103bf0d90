impl<IN, LK> UplinkApp<IN, LK>
where
    IN: InputProvider,
    LK: LinkPort,
{
    pub fn new(input: IN, link: LK, config: DeviceConfig) -> Self {
        Self {
            input,
            link,
            config,
            ui: UiState::Boot,
            menu_entry: MenuEntry::Rate,
            selections: SelectionState::new(),
            temperature: None,
            pending_redraw: true,
            last_input_ms: 0,
        }
    }

    /// Drains pending input and reports whether the screen needs repainting.
    ///
    /// Any number of transitions inside one tick collapse into a single
    /// render request.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Lends the current screen descriptor to a renderer.
    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let screen = match self.ui {
            UiState::Boot => Screen::Boot {
                version: self.config.fw_version,
            },
            UiState::Idle => Screen::Idle {
                rate: self.selections.value(Param::Rate),
                ratio: self.selections.value(Param::TelemRatio),
                power: self.selections.value(Param::Power),
                version: self.config.fw_version,
                temperature: self.temperature,
            },
            UiState::Menu => {
                let (line1, line2) = self.menu_entry.lines();
                Screen::Menu {
                    line1,
                    line2,
                    icon: self.menu_entry.icon(),
                }
            }
            UiState::ValueEdit { param, cursor } => Screen::ValueEdit {
                param,
                value: param.option_label(cursor),
                index: cursor,
                count: param.option_count(),
            },
            UiState::WifiInfo => Screen::WifiInfo {
                access: self.config.wifi,
            },
            UiState::BindConfirm => Screen::BindConfirm,
            UiState::Binding => Screen::Binding,
        };
        f(screen);
    }

    /// The index the link side last confirmed for `param`.
    pub fn committed_index(&self, param: Param) -> u8 {
        self.selections.index(param)
    }
}
