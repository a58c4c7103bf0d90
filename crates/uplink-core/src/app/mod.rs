//! Menu navigation state machine for the transmitter's front display.

use log::debug;

use crate::config::DeviceConfig;
use crate::input::{InputEvent, InputProvider};
use crate::link::LinkPort;
use crate::menu::MenuEntry;
use crate::params::{Param, SelectionState};
use crate::render::Screen;

/// What the host loop should do after a tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Where the UI currently is.
///
/// `ValueEdit` carries the edit cursor so an abandoned edit leaves the
/// committed selection untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Boot,
    Idle,
    Menu,
    ValueEdit { param: Param, cursor: u8 },
    WifiInfo,
    BindConfirm,
    Binding,
}

pub struct UplinkApp<IN, LK>
where
    IN: InputProvider,
    LK: LinkPort,
{
    input: IN,
    link: LK,
    config: DeviceConfig,
    ui: UiState,
    menu_entry: MenuEntry,
    selections: SelectionState,
    temperature: Option<u8>,
    pending_redraw: bool,
    last_input_ms: u64,
}

include!("view.rs");
include!("input.rs");
include!("navigation.rs");
include!("telemetry.rs");
