//! Debounced four-button pad over `embedded-hal` input pins.

use embedded_hal::digital::{ErrorType, InputPin};
use heapless::Deque;
use uplink_core::input::{InputEvent, InputProvider};

/// Electrical and timing knobs for the pad.
#[derive(Clone, Copy, Debug)]
pub struct ButtonConfig {
    /// Pins read low while pressed (pull-up wiring).
    pub active_low: bool,
    /// Consecutive polls a changed level must hold before it is accepted.
    pub debounce_polls: u8,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            debounce_polls: 3,
        }
    }
}

impl ButtonConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

/// Fault on one of the pad pins.
#[derive(Debug)]
pub enum ButtonPadError<UpErr, DownErr, ConfirmErr, BackErr> {
    Up(UpErr),
    Down(DownErr),
    Confirm(ConfirmErr),
    Back(BackErr),
}

pub type ButtonPadResult<T, UP, DOWN, CONFIRM, BACK> = Result<
    T,
    ButtonPadError<
        <UP as ErrorType>::Error,
        <DOWN as ErrorType>::Error,
        <CONFIRM as ErrorType>::Error,
        <BACK as ErrorType>::Error,
    >,
>;

#[derive(Clone, Copy, Debug)]
struct DebounceState {
    raw: bool,
    stable: bool,
    stable_count: u8,
}

impl DebounceState {
    const fn new(pressed: bool) -> Self {
        Self {
            raw: pressed,
            stable: pressed,
            stable_count: 0,
        }
    }

    /// Feeds one sample; true when the stable state flips to pressed.
    fn feed(&mut self, pressed: bool, threshold: u8) -> bool {
        if pressed != self.raw {
            self.raw = pressed;
            self.stable_count = 1;
        } else if pressed != self.stable {
            self.stable_count = self.stable_count.saturating_add(1);
        } else {
            self.stable_count = 0;
            return false;
        }
        if self.stable_count >= threshold {
            self.stable = pressed;
            self.stable_count = 0;
            return pressed;
        }
        false
    }
}

/// Four momentary buttons mapped straight onto the app's action set.
///
/// Presses are reported once per stable falling-into-pressed transition;
/// releases stay silent. Presses landing on the same poll are queued in
/// Up, Down, Confirm, Back order.
pub struct ButtonPad<UP, DOWN, CONFIRM, BACK>
where
    UP: InputPin,
    DOWN: InputPin,
    CONFIRM: InputPin,
    BACK: InputPin,
{
    up: UP,
    down: DOWN,
    confirm: CONFIRM,
    back: BACK,
    config: ButtonConfig,
    up_state: DebounceState,
    down_state: DebounceState,
    confirm_state: DebounceState,
    back_state: DebounceState,
    pending: Deque<InputEvent, 4>,
}

impl<UP, DOWN, CONFIRM, BACK> ButtonPad<UP, DOWN, CONFIRM, BACK>
where
    UP: InputPin,
    DOWN: InputPin,
    CONFIRM: InputPin,
    BACK: InputPin,
{
    /// Reads the initial levels so a button held at boot does not fire.
    pub fn new(
        mut up: UP,
        mut down: DOWN,
        mut confirm: CONFIRM,
        mut back: BACK,
        config: ButtonConfig,
    ) -> ButtonPadResult<Self, UP, DOWN, CONFIRM, BACK> {
        let active_low = config.active_low;
        let up_state =
            DebounceState::new(pressed_from_level(up.is_high().map_err(ButtonPadError::Up)?, active_low));
        let down_state = DebounceState::new(pressed_from_level(
            down.is_high().map_err(ButtonPadError::Down)?,
            active_low,
        ));
        let confirm_state = DebounceState::new(pressed_from_level(
            confirm.is_high().map_err(ButtonPadError::Confirm)?,
            active_low,
        ));
        let back_state = DebounceState::new(pressed_from_level(
            back.is_high().map_err(ButtonPadError::Back)?,
            active_low,
        ));
        Ok(Self {
            up,
            down,
            confirm,
            back,
            config,
            up_state,
            down_state,
            confirm_state,
            back_state,
            pending: Deque::new(),
        })
    }
}

impl<UP, DOWN, CONFIRM, BACK> InputProvider for ButtonPad<UP, DOWN, CONFIRM, BACK>
where
    UP: InputPin,
    DOWN: InputPin,
    CONFIRM: InputPin,
    BACK: InputPin,
{
    type Error = ButtonPadError<UP::Error, DOWN::Error, CONFIRM::Error, BACK::Error>;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }

        let active_low = self.config.active_low;
        let threshold = self.config.debounce_polls;

        let pressed =
            pressed_from_level(self.up.is_high().map_err(ButtonPadError::Up)?, active_low);
        if self.up_state.feed(pressed, threshold) {
            let _ = self.pending.push_back(InputEvent::Up);
        }
        let pressed =
            pressed_from_level(self.down.is_high().map_err(ButtonPadError::Down)?, active_low);
        if self.down_state.feed(pressed, threshold) {
            let _ = self.pending.push_back(InputEvent::Down);
        }
        let pressed = pressed_from_level(
            self.confirm.is_high().map_err(ButtonPadError::Confirm)?,
            active_low,
        );
        if self.confirm_state.feed(pressed, threshold) {
            let _ = self.pending.push_back(InputEvent::Confirm);
        }
        let pressed =
            pressed_from_level(self.back.is_high().map_err(ButtonPadError::Back)?, active_low);
        if self.back_state.feed(pressed, threshold) {
            let _ = self.pending.push_back(InputEvent::Back);
        }

        Ok(self.pending.pop_front())
    }
}

#[inline]
fn pressed_from_level(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePin {
        levels: Vec<bool>,
        cursor: usize,
    }

    impl FakePin {
        fn new(levels: &[bool]) -> Self {
            Self {
                levels: levels.to_vec(),
                cursor: 0,
            }
        }

        fn held(level: bool) -> Self {
            Self::new(&[level])
        }
    }

    impl ErrorType for FakePin {
        type Error = core::convert::Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            // The last scripted level repeats once the script runs out.
            let index = self.cursor.min(self.levels.len() - 1);
            self.cursor += 1;
            Ok(self.levels[index])
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    fn make_pad(
        up: FakePin,
        down: FakePin,
        confirm: FakePin,
        back: FakePin,
        config: ButtonConfig,
    ) -> ButtonPad<FakePin, FakePin, FakePin, FakePin> {
        ButtonPad::new(up, down, confirm, back, config).unwrap()
    }

    #[test]
    fn press_fires_once_after_debounce_polls() {
        // First level is consumed by the constructor.
        let up = FakePin::new(&[true, false, false, true, true, false, false]);
        let mut pad = make_pad(
            up,
            FakePin::held(true),
            FakePin::held(true),
            FakePin::held(true),
            ButtonConfig::default().with_debounce_polls(2),
        );

        assert_eq!(pad.poll_event().unwrap(), None);
        assert_eq!(pad.poll_event().unwrap(), Some(InputEvent::Up));
        assert_eq!(pad.poll_event().unwrap(), None);
        assert_eq!(pad.poll_event().unwrap(), None);
        assert_eq!(pad.poll_event().unwrap(), None);
        assert_eq!(pad.poll_event().unwrap(), Some(InputEvent::Up));
        assert_eq!(pad.poll_event().unwrap(), None);
    }

    #[test]
    fn bounce_shorter_than_threshold_is_ignored() {
        let confirm = FakePin::new(&[true, false, false, true]);
        let mut pad = make_pad(
            FakePin::held(true),
            FakePin::held(true),
            confirm,
            FakePin::held(true),
            ButtonConfig::default().with_debounce_polls(3),
        );

        for _ in 0..6 {
            assert_eq!(pad.poll_event().unwrap(), None);
        }
    }

    #[test]
    fn simultaneous_presses_queue_in_sample_order() {
        let up = FakePin::new(&[true, false]);
        let confirm = FakePin::new(&[true, false]);
        let mut pad = make_pad(
            up,
            FakePin::held(true),
            confirm,
            FakePin::held(true),
            ButtonConfig::default().with_debounce_polls(1),
        );

        assert_eq!(pad.poll_event().unwrap(), Some(InputEvent::Up));
        assert_eq!(pad.poll_event().unwrap(), Some(InputEvent::Confirm));
        assert_eq!(pad.poll_event().unwrap(), None);
    }

    #[test]
    fn active_high_wiring_maps_presses() {
        let back = FakePin::new(&[false, true]);
        let mut pad = make_pad(
            FakePin::held(false),
            FakePin::held(false),
            FakePin::held(false),
            back,
            ButtonConfig::default()
                .with_active_low(false)
                .with_debounce_polls(1),
        );

        assert_eq!(pad.poll_event().unwrap(), Some(InputEvent::Back));
        assert_eq!(pad.poll_event().unwrap(), None);
    }

    #[test]
    fn button_held_at_boot_stays_quiet() {
        let down = FakePin::held(false);
        let mut pad = make_pad(
            FakePin::held(true),
            down,
            FakePin::held(true),
            FakePin::held(true),
            ButtonConfig::default().with_debounce_polls(1),
        );

        for _ in 0..4 {
            assert_eq!(pad.poll_event().unwrap(), None);
        }
    }
}
