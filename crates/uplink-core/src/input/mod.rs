//! User action seam between board input drivers and the app.

pub mod mock;

/// One user action, already debounced and mapped by the board layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Up,
    Down,
    Confirm,
    Back,
}

/// Polled source of user actions.
pub trait InputProvider {
    type Error;

    /// Returns the next pending event, or `None` when the queue is drained.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
