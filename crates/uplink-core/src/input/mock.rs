//! Stand-in input source for bring-up and host tests.

use core::convert::Infallible;

use super::{InputEvent, InputProvider};

/// Input source that never reports anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }
}
